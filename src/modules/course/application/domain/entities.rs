use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Graded item stored inline on the course as a JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub name: String,
    /// quiz, assignment, midterm, final
    #[serde(rename = "type")]
    pub kind: String,
    pub due_date: Option<NaiveDate>,
    pub marks: Option<f32>,
    pub total_marks: Option<f32>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct Course {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub code: String,
    pub instructor: String,
    pub credits: i32,
    pub grade: Option<String>,
    /// 0-100
    pub completion_percentage: i16,
    pub assessments: Vec<Assessment>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
