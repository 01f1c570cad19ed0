mod add_assessment;
mod course_stats;
mod create_course;
mod delete_course;
mod list_courses;
mod update_course;

pub use add_assessment::*;
pub use course_stats::*;
pub use create_course::*;
pub use delete_course::*;
pub use list_courses::*;
pub use update_course::*;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::course::application::domain::entities::{Assessment, Course};

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDto {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[schema(value_type = Option<String>)]
    pub due_date: Option<NaiveDate>,
    pub marks: Option<f32>,
    pub total_marks: Option<f32>,
    pub completed: bool,
}

impl From<Assessment> for AssessmentDto {
    fn from(a: Assessment) -> Self {
        Self {
            name: a.name,
            kind: a.kind,
            due_date: a.due_date,
            marks: a.marks,
            total_marks: a.total_marks,
            completed: a.completed,
        }
    }
}

/// Course shape shared by the create/list/update/assessment responses.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: String,
    pub name: String,
    pub code: String,
    pub instructor: String,
    pub credits: i32,
    pub grade: Option<String>,
    pub completion_percentage: i16,
    pub assessments: Vec<AssessmentDto>,
    #[schema(value_type = Option<String>)]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub end_date: Option<NaiveDate>,
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.to_string(),
            name: course.name,
            code: course.code,
            instructor: course.instructor,
            credits: course.credits,
            grade: course.grade,
            completion_percentage: course.completion_percentage,
            assessments: course
                .assessments
                .into_iter()
                .map(AssessmentDto::from)
                .collect(),
            start_date: course.start_date,
            end_date: course.end_date,
        }
    }
}
