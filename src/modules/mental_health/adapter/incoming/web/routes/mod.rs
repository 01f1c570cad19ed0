mod check_in_history;
mod check_in_stats;
mod create_check_in;

pub use check_in_history::*;
pub use check_in_stats::*;
pub use create_check_in::*;

use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::mental_health::application::domain::entities::CheckIn;

/// Check-in shape shared by the create and history responses.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckInDto {
    pub id: String,
    pub mood: String,
    pub stress_level: i16,
    pub sleep_hours: f32,
    pub activities: Vec<String>,
    pub notes: String,
    pub sentiment_score: f32,
    pub ai_response: String,
    pub created_at: String,
}

impl From<CheckIn> for CheckInDto {
    fn from(check_in: CheckIn) -> Self {
        Self {
            id: check_in.id.to_string(),
            mood: check_in.mood.as_str().to_string(),
            stress_level: check_in.stress_level,
            sleep_hours: check_in.sleep_hours,
            activities: check_in.activities,
            notes: check_in.notes,
            sentiment_score: check_in.sentiment_score,
            ai_response: check_in.ai_response,
            created_at: check_in.created_at.to_rfc3339(),
        }
    }
}
