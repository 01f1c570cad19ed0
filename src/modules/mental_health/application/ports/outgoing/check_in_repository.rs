use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::mental_health::application::domain::entities::{CheckIn, Mood};

#[derive(Debug, Clone)]
pub struct NewCheckIn {
    pub user_id: Uuid,
    pub mood: Mood,
    /// 1-10
    pub stress_level: i16,
    pub sleep_hours: f32,
    pub activities: Vec<String>,
    pub notes: String,
    pub sentiment_score: f32,
    pub ai_response: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckInRepositoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// Persists the check-in and writes the derived stress level and
    /// wellness score onto the user's row in the same transaction.
    async fn create_and_update_user(
        &self,
        check_in: NewCheckIn,
        wellness_score: i16,
    ) -> Result<CheckIn, CheckInRepositoryError>;

    /// Newest-first page of the user's check-ins, plus the total count.
    async fn history(
        &self,
        user_id: Uuid,
        limit: u64,
        skip: u64,
    ) -> Result<(Vec<CheckIn>, u64), CheckInRepositoryError>;

    /// Every check-in of the user, newest first.
    async fn all_for_user(&self, user_id: Uuid) -> Result<Vec<CheckIn>, CheckInRepositoryError>;
}
