use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::reminder::application::domain::entities::{
    Frequency, Priority, Reminder, ReminderKind,
};

#[derive(Debug, Clone)]
pub struct NewReminder {
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub kind: ReminderKind,
    pub reminder_date: NaiveDate,
    pub reminder_time: String,
    pub frequency: Frequency,
    pub priority: Priority,
}

/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Default)]
pub struct ReminderPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kind: Option<ReminderKind>,
    pub reminder_date: Option<NaiveDate>,
    pub reminder_time: Option<String>,
    pub frequency: Option<Frequency>,
    pub priority: Option<Priority>,
    pub is_completed: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReminderRepositoryError {
    #[error("Reminder not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReminderRepository: Send + Sync {
    async fn create(&self, reminder: NewReminder) -> Result<Reminder, ReminderRepositoryError>;

    /// All of the user's reminders, earliest date and time first.
    async fn list(&self, user_id: Uuid) -> Result<Vec<Reminder>, ReminderRepositoryError>;

    /// Open reminders dated `from` or later, earliest first, at most `limit`.
    async fn upcoming(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        limit: u64,
    ) -> Result<Vec<Reminder>, ReminderRepositoryError>;

    async fn update(
        &self,
        user_id: Uuid,
        reminder_id: Uuid,
        patch: ReminderPatch,
    ) -> Result<Reminder, ReminderRepositoryError>;

    async fn delete(
        &self,
        user_id: Uuid,
        reminder_id: Uuid,
    ) -> Result<(), ReminderRepositoryError>;
}
