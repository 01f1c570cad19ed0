use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::timetable::application::domain::entities::{
    ClassType, DayOfWeek, TimetableEntry,
};

#[derive(Debug, Clone)]
pub struct NewTimetableEntry {
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub instructor: String,
    pub class_type: ClassType,
}

/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Default)]
pub struct TimetableEntryPatch {
    pub day_of_week: Option<DayOfWeek>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub instructor: Option<String>,
    pub class_type: Option<ClassType>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TimetableRepositoryError {
    #[error("Timetable entry not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TimetableRepository: Send + Sync {
    /// Whether the course exists and belongs to the user.
    async fn course_exists(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<bool, TimetableRepositoryError>;

    async fn create(
        &self,
        entry: NewTimetableEntry,
    ) -> Result<TimetableEntry, TimetableRepositoryError>;

    async fn find(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> Result<TimetableEntry, TimetableRepositoryError>;

    async fn list(&self, user_id: Uuid) -> Result<Vec<TimetableEntry>, TimetableRepositoryError>;

    async fn list_by_day(
        &self,
        user_id: Uuid,
        day: DayOfWeek,
    ) -> Result<Vec<TimetableEntry>, TimetableRepositoryError>;

    async fn update(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
        patch: TimetableEntryPatch,
    ) -> Result<TimetableEntry, TimetableRepositoryError>;

    async fn delete(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> Result<(), TimetableRepositoryError>;
}
