use async_trait::async_trait;
use chrono::NaiveTime;
use uuid::Uuid;

use crate::modules::timetable::application::domain::entities::{
    ClassType, DayOfWeek, TimetableEntry,
};
use crate::modules::timetable::application::ports::outgoing::{
    NewTimetableEntry, TimetableEntryPatch, TimetableRepository, TimetableRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TimetableError {
    #[error("{0}")]
    Validation(String),

    #[error("Course not found")]
    CourseNotFound,

    #[error("Timetable entry not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TimetableRepositoryError> for TimetableError {
    fn from(e: TimetableRepositoryError) -> Self {
        match e {
            TimetableRepositoryError::NotFound => TimetableError::NotFound,
            TimetableRepositoryError::DatabaseError(msg) => TimetableError::RepositoryError(msg),
        }
    }
}

/// Rejects anything that is not a zero-padded 24h HH:MM string.
fn validate_time(value: &str) -> Result<(), TimetableError> {
    if value.len() != 5 || NaiveTime::parse_from_str(value, "%H:%M").is_err() {
        return Err(TimetableError::Validation(format!(
            "Time must be in HH:MM format, got '{value}'"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct CreateTimetableEntryRequest {
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub instructor: String,
    pub class_type: ClassType,
}

impl CreateTimetableEntryRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: Uuid,
        course_id: Uuid,
        day_of_week: DayOfWeek,
        start_time: String,
        end_time: String,
        location: Option<String>,
        instructor: Option<String>,
        class_type: Option<ClassType>,
    ) -> Result<Self, TimetableError> {
        validate_time(&start_time)?;
        validate_time(&end_time)?;

        if end_time <= start_time {
            return Err(TimetableError::Validation(
                "End time must be after start time".into(),
            ));
        }

        Ok(Self {
            user_id,
            course_id,
            day_of_week,
            start_time,
            end_time,
            location: location.unwrap_or_default(),
            instructor: instructor.unwrap_or_default(),
            class_type: class_type.unwrap_or(ClassType::Lecture),
        })
    }
}

#[async_trait]
pub trait ITimetableUseCases: Send + Sync {
    async fn create(
        &self,
        request: CreateTimetableEntryRequest,
    ) -> Result<TimetableEntry, TimetableError>;

    /// The full weekly view, Monday first, then by start time.
    async fn list(&self, user_id: Uuid) -> Result<Vec<TimetableEntry>, TimetableError>;

    async fn list_by_day(
        &self,
        user_id: Uuid,
        day: DayOfWeek,
    ) -> Result<Vec<TimetableEntry>, TimetableError>;

    async fn update(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
        patch: TimetableEntryPatch,
    ) -> Result<TimetableEntry, TimetableError>;

    async fn delete(&self, user_id: Uuid, entry_id: Uuid) -> Result<(), TimetableError>;
}

pub struct TimetableService<R>
where
    R: TimetableRepository,
{
    repository: R,
}

impl<R> TimetableService<R>
where
    R: TimetableRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ITimetableUseCases for TimetableService<R>
where
    R: TimetableRepository + Send + Sync,
{
    async fn create(
        &self,
        request: CreateTimetableEntryRequest,
    ) -> Result<TimetableEntry, TimetableError> {
        if !self
            .repository
            .course_exists(request.user_id, request.course_id)
            .await?
        {
            return Err(TimetableError::CourseNotFound);
        }

        let entry = self
            .repository
            .create(NewTimetableEntry {
                user_id: request.user_id,
                course_id: request.course_id,
                day_of_week: request.day_of_week,
                start_time: request.start_time,
                end_time: request.end_time,
                location: request.location,
                instructor: request.instructor,
                class_type: request.class_type,
            })
            .await?;

        Ok(entry)
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<TimetableEntry>, TimetableError> {
        let mut entries = self.repository.list(user_id).await?;
        entries.sort_by(|a, b| {
            a.day_of_week
                .order()
                .cmp(&b.day_of_week.order())
                .then_with(|| a.start_time.cmp(&b.start_time))
        });
        Ok(entries)
    }

    async fn list_by_day(
        &self,
        user_id: Uuid,
        day: DayOfWeek,
    ) -> Result<Vec<TimetableEntry>, TimetableError> {
        let mut entries = self.repository.list_by_day(user_id, day).await?;
        entries.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        Ok(entries)
    }

    async fn update(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
        patch: TimetableEntryPatch,
    ) -> Result<TimetableEntry, TimetableError> {
        if let Some(start) = &patch.start_time {
            validate_time(start)?;
        }
        if let Some(end) = &patch.end_time {
            validate_time(end)?;
        }

        // A patched time is checked against the stored counterpart so an
        // update cannot invert the interval create enforces.
        if patch.start_time.is_some() || patch.end_time.is_some() {
            let current = self.repository.find(user_id, entry_id).await?;
            let start = patch.start_time.as_deref().unwrap_or(&current.start_time);
            let end = patch.end_time.as_deref().unwrap_or(&current.end_time);

            if end <= start {
                return Err(TimetableError::Validation(
                    "End time must be after start time".into(),
                ));
            }
        }

        Ok(self.repository.update(user_id, entry_id, patch).await?)
    }

    async fn delete(&self, user_id: Uuid, entry_id: Uuid) -> Result<(), TimetableError> {
        Ok(self.repository.delete(user_id, entry_id).await?)
    }
}
