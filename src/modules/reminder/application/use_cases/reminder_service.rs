use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::modules::reminder::application::domain::entities::{
    Frequency, Priority, Reminder, ReminderKind,
};
use crate::modules::reminder::application::ports::outgoing::{
    NewReminder, ReminderPatch, ReminderRepository, ReminderRepositoryError,
};

pub const UPCOMING_LIMIT: u64 = 10;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReminderError {
    #[error("{0}")]
    Validation(String),

    #[error("Reminder not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ReminderRepositoryError> for ReminderError {
    fn from(e: ReminderRepositoryError) -> Self {
        match e {
            ReminderRepositoryError::NotFound => ReminderError::NotFound,
            ReminderRepositoryError::DatabaseError(msg) => ReminderError::RepositoryError(msg),
        }
    }
}

fn validate_time(value: &str) -> Result<(), ReminderError> {
    if value.len() != 5 || NaiveTime::parse_from_str(value, "%H:%M").is_err() {
        return Err(ReminderError::Validation(format!(
            "Time must be in HH:MM format, got '{value}'"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct CreateReminderRequest {
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub kind: ReminderKind,
    pub reminder_date: NaiveDate,
    pub reminder_time: String,
    pub frequency: Frequency,
    pub priority: Priority,
}

impl CreateReminderRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: Uuid,
        title: String,
        description: Option<String>,
        kind: Option<ReminderKind>,
        reminder_date: NaiveDate,
        reminder_time: String,
        frequency: Option<Frequency>,
        priority: Option<Priority>,
    ) -> Result<Self, ReminderError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(ReminderError::Validation("Title is required".into()));
        }

        validate_time(&reminder_time)?;

        Ok(Self {
            user_id,
            title,
            description: description.unwrap_or_default(),
            kind: kind.unwrap_or(ReminderKind::Custom),
            reminder_date,
            reminder_time,
            frequency: frequency.unwrap_or(Frequency::Once),
            priority: priority.unwrap_or(Priority::Medium),
        })
    }
}

#[async_trait]
pub trait IReminderUseCases: Send + Sync {
    async fn create(&self, request: CreateReminderRequest) -> Result<Reminder, ReminderError>;

    async fn list(&self, user_id: Uuid) -> Result<Vec<Reminder>, ReminderError>;

    /// The next ten open reminders dated today (UTC) or later.
    async fn upcoming(&self, user_id: Uuid) -> Result<Vec<Reminder>, ReminderError>;

    async fn update(
        &self,
        user_id: Uuid,
        reminder_id: Uuid,
        patch: ReminderPatch,
    ) -> Result<Reminder, ReminderError>;

    async fn complete(&self, user_id: Uuid, reminder_id: Uuid)
        -> Result<Reminder, ReminderError>;

    async fn delete(&self, user_id: Uuid, reminder_id: Uuid) -> Result<(), ReminderError>;
}

pub struct ReminderService<R>
where
    R: ReminderRepository,
{
    repository: R,
}

impl<R> ReminderService<R>
where
    R: ReminderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IReminderUseCases for ReminderService<R>
where
    R: ReminderRepository + Send + Sync,
{
    async fn create(&self, request: CreateReminderRequest) -> Result<Reminder, ReminderError> {
        let reminder = self
            .repository
            .create(NewReminder {
                user_id: request.user_id,
                title: request.title,
                description: request.description,
                kind: request.kind,
                reminder_date: request.reminder_date,
                reminder_time: request.reminder_time,
                frequency: request.frequency,
                priority: request.priority,
            })
            .await?;

        Ok(reminder)
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<Reminder>, ReminderError> {
        Ok(self.repository.list(user_id).await?)
    }

    async fn upcoming(&self, user_id: Uuid) -> Result<Vec<Reminder>, ReminderError> {
        let today = Utc::now().date_naive();
        Ok(self
            .repository
            .upcoming(user_id, today, UPCOMING_LIMIT)
            .await?)
    }

    async fn update(
        &self,
        user_id: Uuid,
        reminder_id: Uuid,
        patch: ReminderPatch,
    ) -> Result<Reminder, ReminderError> {
        if let Some(time) = &patch.reminder_time {
            validate_time(time)?;
        }
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(ReminderError::Validation("Title is required".into()));
            }
        }

        Ok(self.repository.update(user_id, reminder_id, patch).await?)
    }

    async fn complete(
        &self,
        user_id: Uuid,
        reminder_id: Uuid,
    ) -> Result<Reminder, ReminderError> {
        let patch = ReminderPatch {
            is_completed: Some(true),
            ..Default::default()
        };

        Ok(self.repository.update(user_id, reminder_id, patch).await?)
    }

    async fn delete(&self, user_id: Uuid, reminder_id: Uuid) -> Result<(), ReminderError> {
        Ok(self.repository.delete(user_id, reminder_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FakeReminderRepo {
        reminders: Mutex<Vec<Reminder>>,
        seen_upcoming: Mutex<Option<(NaiveDate, u64)>>,
    }

    impl FakeReminderRepo {
        fn new() -> Self {
            Self {
                reminders: Mutex::new(vec![]),
                seen_upcoming: Mutex::new(None),
            }
        }

        fn with(reminders: Vec<Reminder>) -> Self {
            Self {
                reminders: Mutex::new(reminders),
                seen_upcoming: Mutex::new(None),
            }
        }
    }

    fn reminder(user_id: Uuid, date: NaiveDate, completed: bool) -> Reminder {
        let now = Utc::now();
        Reminder {
            id: Uuid::new_v4(),
            user_id,
            title: "Submit report".to_string(),
            description: String::new(),
            kind: ReminderKind::Assignment,
            reminder_date: date,
            reminder_time: "09:00".to_string(),
            is_completed: completed,
            notification_sent: false,
            frequency: Frequency::Once,
            priority: Priority::Medium,
            created_at: now,
            updated_at: now,
        }
    }

    #[async_trait]
    impl ReminderRepository for FakeReminderRepo {
        async fn create(
            &self,
            new: NewReminder,
        ) -> Result<Reminder, ReminderRepositoryError> {
            let now = Utc::now();
            let created = Reminder {
                id: Uuid::new_v4(),
                user_id: new.user_id,
                title: new.title,
                description: new.description,
                kind: new.kind,
                reminder_date: new.reminder_date,
                reminder_time: new.reminder_time,
                is_completed: false,
                notification_sent: false,
                frequency: new.frequency,
                priority: new.priority,
                created_at: now,
                updated_at: now,
            };
            self.reminders.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn list(&self, user_id: Uuid) -> Result<Vec<Reminder>, ReminderRepositoryError> {
            Ok(self
                .reminders
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn upcoming(
            &self,
            user_id: Uuid,
            from: NaiveDate,
            limit: u64,
        ) -> Result<Vec<Reminder>, ReminderRepositoryError> {
            *self.seen_upcoming.lock().unwrap() = Some((from, limit));
            let mut matching: Vec<Reminder> = self
                .reminders
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.user_id == user_id && r.reminder_date >= from && !r.is_completed)
                .cloned()
                .collect();
            matching.truncate(limit as usize);
            Ok(matching)
        }

        async fn update(
            &self,
            user_id: Uuid,
            reminder_id: Uuid,
            patch: ReminderPatch,
        ) -> Result<Reminder, ReminderRepositoryError> {
            let mut reminders = self.reminders.lock().unwrap();
            let reminder = reminders
                .iter_mut()
                .find(|r| r.id == reminder_id && r.user_id == user_id)
                .ok_or(ReminderRepositoryError::NotFound)?;
            if let Some(title) = patch.title {
                reminder.title = title;
            }
            if let Some(completed) = patch.is_completed {
                reminder.is_completed = completed;
            }
            Ok(reminder.clone())
        }

        async fn delete(
            &self,
            user_id: Uuid,
            reminder_id: Uuid,
        ) -> Result<(), ReminderRepositoryError> {
            let mut reminders = self.reminders.lock().unwrap();
            let before = reminders.len();
            reminders.retain(|r| !(r.id == reminder_id && r.user_id == user_id));
            if reminders.len() == before {
                return Err(ReminderRepositoryError::NotFound);
            }
            Ok(())
        }
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = CreateReminderRequest::new(
            Uuid::new_v4(),
            "  ".to_string(),
            None,
            None,
            Utc::now().date_naive(),
            "09:00".to_string(),
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ReminderError::Validation(_)));
    }

    #[test]
    fn malformed_time_is_rejected() {
        let err = CreateReminderRequest::new(
            Uuid::new_v4(),
            "Exam".to_string(),
            None,
            None,
            Utc::now().date_naive(),
            "9am".to_string(),
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ReminderError::Validation(_)));
    }

    #[tokio::test]
    async fn create_applies_defaults() {
        let service = ReminderService::new(FakeReminderRepo::new());
        let request = CreateReminderRequest::new(
            Uuid::new_v4(),
            "Exam".to_string(),
            None,
            None,
            Utc::now().date_naive(),
            "09:00".to_string(),
            None,
            None,
        )
        .unwrap();

        let reminder = service.create(request).await.unwrap();

        assert_eq!(reminder.kind, ReminderKind::Custom);
        assert_eq!(reminder.frequency, Frequency::Once);
        assert_eq!(reminder.priority, Priority::Medium);
        assert!(!reminder.is_completed);
    }

    #[tokio::test]
    async fn upcoming_excludes_completed_and_past() {
        let user_id = Uuid::new_v4();
        let today = Utc::now().date_naive();
        let yesterday = today.pred_opt().unwrap();
        let tomorrow = today.succ_opt().unwrap();
        let service = ReminderService::new(FakeReminderRepo::with(vec![
            reminder(user_id, yesterday, false),
            reminder(user_id, today, false),
            reminder(user_id, tomorrow, true),
            reminder(user_id, tomorrow, false),
        ]));

        let upcoming = service.upcoming(user_id).await.unwrap();

        assert_eq!(upcoming.len(), 2);
        assert!(upcoming.iter().all(|r| !r.is_completed));
        assert!(upcoming.iter().all(|r| r.reminder_date >= today));
    }

    #[tokio::test]
    async fn complete_sets_the_flag() {
        let user_id = Uuid::new_v4();
        let existing = reminder(user_id, Utc::now().date_naive(), false);
        let reminder_id = existing.id;
        let service = ReminderService::new(FakeReminderRepo::with(vec![existing]));

        let updated = service.complete(user_id, reminder_id).await.unwrap();
        assert!(updated.is_completed);
    }

    #[tokio::test]
    async fn complete_of_another_users_reminder_is_not_found() {
        let existing = reminder(Uuid::new_v4(), Utc::now().date_naive(), false);
        let reminder_id = existing.id;
        let service = ReminderService::new(FakeReminderRepo::with(vec![existing]));

        let err = service
            .complete(Uuid::new_v4(), reminder_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ReminderError::NotFound));
    }
}
