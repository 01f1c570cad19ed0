use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::reminder::adapter::outgoing::sea_orm_entity::reminders::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::reminder::application::domain::entities::{
    Frequency, Priority, Reminder, ReminderKind,
};
use crate::modules::reminder::application::ports::outgoing::{
    NewReminder, ReminderPatch, ReminderRepository, ReminderRepositoryError,
};

#[derive(Clone)]
pub struct ReminderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReminderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReminderRepository for ReminderRepositoryPostgres {
    async fn create(&self, reminder: NewReminder) -> Result<Reminder, ReminderRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(reminder.user_id),
            title: Set(reminder.title),
            description: Set(reminder.description),
            kind: Set(reminder.kind.as_str().to_string()),
            reminder_date: Set(reminder.reminder_date),
            reminder_time: Set(reminder.reminder_time),
            is_completed: Set(false),
            notification_sent: Set(false),
            frequency: Set(reminder.frequency.as_str().to_string()),
            priority: Set(reminder.priority.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_reminder(result)
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<Reminder>, ReminderRepositoryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::ReminderDate)
            .order_by_asc(Column::ReminderTime)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_reminder).collect()
    }

    async fn upcoming(
        &self,
        user_id: Uuid,
        from: NaiveDate,
        limit: u64,
    ) -> Result<Vec<Reminder>, ReminderRepositoryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ReminderDate.gte(from))
            .filter(Column::IsCompleted.eq(false))
            .order_by_asc(Column::ReminderDate)
            .order_by_asc(Column::ReminderTime)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_reminder).collect()
    }

    async fn update(
        &self,
        user_id: Uuid,
        reminder_id: Uuid,
        patch: ReminderPatch,
    ) -> Result<Reminder, ReminderRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = patch.title {
            model.title = Set(title);
        }
        if let Some(description) = patch.description {
            model.description = Set(description);
        }
        if let Some(kind) = patch.kind {
            model.kind = Set(kind.as_str().to_string());
        }
        if let Some(date) = patch.reminder_date {
            model.reminder_date = Set(date);
        }
        if let Some(time) = patch.reminder_time {
            model.reminder_time = Set(time);
        }
        if let Some(frequency) = patch.frequency {
            model.frequency = Set(frequency.as_str().to_string());
        }
        if let Some(priority) = patch.priority {
            model.priority = Set(priority.as_str().to_string());
        }
        if let Some(completed) = patch.is_completed {
            model.is_completed = Set(completed);
        }

        let has_changes = model.title.is_set()
            || model.description.is_set()
            || model.kind.is_set()
            || model.reminder_date.is_set()
            || model.reminder_time.is_set()
            || model.frequency.is_set()
            || model.priority.is_set()
            || model.is_completed.is_set();

        if !has_changes {
            let found = Entity::find()
                .filter(Column::Id.eq(reminder_id))
                .filter(Column::UserId.eq(user_id))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ReminderRepositoryError::NotFound)?;

            return model_to_reminder(found);
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(reminder_id))
            .filter(Column::UserId.eq(user_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ReminderRepositoryError::NotFound)?;

        model_to_reminder(result)
    }

    async fn delete(
        &self,
        user_id: Uuid,
        reminder_id: Uuid,
    ) -> Result<(), ReminderRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(reminder_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ReminderRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_reminder(model: reminders::Model) -> Result<Reminder, ReminderRepositoryError> {
    let kind = ReminderKind::parse(&model.kind).ok_or_else(|| {
        ReminderRepositoryError::DatabaseError(format!("Unknown reminder type: {}", model.kind))
    })?;

    let frequency = Frequency::parse(&model.frequency).ok_or_else(|| {
        ReminderRepositoryError::DatabaseError(format!("Unknown frequency: {}", model.frequency))
    })?;

    let priority = Priority::parse(&model.priority).ok_or_else(|| {
        ReminderRepositoryError::DatabaseError(format!("Unknown priority: {}", model.priority))
    })?;

    Ok(Reminder {
        id: model.id,
        user_id: model.user_id,
        title: model.title,
        description: model.description,
        kind,
        reminder_date: model.reminder_date,
        reminder_time: model.reminder_time,
        is_completed: model.is_completed,
        notification_sent: model.notification_sent,
        frequency,
        priority,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> ReminderRepositoryError {
    ReminderRepositoryError::DatabaseError(e.to_string())
}
