use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::course::adapter::outgoing::sea_orm_entity::courses;
use crate::modules::timetable::adapter::outgoing::sea_orm_entity::timetable::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::timetable::application::domain::entities::{
    ClassType, DayOfWeek, TimetableEntry,
};
use crate::modules::timetable::application::ports::outgoing::{
    NewTimetableEntry, TimetableEntryPatch, TimetableRepository, TimetableRepositoryError,
};

#[derive(Clone)]
pub struct TimetableRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TimetableRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TimetableRepository for TimetableRepositoryPostgres {
    async fn course_exists(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<bool, TimetableRepositoryError> {
        let count = courses::Entity::find()
            .filter(courses::Column::Id.eq(course_id))
            .filter(courses::Column::UserId.eq(user_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn create(
        &self,
        entry: NewTimetableEntry,
    ) -> Result<TimetableEntry, TimetableRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(entry.user_id),
            course_id: Set(entry.course_id),
            day_of_week: Set(entry.day_of_week.as_str().to_string()),
            start_time: Set(entry.start_time),
            end_time: Set(entry.end_time),
            location: Set(entry.location),
            instructor: Set(entry.instructor),
            class_type: Set(entry.class_type.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_entry(result)
    }

    async fn find(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> Result<TimetableEntry, TimetableRepositoryError> {
        let model = Entity::find()
            .filter(Column::Id.eq(entry_id))
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TimetableRepositoryError::NotFound)?;

        model_to_entry(model)
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<TimetableEntry>, TimetableRepositoryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_entry).collect()
    }

    async fn list_by_day(
        &self,
        user_id: Uuid,
        day: DayOfWeek,
    ) -> Result<Vec<TimetableEntry>, TimetableRepositoryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::DayOfWeek.eq(day.as_str()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_entry).collect()
    }

    async fn update(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
        patch: TimetableEntryPatch,
    ) -> Result<TimetableEntry, TimetableRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(day) = patch.day_of_week {
            model.day_of_week = Set(day.as_str().to_string());
        }
        if let Some(start) = patch.start_time {
            model.start_time = Set(start);
        }
        if let Some(end) = patch.end_time {
            model.end_time = Set(end);
        }
        if let Some(location) = patch.location {
            model.location = Set(location);
        }
        if let Some(instructor) = patch.instructor {
            model.instructor = Set(instructor);
        }
        if let Some(class_type) = patch.class_type {
            model.class_type = Set(class_type.as_str().to_string());
        }

        let has_changes = model.day_of_week.is_set()
            || model.start_time.is_set()
            || model.end_time.is_set()
            || model.location.is_set()
            || model.instructor.is_set()
            || model.class_type.is_set();

        if !has_changes {
            return self.find(user_id, entry_id).await;
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(entry_id))
            .filter(Column::UserId.eq(user_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(TimetableRepositoryError::NotFound)?;

        model_to_entry(result)
    }

    async fn delete(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> Result<(), TimetableRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(entry_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TimetableRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_entry(
    model: timetable::Model,
) -> Result<TimetableEntry, TimetableRepositoryError> {
    let day_of_week = DayOfWeek::parse(&model.day_of_week).ok_or_else(|| {
        TimetableRepositoryError::DatabaseError(format!(
            "Unknown day of week: {}",
            model.day_of_week
        ))
    })?;

    let class_type = ClassType::parse(&model.class_type).ok_or_else(|| {
        TimetableRepositoryError::DatabaseError(format!(
            "Unknown class type: {}",
            model.class_type
        ))
    })?;

    Ok(TimetableEntry {
        id: model.id,
        user_id: model.user_id,
        course_id: model.course_id,
        day_of_week,
        start_time: model.start_time,
        end_time: model.end_time,
        location: model.location,
        instructor: model.instructor,
        class_type,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> TimetableRepositoryError {
    TimetableRepositoryError::DatabaseError(e.to_string())
}
