use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::attendance::adapter::outgoing::sea_orm_entity::attendance::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::attendance::application::domain::entities::{
    AttendanceRecord, AttendanceStatus,
};
use crate::modules::attendance::application::ports::outgoing::{
    AttendanceRepository, AttendanceRepositoryError, NewAttendance,
};
use crate::modules::course::adapter::outgoing::sea_orm_entity::courses;

#[derive(Clone)]
pub struct AttendanceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AttendanceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AttendanceRepository for AttendanceRepositoryPostgres {
    async fn course_exists(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<bool, AttendanceRepositoryError> {
        let count = courses::Entity::find()
            .filter(courses::Column::Id.eq(course_id))
            .filter(courses::Column::UserId.eq(user_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn mark(
        &self,
        new: NewAttendance,
    ) -> Result<AttendanceRecord, AttendanceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(new.user_id),
            course_id: Set(new.course_id),
            date: Set(new.date),
            status: Set(new.status.as_str().to_string()),
            remarks: Set(new.remarks),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_record(result)
    }

    async fn list_for_course(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Vec<AttendanceRecord>, AttendanceRepositoryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .order_by_desc(Column::Date)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_record).collect()
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AttendanceRecord>, AttendanceRepositoryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::Date)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_record).collect()
    }
}

fn model_to_record(
    model: attendance::Model,
) -> Result<AttendanceRecord, AttendanceRepositoryError> {
    let status = AttendanceStatus::parse(&model.status).ok_or_else(|| {
        AttendanceRepositoryError::DatabaseError(format!(
            "Unknown attendance status: {}",
            model.status
        ))
    })?;

    Ok(AttendanceRecord {
        id: model.id,
        user_id: model.user_id,
        course_id: model.course_id,
        date: model.date,
        status,
        remarks: model.remarks,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> AttendanceRepositoryError {
    AttendanceRepositoryError::DatabaseError(e.to_string())
}
