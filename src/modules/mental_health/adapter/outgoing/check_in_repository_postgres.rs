use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::mental_health::adapter::outgoing::sea_orm_entity::check_ins::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::mental_health::application::domain::entities::{CheckIn, Mood};
use crate::modules::mental_health::application::ports::outgoing::{
    CheckInRepository, CheckInRepositoryError, NewCheckIn,
};

#[derive(Clone)]
pub struct CheckInRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CheckInRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CheckInRepository for CheckInRepositoryPostgres {
    async fn create_and_update_user(
        &self,
        check_in: NewCheckIn,
        wellness_score: i16,
    ) -> Result<CheckIn, CheckInRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(check_in.user_id),
            mood: Set(check_in.mood.as_str().to_string()),
            stress_level: Set(check_in.stress_level),
            sleep_hours: Set(check_in.sleep_hours),
            activities: Set(serde_json::json!(check_in.activities)),
            notes: Set(check_in.notes),
            sentiment_score: Set(check_in.sentiment_score),
            ai_response: Set(check_in.ai_response),
            response_given: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let inserted = model.insert(&txn).await.map_err(map_db_err)?;

        let user_update = users::ActiveModel {
            stress_level: Set(inserted.stress_level),
            mental_health_score: Set(wellness_score),
            ..Default::default()
        };

        let updated = users::Entity::update_many()
            .set(user_update)
            .filter(users::Column::Id.eq(check_in.user_id))
            .exec_with_returning(&txn)
            .await
            .map_err(map_db_err)?;

        if updated.is_empty() {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(CheckInRepositoryError::UserNotFound);
        }

        txn.commit().await.map_err(map_db_err)?;

        model_to_check_in(inserted)
    }

    async fn history(
        &self,
        user_id: Uuid,
        limit: u64,
        skip: u64,
    ) -> Result<(Vec<CheckIn>, u64), CheckInRepositoryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .offset(skip)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let total = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let check_ins = models
            .into_iter()
            .map(model_to_check_in)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((check_ins, total))
    }

    async fn all_for_user(&self, user_id: Uuid) -> Result<Vec<CheckIn>, CheckInRepositoryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_check_in).collect()
    }
}

fn model_to_check_in(model: check_ins::Model) -> Result<CheckIn, CheckInRepositoryError> {
    let mood = Mood::parse(&model.mood).ok_or_else(|| {
        CheckInRepositoryError::DatabaseError(format!("Unknown mood value: {}", model.mood))
    })?;

    let activities: Vec<String> = serde_json::from_value(model.activities)
        .map_err(|e| CheckInRepositoryError::DatabaseError(e.to_string()))?;

    Ok(CheckIn {
        id: model.id,
        user_id: model.user_id,
        mood,
        stress_level: model.stress_level,
        sleep_hours: model.sleep_hours,
        activities,
        notes: model.notes,
        sentiment_score: model.sentiment_score,
        ai_response: model.ai_response,
        response_given: model.response_given,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> CheckInRepositoryError {
    CheckInRepositoryError::DatabaseError(e.to_string())
}
