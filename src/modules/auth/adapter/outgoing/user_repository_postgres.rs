use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{
    NewUser, ProfilePatch, UserRepository, UserRepositoryError,
};

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name.trim().to_string()),
            email: Set(user.email.trim().to_lowercase()),
            password_hash: Set(user.password_hash),
            student_id: Set(user.student_id),
            university: Set(user.university),
            department: Set(user.department),
            avatar: Set(None),
            stress_level: Set(0),
            mental_health_score: Set(100),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_unique_error)?;

        Ok(model_to_user(result))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let found = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(model_to_user))
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        let found = Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(model_to_user))
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        patch: ProfilePatch,
    ) -> Result<User, UserRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(name) = patch.name {
            model.name = Set(name.trim().to_string());
        }
        if let Some(university) = patch.university {
            model.university = Set(university);
        }
        if let Some(department) = patch.department {
            model.department = Set(department);
        }
        if let Some(avatar) = patch.avatar {
            model.avatar = Set(Some(avatar));
        }

        let has_changes = model.name.is_set()
            || model.university.is_set()
            || model.department.is_set()
            || model.avatar.is_set();

        if !has_changes {
            let result = Entity::find_by_id(user_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(UserRepositoryError::NotFound)?;

            return Ok(model_to_user(result));
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(user_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(UserRepositoryError::NotFound)?;

        Ok(model_to_user(result))
    }
}

fn model_to_user(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        student_id: model.student_id,
        university: model.university,
        department: model.department,
        avatar: model.avatar,
        stress_level: model.stress_level,
        mental_health_score: model.mental_health_score,
        is_active: model.is_active,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_unique_error(e: DbErr) -> UserRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        if msg.contains("student_id") {
            return UserRepositoryError::StudentIdTaken;
        }
        return UserRepositoryError::EmailTaken;
    }

    UserRepositoryError::DatabaseError(e.to_string())
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}
