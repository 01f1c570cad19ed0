use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{
    ProfilePatch, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, patch: ProfilePatch)
        -> Result<User, UpdateProfileError>;
}

pub struct UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateProfileUseCase for UpdateProfileUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        patch: ProfilePatch,
    ) -> Result<User, UpdateProfileError> {
        match self.repository.update_profile(user_id, patch).await {
            Ok(user) => Ok(user),
            Err(UserRepositoryError::NotFound) => Err(UpdateProfileError::NotFound),
            Err(e) => Err(UpdateProfileError::RepositoryError(e.to_string())),
        }
    }
}
