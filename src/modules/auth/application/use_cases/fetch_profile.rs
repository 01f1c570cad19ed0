use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::UserRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<User, FetchProfileError>;
}

pub struct FetchProfileUseCase<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> FetchProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IFetchProfileUseCase for FetchProfileUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<User, FetchProfileError> {
        self.repository
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?
            .ok_or(FetchProfileError::NotFound)
    }
}
