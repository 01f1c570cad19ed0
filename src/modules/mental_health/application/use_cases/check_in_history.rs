use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::mental_health::application::domain::entities::CheckIn;
use crate::modules::mental_health::application::ports::outgoing::CheckInRepository;

pub const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckInHistoryError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct CheckInPage {
    pub check_ins: Vec<CheckIn>,
    pub total: u64,
    pub pages: u64,
}

#[async_trait]
pub trait ICheckInHistoryUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
        skip: Option<u64>,
    ) -> Result<CheckInPage, CheckInHistoryError>;
}

pub struct CheckInHistoryUseCase<R>
where
    R: CheckInRepository,
{
    repository: R,
}

impl<R> CheckInHistoryUseCase<R>
where
    R: CheckInRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICheckInHistoryUseCase for CheckInHistoryUseCase<R>
where
    R: CheckInRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
        skip: Option<u64>,
    ) -> Result<CheckInPage, CheckInHistoryError> {
        let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_PAGE_SIZE);
        let skip = skip.unwrap_or(0);

        let (check_ins, total) = self
            .repository
            .history(user_id, limit, skip)
            .await
            .map_err(|e| CheckInHistoryError::RepositoryError(e.to_string()))?;

        Ok(CheckInPage {
            check_ins,
            total,
            pages: total.div_ceil(limit),
        })
    }
}
