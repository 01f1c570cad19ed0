use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserRepository,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    Validation(String),

    /// Covers both unknown email and wrong password so the response
    /// never reveals whether an account exists.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(LoginError::Validation("Email is required".into()));
        }
        if password.trim().is_empty() {
            return Err(LoginError::Validation("Password is required".into()));
        }
        Ok(Self { email, password })
    }
}

#[derive(Debug, Clone)]
pub struct LoginUserResponse {
    pub token: String,
    pub user: User,
}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

pub struct LoginUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> LoginUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> ILoginUserUseCase for LoginUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .repository
            .find_by_email(&request.email)
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let valid = self
            .password_hasher
            .verify_password(&request.password, &user.password_hash)
            .map_err(|e| LoginError::PasswordVerificationFailed(format!("{e:?}")))?;

        if !valid {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .issue_token(user.id, &user.email)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse { token, user })
    }
}
