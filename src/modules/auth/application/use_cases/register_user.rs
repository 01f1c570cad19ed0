use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, TokenProvider, UserRepository, UserRepositoryError,
};

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("{0}")]
    Validation(String),

    #[error("Email already registered")]
    EmailTaken,

    #[error("Student id already registered")]
    StudentIdTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Validated registration input. Email is lowercased and trimmed on
/// construction so the unique index sees a canonical form.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub student_id: Option<String>,
    pub university: String,
    pub department: String,
}

impl RegisterRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        email: String,
        password: String,
        student_id: Option<String>,
        university: Option<String>,
        department: Option<String>,
    ) -> Result<Self, RegisterUserError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(RegisterUserError::Validation("Name is required".into()));
        }

        let email = email.trim().to_lowercase();
        if !email_address::EmailAddress::is_valid(&email) {
            return Err(RegisterUserError::Validation("Invalid email".into()));
        }

        if password.trim().len() < MIN_PASSWORD_LEN {
            return Err(RegisterUserError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let student_id = student_id
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            name,
            email,
            password,
            student_id,
            university: university.unwrap_or_default(),
            department: department.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct RegisterUserResponse {
    pub token: String,
    pub user: User,
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest)
        -> Result<RegisterUserResponse, RegisterUserError>;
}

pub struct RegisterUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> RegisterUserUseCase<R>
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
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RegisterRequest,
    ) -> Result<RegisterUserResponse, RegisterUserError> {
        if let Some(_existing) = self
            .repository
            .find_by_email(&request.email)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?
        {
            return Err(RegisterUserError::EmailTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&request.password)
            .map_err(|e| RegisterUserError::HashingFailed(format!("{e:?}")))?;

        let new_user = NewUser {
            name: request.name,
            email: request.email,
            password_hash,
            student_id: request.student_id,
            university: request.university,
            department: request.department,
        };

        // The unique indexes are the authority; the pre-check above only
        // gives a friendlier path for the common case.
        let user = match self.repository.create(new_user).await {
            Ok(user) => user,
            Err(UserRepositoryError::EmailTaken) => return Err(RegisterUserError::EmailTaken),
            Err(UserRepositoryError::StudentIdTaken) => {
                return Err(RegisterUserError::StudentIdTaken)
            }
            Err(e) => return Err(RegisterUserError::RepositoryError(e.to_string())),
        };

        let token = self
            .token_provider
            .issue_token(user.id, &user.email)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        Ok(RegisterUserResponse { token, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::{HashError, TokenClaims, TokenError};
    use chrono::Utc;
    use uuid::Uuid;

    struct StubHasher;

    impl PasswordHasher for StubHasher {
        fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{password}"))
        }

        fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
            Ok(hashed == format!("hashed:{password}"))
        }
    }

    struct StubTokens;

    impl TokenProvider for StubTokens {
        fn issue_token(&self, user_id: Uuid, email: &str) -> Result<String, TokenError> {
            Ok(format!("token:{user_id}:{email}"))
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!("not used in registration tests")
        }
    }

    struct FakeUserRepo {
        existing_email: Option<String>,
    }

    fn user_from_new(new_user: NewUser) -> User {
        User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            student_id: new_user.student_id,
            university: new_user.university,
            department: new_user.department,
            avatar: None,
            stress_level: 0,
            mental_health_score: 100,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl UserRepository for FakeUserRepo {
        async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
            Ok(user_from_new(user))
        }

        async fn find_by_email(
            &self,
            email: &str,
        ) -> Result<Option<User>, UserRepositoryError> {
            if self.existing_email.as_deref() == Some(email) {
                let mut user = user_from_new(NewUser {
                    name: "Existing".into(),
                    email: email.into(),
                    password_hash: "x".into(),
                    student_id: None,
                    university: String::new(),
                    department: String::new(),
                });
                user.id = Uuid::new_v4();
                return Ok(Some(user));
            }
            Ok(None)
        }

        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
            Ok(None)
        }

        async fn update_profile(
            &self,
            _user_id: Uuid,
            _patch: ProfilePatch,
        ) -> Result<User, UserRepositoryError> {
            Err(UserRepositoryError::NotFound)
        }
    }

    use crate::modules::auth::application::ports::outgoing::ProfilePatch;

    fn request() -> RegisterRequest {
        RegisterRequest::new(
            "Jane Doe".into(),
            "jane@uni.edu".into(),
            "secret123".into(),
            Some("S-100".into()),
            Some("State University".into()),
            Some("CS".into()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn registers_and_issues_token() {
        let use_case = RegisterUserUseCase::new(
            FakeUserRepo {
                existing_email: None,
            },
            Arc::new(StubHasher),
            Arc::new(StubTokens),
        );

        let response = use_case.execute(request()).await.unwrap();
        assert!(response.token.starts_with("token:"));
        assert_eq!(response.user.email, "jane@uni.edu");
        assert_eq!(response.user.mental_health_score, 100);
        assert_eq!(response.user.password_hash, "hashed:secret123");
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict_and_issues_no_token() {
        let use_case = RegisterUserUseCase::new(
            FakeUserRepo {
                existing_email: Some("jane@uni.edu".into()),
            },
            Arc::new(StubHasher),
            Arc::new(StubTokens),
        );

        let err = use_case.execute(request()).await.unwrap_err();
        assert!(matches!(err, RegisterUserError::EmailTaken));
    }

    #[test]
    fn email_is_canonicalized() {
        let req = RegisterRequest::new(
            "Jane".into(),
            "  Jane@Uni.EDU ".into(),
            "secret123".into(),
            None,
            None,
            None,
        )
        .unwrap();
        assert_eq!(req.email, "jane@uni.edu");
    }

    #[test]
    fn short_password_is_rejected() {
        let err = RegisterRequest::new(
            "Jane".into(),
            "jane@uni.edu".into(),
            "short".into(),
            None,
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, RegisterUserError::Validation(_)));
    }

    #[test]
    fn invalid_email_is_rejected() {
        for email in ["notanemail", "missing@", "@nodomain.com", ""] {
            let result = RegisterRequest::new(
                "Jane".into(),
                email.into(),
                "secret123".into(),
                None,
                None,
                None,
            );
            assert!(result.is_err(), "should reject email: {email}");
        }
    }
}
