pub mod password_hasher;
pub mod token_provider;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_repository::{NewUser, ProfilePatch, UserRepository, UserRepositoryError};
