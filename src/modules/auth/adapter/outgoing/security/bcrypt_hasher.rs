use bcrypt::{hash, verify, DEFAULT_COST};

use crate::modules::auth::application::ports::outgoing::{HashError, PasswordHasher};

pub struct BcryptHasher;

impl PasswordHasher for BcryptHasher {
    fn hash_password(&self, password: &str) -> Result<String, HashError> {
        hash(password, DEFAULT_COST).map_err(|_| HashError::HashFailed)
    }

    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        verify(password, hashed).map_err(|_| HashError::VerifyFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_password() {
        let hasher = BcryptHasher;
        let password = "SecurePassword123";

        let hashed = hasher.hash_password(password).unwrap();

        assert!(hasher.verify_password(password, &hashed).unwrap());
        assert!(!hasher.verify_password("WrongPassword", &hashed).unwrap());
        assert!(matches!(
            hasher.verify_password(password, "invalid-hash"),
            Err(HashError::VerifyFailed)
        ));
    }

    #[test]
    fn same_password_hashes_differently_each_call() {
        let hasher = BcryptHasher;
        let first = hasher.hash_password("secret123").unwrap();
        let second = hasher.hash_password("secret123").unwrap();
        assert_ne!(first, second);
    }
}
