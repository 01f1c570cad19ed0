#[derive(Debug, PartialEq)]
pub enum HashError {
    HashFailed,
    VerifyFailed,
}

/// One-way salted hashing. `hash_password` salts freshly per call, so two
/// hashes of the same password never compare equal as strings.
pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, HashError>;
    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError>;
}
