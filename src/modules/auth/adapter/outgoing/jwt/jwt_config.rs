use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    /// Token lifetime in seconds.
    pub expiry: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let expiry = env::var("JWT_EXPIRY")
            .unwrap_or_else(|_| "604800".to_string()) // Default 7 days
            .parse::<i64>()
            .expect("Invalid JWT_EXPIRY value");

        Self { secret_key, expiry }
    }
}
