pub mod app_state_builder;
pub mod stubs;

use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::ports::outgoing::TokenProvider;

const TEST_JWT_SECRET: &str = "test-only-secret";

fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        expiry: 3600,
    })
}

/// Token provider to register as app data on protected-route test apps.
pub fn test_token_provider() -> web::Data<Arc<dyn TokenProvider>> {
    web::Data::new(Arc::new(test_jwt_service()) as Arc<dyn TokenProvider>)
}

/// A valid Authorization header accepted by [`test_token_provider`].
pub fn bearer_header() -> (&'static str, String) {
    let token = test_jwt_service()
        .issue_token(stubs::test_user().id, "jane@uni.edu")
        .expect("test token should sign");
    ("Authorization", format!("Bearer {token}"))
}
