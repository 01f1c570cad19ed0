use actix_web::{get, web, Responder};
use tracing::error;

use super::UserDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch the caller's profile
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile", body = UserDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User not found"),
    )
)]
#[get("/api/auth/profile")]
pub async fn fetch_profile_handler(
    auth: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_profile_use_case.execute(auth.user_id).await {
        Ok(user) => ApiResponse::success(UserDto::from(user)),

        Err(FetchProfileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Profile fetch failed");
            ApiResponse::internal_error()
        }
    }
}
