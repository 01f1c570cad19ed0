use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use super::UserDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::ports::outgoing::ProfilePatch;
use crate::modules::auth::application::use_cases::update_profile::UpdateProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub university: Option<String>,
    pub department: Option<String>,
    pub avatar: Option<String>,
}

/// Update the caller's profile
#[utoipa::path(
    put,
    path = "/api/auth/profile",
    tag = "auth",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User not found"),
    )
)]
#[put("/api/auth/profile")]
pub async fn update_profile_handler(
    auth: AuthenticatedUser,
    req: web::Json<UpdateProfileDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let patch = ProfilePatch {
        name: dto.name,
        university: dto.university,
        department: dto.department,
        avatar: dto.avatar,
    };

    match data
        .update_profile_use_case
        .execute(auth.user_id, patch)
        .await
    {
        Ok(user) => {
            info!(user_id = %user.id, "Profile updated");
            ApiResponse::success(UserDto::from(user))
        }

        Err(UpdateProfileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
