use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::UserDto;
use crate::modules::auth::application::use_cases::register_user::{
    RegisterRequest, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub student_id: Option<String>,
    pub university: Option<String>,
    pub department: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    pub token: String,
    pub user: UserDto,
}

/// Register a new account
///
/// Creates the user, hashes the password and returns a 7-day session token.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "User registered"),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email or student id already registered"),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match RegisterRequest::new(
        dto.name,
        dto.email,
        dto.password,
        dto.student_id,
        dto.university,
        dto.department,
    ) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.register_user_use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, email = %response.user.email, "User registered");
            ApiResponse::created(RegisterResponse {
                token: response.token,
                user: response.user.into(),
            })
        }

        Err(RegisterUserError::EmailTaken) => {
            warn!("Registration failed: email already registered");
            ApiResponse::conflict("EMAIL_TAKEN", "Email already registered")
        }

        Err(RegisterUserError::StudentIdTaken) => {
            warn!("Registration failed: student id already registered");
            ApiResponse::conflict("STUDENT_ID_TAKEN", "Student id already registered")
        }

        Err(RegisterUserError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(ref e) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
