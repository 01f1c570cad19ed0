use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use super::CheckInDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::mental_health::application::domain::entities::Mood;
use crate::modules::mental_health::application::use_cases::create_check_in::{
    CreateCheckInError, CreateCheckInRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckInDto {
    #[schema(value_type = String)]
    pub mood: Mood,
    pub stress_level: i16,
    pub sleep_hours: f32,
    #[serde(default)]
    pub activities: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckInResponse {
    pub check_in: CheckInDto,
    pub ai_response: String,
    pub wellness_score: i16,
    pub wellness_tips: Vec<String>,
    pub emotion_detected: String,
}

/// Record a mental-health check-in
///
/// Scores the entry, stores it and refreshes the caller's stress level
/// and wellness score.
#[utoipa::path(
    post,
    path = "/api/mental-health/checkin",
    tag = "mental-health",
    security(("bearer_auth" = [])),
    request_body = CreateCheckInDto,
    responses(
        (status = 201, description = "Check-in recorded", body = CreateCheckInResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[post("/api/mental-health/checkin")]
pub async fn create_check_in_handler(
    auth: AuthenticatedUser,
    req: web::Json<CreateCheckInDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match CreateCheckInRequest::new(
        auth.user_id,
        dto.mood,
        dto.stress_level,
        dto.sleep_hours,
        dto.activities,
        dto.notes,
    ) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.create_check_in_use_case.execute(request).await {
        Ok(outcome) => {
            info!(
                user_id = %auth.user_id,
                wellness_score = outcome.wellness_score,
                "Check-in recorded"
            );
            let ai_response = outcome.check_in.ai_response.clone();
            ApiResponse::created(CreateCheckInResponse {
                check_in: outcome.check_in.into(),
                ai_response,
                wellness_score: outcome.wellness_score,
                wellness_tips: outcome.tips,
                emotion_detected: outcome.emotion.as_str().to_string(),
            })
        }

        Err(CreateCheckInError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreateCheckInError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(CreateCheckInError::RepositoryError(ref e)) => {
            error!(error = %e, "Check-in creation failed");
            ApiResponse::internal_error()
        }
    }
}
