use actix_web::{patch, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::ReminderDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::reminder::application::use_cases::reminder_service::ReminderError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Mark one of the caller's reminders as done
#[utoipa::path(
    patch,
    path = "/api/reminders/{reminder_id}/complete",
    tag = "reminders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Reminder completed", body = ReminderDto),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Reminder not found"),
    )
)]
#[patch("/api/reminders/{reminder_id}/complete")]
pub async fn complete_reminder_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let reminder_id = path.into_inner();

    match data
        .reminder_use_cases
        .complete(auth.user_id, reminder_id)
        .await
    {
        Ok(reminder) => {
            info!(user_id = %auth.user_id, reminder_id = %reminder_id, "Reminder completed");
            ApiResponse::success(ReminderDto::from(reminder))
        }

        Err(ReminderError::NotFound) => {
            ApiResponse::not_found("REMINDER_NOT_FOUND", "Reminder not found")
        }

        Err(ref e) => {
            error!(error = %e, "Reminder completion failed");
            ApiResponse::internal_error()
        }
    }
}
