use actix_web::{get, web, Responder};
use tracing::error;

use super::ReminderDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the caller's reminders, earliest first
#[utoipa::path(
    get,
    path = "/api/reminders",
    tag = "reminders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Reminders", body = [ReminderDto]),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/reminders")]
pub async fn list_reminders_handler(
    auth: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.reminder_use_cases.list(auth.user_id).await {
        Ok(reminders) => ApiResponse::success(
            reminders
                .into_iter()
                .map(ReminderDto::from)
                .collect::<Vec<_>>(),
        ),

        Err(ref e) => {
            error!(error = %e, "Reminder listing failed");
            ApiResponse::internal_error()
        }
    }
}
