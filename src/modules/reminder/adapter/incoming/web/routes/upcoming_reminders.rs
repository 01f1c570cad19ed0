use actix_web::{get, web, Responder};
use tracing::error;

use super::ReminderDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The caller's next open reminders, starting today
#[utoipa::path(
    get,
    path = "/api/reminders/upcoming",
    tag = "reminders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Upcoming reminders", body = [ReminderDto]),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/reminders/upcoming")]
pub async fn upcoming_reminders_handler(
    auth: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.reminder_use_cases.upcoming(auth.user_id).await {
        Ok(reminders) => ApiResponse::success(
            reminders
                .into_iter()
                .map(ReminderDto::from)
                .collect::<Vec<_>>(),
        ),

        Err(ref e) => {
            error!(error = %e, "Upcoming reminder lookup failed");
            ApiResponse::internal_error()
        }
    }
}
