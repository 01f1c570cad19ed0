use actix_web::{get, web, Responder};
use tracing::error;

use super::TimetableEntryDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The caller's full weekly timetable, Monday first
#[utoipa::path(
    get,
    path = "/api/timetable",
    tag = "timetable",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Timetable entries", body = [TimetableEntryDto]),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/timetable")]
pub async fn list_timetable_handler(
    auth: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.timetable_use_cases.list(auth.user_id).await {
        Ok(entries) => ApiResponse::success(
            entries
                .into_iter()
                .map(TimetableEntryDto::from)
                .collect::<Vec<_>>(),
        ),

        Err(ref e) => {
            error!(error = %e, "Timetable list failed");
            ApiResponse::internal_error()
        }
    }
}
