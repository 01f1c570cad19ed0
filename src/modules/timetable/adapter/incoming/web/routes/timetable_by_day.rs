use actix_web::{get, web, Responder};
use tracing::error;

use super::TimetableEntryDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::timetable::application::domain::entities::DayOfWeek;
use crate::modules::timetable::application::use_cases::timetable_service::TimetableError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The caller's timetable for one day, earliest class first
#[utoipa::path(
    get,
    path = "/api/timetable/{day}",
    tag = "timetable",
    security(("bearer_auth" = [])),
    params(("day" = String, Path, description = "Capitalized day name, e.g. Monday")),
    responses(
        (status = 200, description = "Timetable entries", body = [TimetableEntryDto]),
        (status = 400, description = "Unknown day name"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/timetable/{day}")]
pub async fn timetable_by_day_handler(
    auth: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let day = match DayOfWeek::parse(&path.into_inner()) {
        Some(day) => day,
        None => {
            return ApiResponse::bad_request(
                "VALIDATION_ERROR",
                "Day must be a capitalized day name, e.g. Monday",
            )
        }
    };

    match data.timetable_use_cases.list_by_day(auth.user_id, day).await {
        Ok(entries) => ApiResponse::success(
            entries
                .into_iter()
                .map(TimetableEntryDto::from)
                .collect::<Vec<_>>(),
        ),

        Err(TimetableError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(TimetableError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }

        Err(TimetableError::NotFound) => {
            ApiResponse::not_found("TIMETABLE_ENTRY_NOT_FOUND", "Timetable entry not found")
        }

        Err(TimetableError::RepositoryError(ref e)) => {
            error!(error = %e, "Timetable day fetch failed");
            ApiResponse::internal_error()
        }
    }
}
