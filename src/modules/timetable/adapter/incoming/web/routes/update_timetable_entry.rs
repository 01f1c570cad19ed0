use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::TimetableEntryDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::timetable::application::domain::entities::{ClassType, DayOfWeek};
use crate::modules::timetable::application::ports::outgoing::TimetableEntryPatch;
use crate::modules::timetable::application::use_cases::timetable_service::TimetableError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimetableEntryDto {
    #[schema(value_type = Option<String>)]
    pub day_of_week: Option<DayOfWeek>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub instructor: Option<String>,
    #[schema(value_type = Option<String>)]
    pub class_type: Option<ClassType>,
}

/// Update one of the caller's timetable entries
#[utoipa::path(
    put,
    path = "/api/timetable/{entry_id}",
    tag = "timetable",
    security(("bearer_auth" = [])),
    request_body = UpdateTimetableEntryDto,
    responses(
        (status = 200, description = "Timetable entry updated", body = TimetableEntryDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Timetable entry not found"),
    )
)]
#[put("/api/timetable/{entry_id}")]
pub async fn update_timetable_entry_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateTimetableEntryDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry_id = path.into_inner();
    let dto = req.into_inner();

    let patch = TimetableEntryPatch {
        day_of_week: dto.day_of_week,
        start_time: dto.start_time,
        end_time: dto.end_time,
        location: dto.location,
        instructor: dto.instructor,
        class_type: dto.class_type,
    };

    match data
        .timetable_use_cases
        .update(auth.user_id, entry_id, patch)
        .await
    {
        Ok(entry) => ApiResponse::success(TimetableEntryDto::from(entry)),

        Err(TimetableError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(TimetableError::NotFound) => {
            ApiResponse::not_found("TIMETABLE_ENTRY_NOT_FOUND", "Timetable entry not found")
        }

        Err(ref e) => {
            error!(error = %e, "Timetable entry update failed");
            ApiResponse::internal_error()
        }
    }
}
