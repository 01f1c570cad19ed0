use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use super::TimetableEntryDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::timetable::application::domain::entities::{ClassType, DayOfWeek};
use crate::modules::timetable::application::use_cases::timetable_service::{
    CreateTimetableEntryRequest, TimetableError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimetableEntryDto {
    pub course_id: Uuid,
    #[schema(value_type = String)]
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub location: Option<String>,
    pub instructor: Option<String>,
    #[schema(value_type = Option<String>)]
    pub class_type: Option<ClassType>,
}

/// Add a weekly class slot
#[utoipa::path(
    post,
    path = "/api/timetable",
    tag = "timetable",
    security(("bearer_auth" = [])),
    request_body = CreateTimetableEntryDto,
    responses(
        (status = 201, description = "Timetable entry created", body = TimetableEntryDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Course not found"),
    )
)]
#[post("/api/timetable")]
pub async fn create_timetable_entry_handler(
    auth: AuthenticatedUser,
    req: web::Json<CreateTimetableEntryDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match CreateTimetableEntryRequest::new(
        auth.user_id,
        dto.course_id,
        dto.day_of_week,
        dto.start_time,
        dto.end_time,
        dto.location,
        dto.instructor,
        dto.class_type,
    ) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.timetable_use_cases.create(request).await {
        Ok(entry) => {
            info!(user_id = %auth.user_id, entry_id = %entry.id, "Timetable entry created");
            ApiResponse::created(TimetableEntryDto::from(entry))
        }

        Err(TimetableError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(TimetableError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }

        Err(ref e) => {
            error!(error = %e, "Timetable entry creation failed");
            ApiResponse::internal_error()
        }
    }
}
