use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use super::AttendanceDto;
use crate::modules::attendance::application::domain::entities::AttendanceStatus;
use crate::modules::attendance::application::use_cases::attendance_service::AttendanceError;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceDto {
    pub course_id: Uuid,
    #[schema(value_type = String)]
    pub date: NaiveDate,
    #[schema(value_type = String)]
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
}

/// Mark attendance for a class session
#[utoipa::path(
    post,
    path = "/api/attendance",
    tag = "attendance",
    security(("bearer_auth" = [])),
    request_body = MarkAttendanceDto,
    responses(
        (status = 201, description = "Attendance marked", body = AttendanceDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Course not found"),
    )
)]
#[post("/api/attendance")]
pub async fn mark_attendance_handler(
    auth: AuthenticatedUser,
    req: web::Json<MarkAttendanceDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data
        .attendance_use_cases
        .mark(auth.user_id, dto.course_id, dto.date, dto.status, dto.remarks)
        .await
    {
        Ok(record) => {
            info!(
                user_id = %auth.user_id,
                course_id = %record.course_id,
                status = record.status.as_str(),
                "Attendance marked"
            );
            ApiResponse::created(AttendanceDto::from(record))
        }

        Err(AttendanceError::CourseNotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }

        Err(AttendanceError::RepositoryError(ref e)) => {
            error!(error = %e, "Attendance marking failed");
            ApiResponse::internal_error()
        }
    }
}
