use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::AttendanceDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the caller's attendance for a course, newest first
#[utoipa::path(
    get,
    path = "/api/attendance/{course_id}",
    tag = "attendance",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Attendance records", body = [AttendanceDto]),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/attendance/{course_id}")]
pub async fn list_attendance_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = path.into_inner();

    match data.attendance_use_cases.list(auth.user_id, course_id).await {
        Ok(records) => ApiResponse::success(
            records
                .into_iter()
                .map(AttendanceDto::from)
                .collect::<Vec<_>>(),
        ),

        Err(ref e) => {
            error!(error = %e, "Attendance list failed");
            ApiResponse::internal_error()
        }
    }
}
