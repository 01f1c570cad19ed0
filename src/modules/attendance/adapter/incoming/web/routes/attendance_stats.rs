use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStatsDto {
    pub total: u64,
    pub present: u64,
    pub absent: u64,
    pub late: u64,
    pub excused: u64,
    pub attendance_percentage: String,
}

/// Attendance breakdown for one course
#[utoipa::path(
    get,
    path = "/api/attendance/stats/{course_id}",
    tag = "attendance",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Attendance statistics", body = AttendanceStatsDto),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/attendance/stats/{course_id}")]
pub async fn attendance_stats_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = path.into_inner();

    match data
        .attendance_use_cases
        .course_stats(auth.user_id, course_id)
        .await
    {
        Ok(stats) => ApiResponse::success(AttendanceStatsDto {
            total: stats.total,
            present: stats.present,
            absent: stats.absent,
            late: stats.late,
            excused: stats.excused,
            attendance_percentage: stats.attendance_percentage,
        }),

        Err(ref e) => {
            error!(error = %e, "Attendance stats fetch failed");
            ApiResponse::internal_error()
        }
    }
}
