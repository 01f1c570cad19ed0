use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverallAttendanceStatsDto {
    pub total_classes: u64,
    pub present: u64,
    pub absent: u64,
    pub late: u64,
    pub excused: u64,
    pub overall_attendance_percentage: String,
}

/// Attendance breakdown across all of the caller's courses
#[utoipa::path(
    get,
    path = "/api/attendance/stats",
    tag = "attendance",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Overall attendance statistics", body = OverallAttendanceStatsDto),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/attendance/stats")]
pub async fn overall_attendance_stats_handler(
    auth: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.attendance_use_cases.overall_stats(auth.user_id).await {
        Ok(stats) => ApiResponse::success(OverallAttendanceStatsDto {
            total_classes: stats.total,
            present: stats.present,
            absent: stats.absent,
            late: stats.late,
            excused: stats.excused,
            overall_attendance_percentage: stats.attendance_percentage,
        }),

        Err(ref e) => {
            error!(error = %e, "Overall attendance stats fetch failed");
            ApiResponse::internal_error()
        }
    }
}
