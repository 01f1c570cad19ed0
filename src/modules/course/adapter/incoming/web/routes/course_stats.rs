use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseStatsDto {
    pub total_courses: u64,
    pub average_completion: String,
    pub courses_with_grades: u64,
    pub total_credits: i64,
}

/// Aggregate statistics over the caller's courses
#[utoipa::path(
    get,
    path = "/api/courses/stats",
    tag = "courses",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Course statistics", body = CourseStatsDto),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/courses/stats")]
pub async fn course_stats_handler(
    auth: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.course_use_cases.stats(auth.user_id).await {
        Ok(stats) => ApiResponse::success(CourseStatsDto {
            total_courses: stats.total_courses,
            average_completion: stats.average_completion,
            courses_with_grades: stats.courses_with_grades,
            total_credits: stats.total_credits,
        }),

        Err(ref e) => {
            error!(error = %e, "Course stats fetch failed");
            ApiResponse::internal_error()
        }
    }
}
