use actix_web::{get, web, Responder};
use tracing::error;

use super::CourseDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the caller's courses
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "courses",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Courses", body = [CourseDto]),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/courses")]
pub async fn list_courses_handler(
    auth: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.course_use_cases.list(auth.user_id).await {
        Ok(courses) => {
            ApiResponse::success(courses.into_iter().map(CourseDto::from).collect::<Vec<_>>())
        }

        Err(ref e) => {
            error!(error = %e, "Course list failed");
            ApiResponse::internal_error()
        }
    }
}
