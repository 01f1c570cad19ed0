use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::CourseDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::course::application::ports::outgoing::CoursePatch;
use crate::modules::course::application::use_cases::course_service::CourseError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseDto {
    pub name: Option<String>,
    pub code: Option<String>,
    pub instructor: Option<String>,
    pub credits: Option<i32>,
    pub completion_percentage: Option<i16>,
    pub grade: Option<String>,
}

/// Update one of the caller's courses
#[utoipa::path(
    put,
    path = "/api/courses/{course_id}",
    tag = "courses",
    security(("bearer_auth" = [])),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = CourseDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Course not found"),
    )
)]
#[put("/api/courses/{course_id}")]
pub async fn update_course_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCourseDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = path.into_inner();
    let dto = req.into_inner();

    let patch = CoursePatch {
        name: dto.name,
        code: dto.code,
        instructor: dto.instructor,
        credits: dto.credits,
        completion_percentage: dto.completion_percentage,
        grade: dto.grade,
    };

    match data
        .course_use_cases
        .update(auth.user_id, course_id, patch)
        .await
    {
        Ok(course) => ApiResponse::success(CourseDto::from(course)),

        Err(CourseError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(CourseError::NotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }

        Err(CourseError::RepositoryError(ref e)) => {
            error!(error = %e, "Course update failed");
            ApiResponse::internal_error()
        }
    }
}
