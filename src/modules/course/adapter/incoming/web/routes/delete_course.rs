use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::course::application::use_cases::course_service::CourseError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeletedResponse {
    pub deleted: bool,
}

/// Delete one of the caller's courses
#[utoipa::path(
    delete,
    path = "/api/courses/{course_id}",
    tag = "courses",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Course deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Course not found"),
    )
)]
#[delete("/api/courses/{course_id}")]
pub async fn delete_course_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = path.into_inner();

    match data.course_use_cases.delete(auth.user_id, course_id).await {
        Ok(()) => {
            info!(user_id = %auth.user_id, course_id = %course_id, "Course deleted");
            ApiResponse::success(DeletedResponse { deleted: true })
        }

        Err(CourseError::NotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }

        Err(ref e) => {
            error!(error = %e, "Course deletion failed");
            ApiResponse::internal_error()
        }
    }
}
