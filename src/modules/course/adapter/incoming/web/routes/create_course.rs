use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use super::CourseDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::course::application::use_cases::course_service::{
    CourseError, CreateCourseRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    pub name: String,
    pub code: String,
    pub instructor: Option<String>,
    pub credits: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub end_date: Option<NaiveDate>,
}

/// Create a course
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = "courses",
    security(("bearer_auth" = [])),
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created", body = CourseDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[post("/api/courses")]
pub async fn create_course_handler(
    auth: AuthenticatedUser,
    req: web::Json<CreateCourseDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match CreateCourseRequest::new(
        auth.user_id,
        dto.name,
        dto.code,
        dto.instructor,
        dto.credits,
        dto.start_date,
        dto.end_date,
    ) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.course_use_cases.create(request).await {
        Ok(course) => {
            info!(user_id = %auth.user_id, course_id = %course.id, "Course created");
            ApiResponse::created(CourseDto::from(course))
        }

        Err(CourseError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(ref e) => {
            error!(error = %e, "Course creation failed");
            ApiResponse::internal_error()
        }
    }
}
