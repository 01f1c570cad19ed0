use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::CourseDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::course::application::domain::entities::Assessment;
use crate::modules::course::application::use_cases::course_service::CourseError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddAssessmentDto {
    pub name: String,
    /// quiz, assignment, midterm, final
    #[serde(rename = "type")]
    pub kind: String,
    #[schema(value_type = Option<String>)]
    pub due_date: Option<NaiveDate>,
    pub marks: Option<f32>,
    pub total_marks: Option<f32>,
}

/// Add an assessment to one of the caller's courses
#[utoipa::path(
    post,
    path = "/api/courses/{course_id}/assessment",
    tag = "courses",
    security(("bearer_auth" = [])),
    request_body = AddAssessmentDto,
    responses(
        (status = 200, description = "Assessment added", body = CourseDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Course not found"),
    )
)]
#[post("/api/courses/{course_id}/assessment")]
pub async fn add_assessment_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AddAssessmentDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let course_id = path.into_inner();
    let dto = req.into_inner();

    let assessment = Assessment {
        name: dto.name,
        kind: dto.kind,
        due_date: dto.due_date,
        marks: dto.marks,
        total_marks: dto.total_marks,
        completed: false,
    };

    match data
        .course_use_cases
        .add_assessment(auth.user_id, course_id, assessment)
        .await
    {
        Ok(course) => ApiResponse::success(CourseDto::from(course)),

        Err(CourseError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(CourseError::NotFound) => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }

        Err(CourseError::RepositoryError(ref e)) => {
            error!(error = %e, "Assessment creation failed");
            ApiResponse::internal_error()
        }
    }
}
