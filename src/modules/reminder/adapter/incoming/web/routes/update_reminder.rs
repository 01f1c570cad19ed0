use actix_web::{put, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::ReminderDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::reminder::application::domain::entities::{
    Frequency, Priority, ReminderKind,
};
use crate::modules::reminder::application::ports::outgoing::ReminderPatch;
use crate::modules::reminder::application::use_cases::reminder_service::ReminderError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReminderDto {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[schema(value_type = Option<String>)]
    pub kind: Option<ReminderKind>,
    #[schema(value_type = Option<String>, format = Date)]
    pub reminder_date: Option<NaiveDate>,
    pub reminder_time: Option<String>,
    #[schema(value_type = Option<String>)]
    pub frequency: Option<Frequency>,
    #[schema(value_type = Option<String>)]
    pub priority: Option<Priority>,
    pub is_completed: Option<bool>,
}

/// Update one of the caller's reminders
#[utoipa::path(
    put,
    path = "/api/reminders/{reminder_id}",
    tag = "reminders",
    security(("bearer_auth" = [])),
    request_body = UpdateReminderDto,
    responses(
        (status = 200, description = "Reminder updated", body = ReminderDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Reminder not found"),
    )
)]
#[put("/api/reminders/{reminder_id}")]
pub async fn update_reminder_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateReminderDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let reminder_id = path.into_inner();
    let dto = req.into_inner();

    let patch = ReminderPatch {
        title: dto.title,
        description: dto.description,
        kind: dto.kind,
        reminder_date: dto.reminder_date,
        reminder_time: dto.reminder_time,
        frequency: dto.frequency,
        priority: dto.priority,
        is_completed: dto.is_completed,
    };

    match data
        .reminder_use_cases
        .update(auth.user_id, reminder_id, patch)
        .await
    {
        Ok(reminder) => ApiResponse::success(ReminderDto::from(reminder)),

        Err(ReminderError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(ReminderError::NotFound) => {
            ApiResponse::not_found("REMINDER_NOT_FOUND", "Reminder not found")
        }

        Err(ref e) => {
            error!(error = %e, "Reminder update failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::MockReminderUseCases;
    use crate::tests::support::{bearer_header, test_token_provider};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn update_applies_patch() {
        let state = TestAppStateBuilder::default()
            .with_reminder_use_cases(MockReminderUseCases::default())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(test_token_provider())
                .service(update_reminder_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/reminders/{}", Uuid::new_v4()))
            .insert_header(bearer_header())
            .set_json(serde_json::json!({ "title": "Reschedule dentist", "priority": "high" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["title"], "Reschedule dentist");
        assert_eq!(body["data"]["priority"], "high");
    }

    #[actix_web::test]
    async fn malformed_time_returns_400() {
        let state = TestAppStateBuilder::default()
            .with_reminder_use_cases(MockReminderUseCases::default())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(test_token_provider())
                .service(update_reminder_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/reminders/{}", Uuid::new_v4()))
            .insert_header(bearer_header())
            .set_json(serde_json::json!({ "reminderTime": "noon" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn update_of_missing_reminder_returns_404() {
        let state = TestAppStateBuilder::default()
            .with_reminder_use_cases(MockReminderUseCases::default())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(test_token_provider())
                .service(update_reminder_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/reminders/{}", Uuid::nil()))
            .insert_header(bearer_header())
            .set_json(serde_json::json!({ "title": "Anything" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
