use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use super::ReminderDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::reminder::application::domain::entities::{
    Frequency, Priority, ReminderKind,
};
use crate::modules::reminder::application::use_cases::reminder_service::{
    CreateReminderRequest, ReminderError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReminderDto {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[schema(value_type = Option<String>)]
    pub kind: Option<ReminderKind>,
    #[schema(value_type = String, format = Date)]
    pub reminder_date: NaiveDate,
    pub reminder_time: String,
    #[schema(value_type = Option<String>)]
    pub frequency: Option<Frequency>,
    #[schema(value_type = Option<String>)]
    pub priority: Option<Priority>,
}

/// Create a reminder
#[utoipa::path(
    post,
    path = "/api/reminders",
    tag = "reminders",
    security(("bearer_auth" = [])),
    request_body = CreateReminderDto,
    responses(
        (status = 201, description = "Reminder created", body = ReminderDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[post("/api/reminders")]
pub async fn create_reminder_handler(
    auth: AuthenticatedUser,
    req: web::Json<CreateReminderDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match CreateReminderRequest::new(
        auth.user_id,
        dto.title,
        dto.description,
        dto.kind,
        dto.reminder_date,
        dto.reminder_time,
        dto.frequency,
        dto.priority,
    ) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.reminder_use_cases.create(request).await {
        Ok(reminder) => {
            info!(user_id = %auth.user_id, reminder_id = %reminder.id, "Reminder created");
            ApiResponse::created(ReminderDto::from(reminder))
        }

        Err(ReminderError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),

        Err(ref e) => {
            error!(error = %e, "Reminder creation failed");
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
    async fn create_returns_201_with_defaults() {
        let state = TestAppStateBuilder::default()
            .with_reminder_use_cases(MockReminderUseCases::default())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(test_token_provider())
                .service(create_reminder_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/reminders")
            .insert_header(bearer_header())
            .set_json(serde_json::json!({
                "title": "Submit lab report",
                "reminderDate": "2025-09-20",
                "reminderTime": "09:00"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["title"], "Submit lab report");
        assert_eq!(body["data"]["type"], "custom");
        assert_eq!(body["data"]["frequency"], "once");
        assert_eq!(body["data"]["priority"], "medium");
        assert_eq!(body["data"]["isCompleted"], false);
    }

    #[actix_web::test]
    async fn blank_title_returns_400() {
        let state = TestAppStateBuilder::default()
            .with_reminder_use_cases(MockReminderUseCases::default())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(test_token_provider())
                .service(create_reminder_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/reminders")
            .insert_header(bearer_header())
            .set_json(serde_json::json!({
                "title": "  ",
                "reminderDate": "2025-09-20",
                "reminderTime": "09:00"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn missing_token_returns_401() {
        let state = TestAppStateBuilder::default()
            .with_reminder_use_cases(MockReminderUseCases::default())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(test_token_provider())
                .service(create_reminder_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/reminders")
            .set_json(serde_json::json!({
                "title": "Submit lab report",
                "reminderDate": "2025-09-20",
                "reminderTime": "09:00"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
