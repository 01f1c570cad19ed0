use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::reminder::application::use_cases::reminder_service::ReminderError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeletedResponse {
    pub deleted: bool,
}

/// Delete one of the caller's reminders
#[utoipa::path(
    delete,
    path = "/api/reminders/{reminder_id}",
    tag = "reminders",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Reminder deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Reminder not found"),
    )
)]
#[delete("/api/reminders/{reminder_id}")]
pub async fn delete_reminder_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let reminder_id = path.into_inner();

    match data
        .reminder_use_cases
        .delete(auth.user_id, reminder_id)
        .await
    {
        Ok(()) => {
            info!(user_id = %auth.user_id, reminder_id = %reminder_id, "Reminder deleted");
            ApiResponse::success(DeletedResponse { deleted: true })
        }

        Err(ReminderError::NotFound) => {
            ApiResponse::not_found("REMINDER_NOT_FOUND", "Reminder not found")
        }

        Err(ref e) => {
            error!(error = %e, "Reminder deletion failed");
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
    async fn delete_missing_reminder_returns_404() {
        let state = TestAppStateBuilder::default()
            .with_reminder_use_cases(MockReminderUseCases::default())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(test_token_provider())
                .service(delete_reminder_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/reminders/{}", Uuid::nil()))
            .insert_header(bearer_header())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
