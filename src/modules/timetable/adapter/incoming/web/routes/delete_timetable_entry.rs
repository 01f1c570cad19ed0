use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::timetable::application::use_cases::timetable_service::TimetableError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeletedResponse {
    pub deleted: bool,
}

/// Delete one of the caller's timetable entries
#[utoipa::path(
    delete,
    path = "/api/timetable/{entry_id}",
    tag = "timetable",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Timetable entry deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Timetable entry not found"),
    )
)]
#[delete("/api/timetable/{entry_id}")]
pub async fn delete_timetable_entry_handler(
    auth: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry_id = path.into_inner();

    match data.timetable_use_cases.delete(auth.user_id, entry_id).await {
        Ok(()) => {
            info!(user_id = %auth.user_id, entry_id = %entry_id, "Timetable entry deleted");
            ApiResponse::success(DeletedResponse { deleted: true })
        }

        Err(TimetableError::NotFound) => {
            ApiResponse::not_found("TIMETABLE_ENTRY_NOT_FOUND", "Timetable entry not found")
        }

        Err(ref e) => {
            error!(error = %e, "Timetable entry deletion failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::MockTimetableUseCases;
    use crate::tests::support::{bearer_header, test_token_provider};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn delete_missing_entry_returns_404() {
        let state = TestAppStateBuilder::default()
            .with_timetable_use_cases(MockTimetableUseCases::default())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(test_token_provider())
                .service(delete_timetable_entry_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/timetable/{}", Uuid::nil()))
            .insert_header(bearer_header())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
