use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use super::CheckInDto;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::mental_health::application::use_cases::check_in_history::CheckInHistoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<u64>,
    pub skip: Option<u64>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckInHistoryResponse {
    pub check_ins: Vec<CheckInDto>,
    pub total: u64,
    pub pages: u64,
}

/// List the caller's check-ins, newest first
#[utoipa::path(
    get,
    path = "/api/mental-health/checkin/history",
    tag = "mental-health",
    security(("bearer_auth" = [])),
    params(
        ("limit" = Option<u64>, Query, description = "Page size, defaults to 10"),
        ("skip" = Option<u64>, Query, description = "Offset, defaults to 0"),
    ),
    responses(
        (status = 200, description = "Check-in page", body = CheckInHistoryResponse),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/mental-health/checkin/history")]
pub async fn check_in_history_handler(
    auth: AuthenticatedUser,
    query: web::Query<HistoryQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .check_in_history_use_case
        .execute(auth.user_id, query.limit, query.skip)
        .await
    {
        Ok(page) => ApiResponse::success(CheckInHistoryResponse {
            check_ins: page.check_ins.into_iter().map(CheckInDto::from).collect(),
            total: page.total,
            pages: page.pages,
        }),

        Err(CheckInHistoryError::RepositoryError(ref e)) => {
            error!(error = %e, "Check-in history fetch failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::mental_health::application::domain::entities::{CheckIn, Mood};
    use crate::modules::mental_health::application::use_cases::check_in_history::{
        CheckInPage, ICheckInHistoryUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::{bearer_header, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    struct MockHistory;

    #[async_trait]
    impl ICheckInHistoryUseCase for MockHistory {
        async fn execute(
            &self,
            user_id: Uuid,
            limit: Option<u64>,
            _skip: Option<u64>,
        ) -> Result<CheckInPage, CheckInHistoryError> {
            let now = Utc::now();
            let count = limit.unwrap_or(10).min(2);
            let check_ins = (0..count)
                .map(|i| CheckIn {
                    id: Uuid::new_v4(),
                    user_id,
                    mood: Mood::Good,
                    stress_level: 3 + i as i16,
                    sleep_hours: 7.0,
                    activities: vec!["reading".to_string()],
                    notes: String::new(),
                    sentiment_score: 0.0,
                    ai_response: String::new(),
                    response_given: true,
                    created_at: now,
                    updated_at: now,
                })
                .collect();
            Ok(CheckInPage {
                check_ins,
                total: 2,
                pages: 1,
            })
        }
    }

    #[actix_web::test]
    async fn history_returns_page_with_totals() {
        let state = TestAppStateBuilder::default()
            .with_check_in_history(MockHistory)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(test_token_provider())
                .service(check_in_history_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/mental-health/checkin/history?limit=5")
            .insert_header(bearer_header())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["total"], 2);
        assert_eq!(body["data"]["pages"], 1);
        assert_eq!(body["data"]["checkIns"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"]["checkIns"][0]["mood"], "good");
    }

    #[actix_web::test]
    async fn history_requires_a_token() {
        let state = TestAppStateBuilder::default()
            .with_check_in_history(MockHistory)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(test_token_provider())
                .service(check_in_history_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/mental-health/checkin/history")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
