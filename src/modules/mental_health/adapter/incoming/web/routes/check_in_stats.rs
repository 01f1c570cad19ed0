use std::collections::BTreeMap;

use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::mental_health::application::use_cases::check_in_stats::CheckInStatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckInStatsDto {
    pub total_check_ins: u64,
    pub average_stress: String,
    pub average_sleep_hours: String,
    pub average_sentiment: String,
    pub mood_distribution: BTreeMap<String, u64>,
}

/// Aggregate statistics over the caller's check-ins
#[utoipa::path(
    get,
    path = "/api/mental-health/checkin/stats",
    tag = "mental-health",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Check-in statistics", body = CheckInStatsDto),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/mental-health/checkin/stats")]
pub async fn check_in_stats_handler(
    auth: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.check_in_stats_use_case.execute(auth.user_id).await {
        Ok(stats) => ApiResponse::success(CheckInStatsDto {
            total_check_ins: stats.total_check_ins,
            average_stress: stats.average_stress,
            average_sleep_hours: stats.average_sleep_hours,
            average_sentiment: stats.average_sentiment,
            mood_distribution: stats.mood_distribution,
        }),

        Err(CheckInStatsError::RepositoryError(ref e)) => {
            error!(error = %e, "Check-in stats fetch failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::mental_health::application::use_cases::check_in_stats::{
        CheckInStats, ICheckInStatsUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::{bearer_header, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockStats;

    #[async_trait]
    impl ICheckInStatsUseCase for MockStats {
        async fn execute(&self, _user_id: Uuid) -> Result<CheckInStats, CheckInStatsError> {
            let mut mood_distribution = BTreeMap::new();
            mood_distribution.insert("good".to_string(), 3);
            mood_distribution.insert("poor".to_string(), 1);
            Ok(CheckInStats {
                total_check_ins: 4,
                average_stress: "4.25".to_string(),
                average_sleep_hours: "7.13".to_string(),
                average_sentiment: "0.15".to_string(),
                mood_distribution,
            })
        }
    }

    #[actix_web::test]
    async fn stats_are_returned_as_formatted_strings() {
        let state = TestAppStateBuilder::default()
            .with_check_in_stats(MockStats)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(test_token_provider())
                .service(check_in_stats_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/mental-health/checkin/stats")
            .insert_header(bearer_header())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["totalCheckIns"], 4);
        assert_eq!(body["data"]["averageStress"], "4.25");
        assert_eq!(body["data"]["moodDistribution"]["good"], 3);
    }
}
