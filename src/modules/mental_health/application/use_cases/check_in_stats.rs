use std::collections::BTreeMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::mental_health::application::ports::outgoing::CheckInRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckInStatsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Aggregates over all of a user's check-ins. Averages are pre-formatted
/// with two decimals for direct display.
#[derive(Debug, Clone)]
pub struct CheckInStats {
    pub total_check_ins: u64,
    pub average_stress: String,
    pub average_sleep_hours: String,
    pub average_sentiment: String,
    pub mood_distribution: BTreeMap<String, u64>,
}

#[async_trait]
pub trait ICheckInStatsUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<CheckInStats, CheckInStatsError>;
}

pub struct CheckInStatsUseCase<R>
where
    R: CheckInRepository,
{
    repository: R,
}

impl<R> CheckInStatsUseCase<R>
where
    R: CheckInRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICheckInStatsUseCase for CheckInStatsUseCase<R>
where
    R: CheckInRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<CheckInStats, CheckInStatsError> {
        let check_ins = self
            .repository
            .all_for_user(user_id)
            .await
            .map_err(|e| CheckInStatsError::RepositoryError(e.to_string()))?;

        if check_ins.is_empty() {
            return Ok(CheckInStats {
                total_check_ins: 0,
                average_stress: "0.00".to_string(),
                average_sleep_hours: "0.00".to_string(),
                average_sentiment: "0.00".to_string(),
                mood_distribution: BTreeMap::new(),
            });
        }

        let count = check_ins.len() as f64;
        let stress_sum: f64 = check_ins.iter().map(|c| f64::from(c.stress_level)).sum();
        let sleep_sum: f64 = check_ins.iter().map(|c| f64::from(c.sleep_hours)).sum();
        let sentiment_sum: f64 = check_ins.iter().map(|c| f64::from(c.sentiment_score)).sum();

        let mut mood_distribution = BTreeMap::new();
        for check_in in &check_ins {
            *mood_distribution
                .entry(check_in.mood.as_str().to_string())
                .or_insert(0) += 1;
        }

        Ok(CheckInStats {
            total_check_ins: check_ins.len() as u64,
            average_stress: format!("{:.2}", stress_sum / count),
            average_sleep_hours: format!("{:.2}", sleep_sum / count),
            average_sentiment: format!("{:.2}", sentiment_sum / count),
            mood_distribution,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::mental_health::application::domain::entities::{CheckIn, Mood};
    use crate::modules::mental_health::application::ports::outgoing::{
        CheckInRepositoryError, NewCheckIn,
    };
    use chrono::Utc;

    struct CannedRepo {
        check_ins: Vec<CheckIn>,
    }

    #[async_trait]
    impl CheckInRepository for CannedRepo {
        async fn create_and_update_user(
            &self,
            _check_in: NewCheckIn,
            _wellness_score: i16,
        ) -> Result<CheckIn, CheckInRepositoryError> {
            unreachable!()
        }

        async fn history(
            &self,
            _user_id: Uuid,
            _limit: u64,
            _skip: u64,
        ) -> Result<(Vec<CheckIn>, u64), CheckInRepositoryError> {
            unreachable!()
        }

        async fn all_for_user(
            &self,
            _user_id: Uuid,
        ) -> Result<Vec<CheckIn>, CheckInRepositoryError> {
            Ok(self.check_ins.clone())
        }
    }

    fn check_in(mood: Mood, stress: i16, sleep: f32, sentiment: f32) -> CheckIn {
        let now = Utc::now();
        CheckIn {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            mood,
            stress_level: stress,
            sleep_hours: sleep,
            activities: vec![],
            notes: String::new(),
            sentiment_score: sentiment,
            ai_response: String::new(),
            response_given: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn empty_history_yields_zeroed_stats() {
        let use_case = CheckInStatsUseCase::new(CannedRepo { check_ins: vec![] });

        let stats = use_case.execute(Uuid::new_v4()).await.unwrap();

        assert_eq!(stats.total_check_ins, 0);
        assert_eq!(stats.average_stress, "0.00");
        assert_eq!(stats.average_sleep_hours, "0.00");
        assert!(stats.mood_distribution.is_empty());
    }

    #[tokio::test]
    async fn averages_are_formatted_with_two_decimals() {
        let use_case = CheckInStatsUseCase::new(CannedRepo {
            check_ins: vec![
                check_in(Mood::Good, 3, 7.0, 0.5),
                check_in(Mood::Good, 4, 8.0, -0.2),
                check_in(Mood::Poor, 8, 6.0, 0.0),
            ],
        });

        let stats = use_case.execute(Uuid::new_v4()).await.unwrap();

        assert_eq!(stats.total_check_ins, 3);
        assert_eq!(stats.average_stress, "5.00");
        assert_eq!(stats.average_sleep_hours, "7.00");
        assert_eq!(stats.average_sentiment, "0.10");
        assert_eq!(stats.mood_distribution.get("good"), Some(&2));
        assert_eq!(stats.mood_distribution.get("poor"), Some(&1));
    }
}
