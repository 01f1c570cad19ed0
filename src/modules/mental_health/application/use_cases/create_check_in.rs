use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::mental_health::application::domain::entities::{CheckIn, Emotion, Mood};
use crate::modules::mental_health::application::ports::outgoing::{
    CheckInRepository, CheckInRepositoryError, NewCheckIn,
};
use crate::modules::mental_health::application::services::response_selector::ResponseSelector;
use crate::modules::mental_health::application::services::scoring;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCheckInError {
    #[error("{0}")]
    Validation(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct CreateCheckInRequest {
    pub user_id: Uuid,
    pub mood: Mood,
    pub stress_level: i16,
    pub sleep_hours: f32,
    pub activities: Vec<String>,
    pub notes: String,
}

impl CreateCheckInRequest {
    pub fn new(
        user_id: Uuid,
        mood: Mood,
        stress_level: i16,
        sleep_hours: f32,
        activities: Vec<String>,
        notes: Option<String>,
    ) -> Result<Self, CreateCheckInError> {
        if !(1..=10).contains(&stress_level) {
            return Err(CreateCheckInError::Validation(
                "Stress level must be between 1 and 10".into(),
            ));
        }

        if !(0.0..=24.0).contains(&sleep_hours) {
            return Err(CreateCheckInError::Validation(
                "Sleep hours must be between 0 and 24".into(),
            ));
        }

        Ok(Self {
            user_id,
            mood,
            stress_level,
            sleep_hours,
            activities,
            notes: notes.unwrap_or_default().trim().to_string(),
        })
    }
}

/// Result of a recorded check-in, including the derived scores and tips
/// the caller shows back to the user.
#[derive(Debug, Clone)]
pub struct CheckInOutcome {
    pub check_in: CheckIn,
    pub wellness_score: i16,
    pub tips: Vec<String>,
    pub emotion: Emotion,
}

#[async_trait]
pub trait ICreateCheckInUseCase: Send + Sync {
    async fn execute(&self, request: CreateCheckInRequest)
        -> Result<CheckInOutcome, CreateCheckInError>;
}

pub struct CreateCheckInUseCase<R>
where
    R: CheckInRepository,
{
    repository: R,
    selector: Arc<dyn ResponseSelector>,
}

impl<R> CreateCheckInUseCase<R>
where
    R: CheckInRepository,
{
    pub fn new(repository: R, selector: Arc<dyn ResponseSelector>) -> Self {
        Self {
            repository,
            selector,
        }
    }
}

#[async_trait]
impl<R> ICreateCheckInUseCase for CreateCheckInUseCase<R>
where
    R: CheckInRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: CreateCheckInRequest,
    ) -> Result<CheckInOutcome, CreateCheckInError> {
        let analysis = scoring::analyze_sentiment(&request.notes);
        let text_stress = scoring::stress_level_from_text(&request.notes);

        let wellness = scoring::wellness_score(
            request.stress_level as u8,
            request.sleep_hours,
            request.mood,
            request.activities.len(),
        );

        let ai_response = scoring::generate_response(
            request.mood,
            request.stress_level as u8,
            analysis.primary_emotion,
            self.selector.as_ref(),
        );

        let tips = scoring::wellness_tips(
            request.stress_level as u8,
            request.sleep_hours,
            request.mood,
        );

        info!(
            user_id = %request.user_id,
            mood = request.mood.as_str(),
            emotion = analysis.primary_emotion.as_str(),
            text_stress,
            wellness_score = wellness,
            "Check-in scored"
        );

        let check_in = self
            .repository
            .create_and_update_user(
                NewCheckIn {
                    user_id: request.user_id,
                    mood: request.mood,
                    stress_level: request.stress_level,
                    sleep_hours: request.sleep_hours,
                    activities: request.activities,
                    notes: request.notes,
                    sentiment_score: analysis.score,
                    ai_response,
                },
                i16::from(wellness),
            )
            .await
            .map_err(|e| match e {
                CheckInRepositoryError::UserNotFound => CreateCheckInError::UserNotFound,
                CheckInRepositoryError::DatabaseError(msg) => {
                    CreateCheckInError::RepositoryError(msg)
                }
            })?;

        Ok(CheckInOutcome {
            check_in,
            wellness_score: i16::from(wellness),
            tips,
            emotion: analysis.primary_emotion,
        })
    }
}
