use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Self-reported mood on a five-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Excellent,
    Good,
    Neutral,
    Poor,
    Terrible,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Excellent => "excellent",
            Mood::Good => "good",
            Mood::Neutral => "neutral",
            Mood::Poor => "poor",
            Mood::Terrible => "terrible",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "excellent" => Some(Mood::Excellent),
            "good" => Some(Mood::Good),
            "neutral" => Some(Mood::Neutral),
            "poor" => Some(Mood::Poor),
            "terrible" => Some(Mood::Terrible),
            _ => None,
        }
    }
}

/// Keyword category with the most matches in the check-in notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Neutral => "neutral",
        }
    }
}

/// One recorded self-report event.
#[derive(Debug, Clone)]
pub struct CheckIn {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood: Mood,
    /// 1-10
    pub stress_level: i16,
    pub sleep_hours: f32,
    pub activities: Vec<String>,
    pub notes: String,
    /// -1..1, derived from the notes
    pub sentiment_score: f32,
    pub ai_response: String,
    pub response_given: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
