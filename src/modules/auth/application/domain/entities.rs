use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Account record owned by the auth module. `stress_level` and
/// `mental_health_score` are overwritten by every mental-health check-in.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub student_id: Option<String>,
    pub university: String,
    pub department: String,
    pub avatar: Option<String>,
    /// 0-100
    pub stress_level: i16,
    /// 0-100, starts at 100
    pub mental_health_score: i16,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
