use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::attendance::application::domain::entities::{
    AttendanceRecord, AttendanceStatus,
};

#[derive(Debug, Clone)]
pub struct NewAttendance {
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub remarks: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AttendanceRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Whether the course exists and belongs to the user.
    async fn course_exists(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<bool, AttendanceRepositoryError>;

    async fn mark(
        &self,
        attendance: NewAttendance,
    ) -> Result<AttendanceRecord, AttendanceRepositoryError>;

    /// The user's records for one course, newest date first.
    async fn list_for_course(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Vec<AttendanceRecord>, AttendanceRepositoryError>;

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AttendanceRecord>, AttendanceRepositoryError>;
}
