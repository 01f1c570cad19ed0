use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::attendance::application::domain::entities::{
    AttendanceRecord, AttendanceStatus,
};
use crate::modules::attendance::application::ports::outgoing::{
    AttendanceRepository, AttendanceRepositoryError, NewAttendance,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AttendanceError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AttendanceRepositoryError> for AttendanceError {
    fn from(e: AttendanceRepositoryError) -> Self {
        match e {
            AttendanceRepositoryError::DatabaseError(msg) => {
                AttendanceError::RepositoryError(msg)
            }
        }
    }
}

/// Per-course breakdown with a pre-formatted percentage of sessions
/// marked present.
#[derive(Debug, Clone)]
pub struct AttendanceStats {
    pub total: u64,
    pub present: u64,
    pub absent: u64,
    pub late: u64,
    pub excused: u64,
    pub attendance_percentage: String,
}

#[async_trait]
pub trait IAttendanceUseCases: Send + Sync {
    async fn mark(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        date: NaiveDate,
        status: AttendanceStatus,
        remarks: Option<String>,
    ) -> Result<AttendanceRecord, AttendanceError>;

    async fn list(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Vec<AttendanceRecord>, AttendanceError>;

    async fn course_stats(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<AttendanceStats, AttendanceError>;

    async fn overall_stats(&self, user_id: Uuid) -> Result<AttendanceStats, AttendanceError>;
}

pub struct AttendanceService<R>
where
    R: AttendanceRepository,
{
    repository: R,
}

impl<R> AttendanceService<R>
where
    R: AttendanceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn tally(records: &[AttendanceRecord]) -> AttendanceStats {
    let count = |status: AttendanceStatus| -> u64 {
        records.iter().filter(|r| r.status == status).count() as u64
    };

    let total = records.len() as u64;
    let present = count(AttendanceStatus::Present);

    let attendance_percentage = if total > 0 {
        format!("{:.2}", present as f64 / total as f64 * 100.0)
    } else {
        "0.00".to_string()
    };

    AttendanceStats {
        total,
        present,
        absent: count(AttendanceStatus::Absent),
        late: count(AttendanceStatus::Late),
        excused: count(AttendanceStatus::Excused),
        attendance_percentage,
    }
}

#[async_trait]
impl<R> IAttendanceUseCases for AttendanceService<R>
where
    R: AttendanceRepository + Send + Sync,
{
    async fn mark(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        date: NaiveDate,
        status: AttendanceStatus,
        remarks: Option<String>,
    ) -> Result<AttendanceRecord, AttendanceError> {
        if !self.repository.course_exists(user_id, course_id).await? {
            return Err(AttendanceError::CourseNotFound);
        }

        let record = self
            .repository
            .mark(NewAttendance {
                user_id,
                course_id,
                date,
                status,
                remarks: remarks.unwrap_or_default(),
            })
            .await?;

        Ok(record)
    }

    async fn list(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Vec<AttendanceRecord>, AttendanceError> {
        Ok(self.repository.list_for_course(user_id, course_id).await?)
    }

    async fn course_stats(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<AttendanceStats, AttendanceError> {
        let records = self.repository.list_for_course(user_id, course_id).await?;
        Ok(tally(&records))
    }

    async fn overall_stats(&self, user_id: Uuid) -> Result<AttendanceStats, AttendanceError> {
        let records = self.repository.list_for_user(user_id).await?;
        Ok(tally(&records))
    }
}
