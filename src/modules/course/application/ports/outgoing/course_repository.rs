use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::course::application::domain::entities::{Assessment, Course};

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub user_id: Uuid,
    pub name: String,
    pub code: String,
    pub instructor: String,
    pub credits: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Fields left as `None` are not touched.
#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub instructor: Option<String>,
    pub credits: Option<i32>,
    pub completion_percentage: Option<i16>,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CourseRepositoryError {
    #[error("Course not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// All lookups are scoped by owner; a course id belonging to another
/// user behaves exactly like a missing one.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, course: NewCourse) -> Result<Course, CourseRepositoryError>;
    async fn list(&self, user_id: Uuid) -> Result<Vec<Course>, CourseRepositoryError>;
    async fn update(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        patch: CoursePatch,
    ) -> Result<Course, CourseRepositoryError>;
    async fn delete(&self, user_id: Uuid, course_id: Uuid) -> Result<(), CourseRepositoryError>;
    async fn add_assessment(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        assessment: Assessment,
    ) -> Result<Course, CourseRepositoryError>;
}
