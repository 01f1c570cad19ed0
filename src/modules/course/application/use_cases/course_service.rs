use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::course::application::domain::entities::{Assessment, Course};
use crate::modules::course::application::ports::outgoing::{
    CoursePatch, CourseRepository, CourseRepositoryError, NewCourse,
};

pub const DEFAULT_CREDITS: i32 = 3;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CourseError {
    #[error("{0}")]
    Validation(String),

    #[error("Course not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CourseRepositoryError> for CourseError {
    fn from(e: CourseRepositoryError) -> Self {
        match e {
            CourseRepositoryError::NotFound => CourseError::NotFound,
            CourseRepositoryError::DatabaseError(msg) => CourseError::RepositoryError(msg),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourseRequest {
    pub user_id: Uuid,
    pub name: String,
    pub code: String,
    pub instructor: String,
    pub credits: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl CreateCourseRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: Uuid,
        name: String,
        code: String,
        instructor: Option<String>,
        credits: Option<i32>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, CourseError> {
        let name = name.trim().to_string();
        let code = code.trim().to_string();

        if name.is_empty() {
            return Err(CourseError::Validation("Course name is required".into()));
        }
        if code.is_empty() {
            return Err(CourseError::Validation("Course code is required".into()));
        }

        let credits = credits.unwrap_or(DEFAULT_CREDITS);
        if credits < 0 {
            return Err(CourseError::Validation(
                "Credits must not be negative".into(),
            ));
        }

        Ok(Self {
            user_id,
            name,
            code,
            instructor: instructor.unwrap_or_default(),
            credits,
            start_date,
            end_date,
        })
    }
}

/// Aggregates over all of a user's courses. The completion average is
/// pre-formatted with two decimals.
#[derive(Debug, Clone)]
pub struct CourseStats {
    pub total_courses: u64,
    pub average_completion: String,
    pub courses_with_grades: u64,
    pub total_credits: i64,
}

#[async_trait]
pub trait ICourseUseCases: Send + Sync {
    async fn create(&self, request: CreateCourseRequest) -> Result<Course, CourseError>;
    async fn list(&self, user_id: Uuid) -> Result<Vec<Course>, CourseError>;
    async fn update(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        patch: CoursePatch,
    ) -> Result<Course, CourseError>;
    async fn delete(&self, user_id: Uuid, course_id: Uuid) -> Result<(), CourseError>;
    async fn add_assessment(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        assessment: Assessment,
    ) -> Result<Course, CourseError>;
    async fn stats(&self, user_id: Uuid) -> Result<CourseStats, CourseError>;
}

pub struct CourseService<R>
where
    R: CourseRepository,
{
    repository: R,
}

impl<R> CourseService<R>
where
    R: CourseRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ICourseUseCases for CourseService<R>
where
    R: CourseRepository + Send + Sync,
{
    async fn create(&self, request: CreateCourseRequest) -> Result<Course, CourseError> {
        let course = self
            .repository
            .create(NewCourse {
                user_id: request.user_id,
                name: request.name,
                code: request.code,
                instructor: request.instructor,
                credits: request.credits,
                start_date: request.start_date,
                end_date: request.end_date,
            })
            .await?;

        Ok(course)
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<Course>, CourseError> {
        Ok(self.repository.list(user_id).await?)
    }

    async fn update(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        patch: CoursePatch,
    ) -> Result<Course, CourseError> {
        if let Some(completion) = patch.completion_percentage {
            if !(0..=100).contains(&completion) {
                return Err(CourseError::Validation(
                    "Completion percentage must be between 0 and 100".into(),
                ));
            }
        }

        Ok(self.repository.update(user_id, course_id, patch).await?)
    }

    async fn delete(&self, user_id: Uuid, course_id: Uuid) -> Result<(), CourseError> {
        Ok(self.repository.delete(user_id, course_id).await?)
    }

    async fn add_assessment(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        assessment: Assessment,
    ) -> Result<Course, CourseError> {
        if assessment.name.trim().is_empty() {
            return Err(CourseError::Validation(
                "Assessment name is required".into(),
            ));
        }

        Ok(self
            .repository
            .add_assessment(user_id, course_id, assessment)
            .await?)
    }

    async fn stats(&self, user_id: Uuid) -> Result<CourseStats, CourseError> {
        let courses = self.repository.list(user_id).await?;

        let total = courses.len() as u64;
        let average_completion = if courses.is_empty() {
            "0.00".to_string()
        } else {
            let sum: f64 = courses
                .iter()
                .map(|c| f64::from(c.completion_percentage))
                .sum();
            format!("{:.2}", sum / courses.len() as f64)
        };

        Ok(CourseStats {
            total_courses: total,
            average_completion,
            courses_with_grades: courses.iter().filter(|c| c.grade.is_some()).count() as u64,
            total_credits: courses.iter().map(|c| i64::from(c.credits)).sum(),
        })
    }
}
