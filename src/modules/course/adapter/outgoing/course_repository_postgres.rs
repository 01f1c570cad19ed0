use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::course::adapter::outgoing::sea_orm_entity::courses::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::course::application::domain::entities::{Assessment, Course};
use crate::modules::course::application::ports::outgoing::{
    CoursePatch, CourseRepository, CourseRepositoryError, NewCourse,
};

#[derive(Clone)]
pub struct CourseRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CourseRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepository for CourseRepositoryPostgres {
    async fn create(&self, course: NewCourse) -> Result<Course, CourseRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(course.user_id),
            name: Set(course.name),
            code: Set(course.code),
            instructor: Set(course.instructor),
            credits: Set(course.credits),
            grade: Set(None),
            completion_percentage: Set(0),
            assessments: Set(serde_json::json!([])),
            start_date: Set(course.start_date),
            end_date: Set(course.end_date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_course(result)
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<Course>, CourseRepositoryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.into_iter().map(model_to_course).collect()
    }

    async fn update(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        patch: CoursePatch,
    ) -> Result<Course, CourseRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(name) = patch.name {
            model.name = Set(name.trim().to_string());
        }
        if let Some(code) = patch.code {
            model.code = Set(code.trim().to_string());
        }
        if let Some(instructor) = patch.instructor {
            model.instructor = Set(instructor);
        }
        if let Some(credits) = patch.credits {
            model.credits = Set(credits);
        }
        if let Some(completion) = patch.completion_percentage {
            model.completion_percentage = Set(completion);
        }
        if let Some(grade) = patch.grade {
            model.grade = Set(Some(grade));
        }

        let has_changes = model.name.is_set()
            || model.code.is_set()
            || model.instructor.is_set()
            || model.credits.is_set()
            || model.completion_percentage.is_set()
            || model.grade.is_set();

        if !has_changes {
            return self.find_owned(user_id, course_id).await;
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(course_id))
            .filter(Column::UserId.eq(user_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(CourseRepositoryError::NotFound)?;

        model_to_course(result)
    }

    async fn delete(&self, user_id: Uuid, course_id: Uuid) -> Result<(), CourseRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(course_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CourseRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn add_assessment(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        assessment: Assessment,
    ) -> Result<Course, CourseRepositoryError> {
        let existing = self.find_owned(user_id, course_id).await?;

        let mut assessments = existing.assessments;
        assessments.push(assessment);

        let json = serde_json::to_value(&assessments)
            .map_err(|e| CourseRepositoryError::DatabaseError(e.to_string()))?;

        let mut model = <ActiveModel as Default>::default();
        model.assessments = Set(json);

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(course_id))
            .filter(Column::UserId.eq(user_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(CourseRepositoryError::NotFound)?;

        model_to_course(result)
    }
}

impl CourseRepositoryPostgres {
    async fn find_owned(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Course, CourseRepositoryError> {
        let found = Entity::find()
            .filter(Column::Id.eq(course_id))
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CourseRepositoryError::NotFound)?;

        model_to_course(found)
    }
}

fn model_to_course(model: courses::Model) -> Result<Course, CourseRepositoryError> {
    let assessments: Vec<Assessment> = serde_json::from_value(model.assessments)
        .map_err(|e| CourseRepositoryError::DatabaseError(e.to_string()))?;

    Ok(Course {
        id: model.id,
        user_id: model.user_id,
        name: model.name,
        code: model.code,
        instructor: model.instructor,
        credits: model.credits,
        grade: model.grade,
        completion_percentage: model.completion_percentage,
        assessments,
        start_date: model.start_date,
        end_date: model.end_date,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> CourseRepositoryError {
    CourseRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn mock_course_model(user_id: Uuid) -> courses::Model {
        let now = Utc::now().fixed_offset();
        courses::Model {
            id: Uuid::new_v4(),
            user_id,
            name: "Algorithms".to_string(),
            code: "CS201".to_string(),
            instructor: "Dr. Ada".to_string(),
            credits: 3,
            grade: None,
            completion_percentage: 40,
            assessments: serde_json::json!([
                {"name": "Quiz 1", "type": "quiz", "dueDate": null,
                 "marks": 8.0, "totalMarks": 10.0, "completed": true}
            ]),
            start_date: None,
            end_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn list_maps_assessments_from_json() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![mock_course_model(user_id)]])
            .into_connection();

        let repo = CourseRepositoryPostgres::new(Arc::new(db));
        let courses = repo.list(user_id).await.unwrap();

        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].assessments.len(), 1);
        assert_eq!(courses[0].assessments[0].name, "Quiz 1");
        assert!(courses[0].assessments[0].completed);
    }

    #[tokio::test]
    async fn delete_zero_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = CourseRepositoryPostgres::new(Arc::new(db));
        let err = repo.delete(Uuid::new_v4(), Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, CourseRepositoryError::NotFound));
    }
}
