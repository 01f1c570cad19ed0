mod course_repository;

pub use course_repository::{CoursePatch, CourseRepository, CourseRepositoryError, NewCourse};
