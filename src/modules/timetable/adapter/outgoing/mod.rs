pub mod sea_orm_entity;
pub mod timetable_repository_postgres;
