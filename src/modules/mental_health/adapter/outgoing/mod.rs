pub mod check_in_repository_postgres;
pub mod sea_orm_entity;
