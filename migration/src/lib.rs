pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_users_table;
mod m20250901_000002_create_courses_table;
mod m20250901_000003_create_attendance_table;
mod m20250901_000004_create_timetable_table;
mod m20250901_000005_create_reminders_table;
mod m20250901_000006_create_check_ins_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_users_table::Migration),
            Box::new(m20250901_000002_create_courses_table::Migration),
            Box::new(m20250901_000003_create_attendance_table::Migration),
            Box::new(m20250901_000004_create_timetable_table::Migration),
            Box::new(m20250901_000005_create_reminders_table::Migration),
            Box::new(m20250901_000006_create_check_ins_table::Migration),
        ]
    }
}
