use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Timetable::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Timetable::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Timetable::UserId).uuid().not_null())
                    .col(ColumnDef::new(Timetable::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(Timetable::DayOfWeek)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Timetable::StartTime)
                            .string_len(5)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Timetable::EndTime).string_len(5).not_null())
                    .col(
                        ColumnDef::new(Timetable::Location)
                            .string_len(150)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Timetable::Instructor)
                            .string_len(150)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Timetable::ClassType)
                            .string_len(20)
                            .not_null()
                            .default("lecture"),
                    )
                    .col(
                        ColumnDef::new(Timetable::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Timetable::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timetable_user_id")
                            .from(Timetable::Table, Timetable::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timetable_course_id")
                            .from(Timetable::Table, Timetable::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX idx_timetable_user_day ON timetable (user_id, day_of_week, start_time)",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_timetable_updated_at
                BEFORE UPDATE ON timetable
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_timetable_updated_at ON timetable")
            .await?;

        manager
            .drop_table(Table::drop().table(Timetable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Timetable {
    Table,
    Id,
    UserId,
    CourseId,
    DayOfWeek,
    StartTime,
    EndTime,
    Location,
    Instructor,
    ClassType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
}
