use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CheckIns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CheckIns::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CheckIns::UserId).uuid().not_null())
                    .col(ColumnDef::new(CheckIns::Mood).string_len(10).not_null())
                    .col(
                        ColumnDef::new(CheckIns::StressLevel)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CheckIns::SleepHours)
                            .float()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(CheckIns::Activities).json_binary().not_null())
                    .col(
                        ColumnDef::new(CheckIns::Notes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(CheckIns::SentimentScore)
                            .float()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(CheckIns::AiResponse)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(CheckIns::ResponseGiven)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CheckIns::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CheckIns::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_check_ins_user_id")
                            .from(CheckIns::Table, CheckIns::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // History is read newest-first with limit/skip
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX idx_check_ins_user_created ON check_ins (user_id, created_at DESC)",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_check_ins_updated_at
                BEFORE UPDATE ON check_ins
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_check_ins_updated_at ON check_ins")
            .await?;

        manager
            .drop_table(Table::drop().table(CheckIns::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CheckIns {
    Table,
    Id,
    UserId,
    Mood,
    StressLevel,
    SleepHours,
    Activities,
    Notes,
    SentimentScore,
    AiResponse,
    ResponseGiven,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
