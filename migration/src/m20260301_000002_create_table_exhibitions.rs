use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create exhibitions table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Exhibitions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exhibitions::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Exhibitions::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Exhibitions::Subtitle).text())
                    .col(ColumnDef::new(Exhibitions::Text).text())
                    .col(ColumnDef::new(Exhibitions::MainImage).text())
                    .col(ColumnDef::new(Exhibitions::Author).string_len(200))
                    .col(ColumnDef::new(Exhibitions::Date).string_len(100))
                    .col(
                        ColumnDef::new(Exhibitions::Position)
                            .integer()
                            .not_null()
                            .default(1000)
                            .check(
                                Expr::col(Exhibitions::Position)
                                    .gte(0)
                                    .and(Expr::col(Exhibitions::Position).lte(1000)),
                            ),
                    )
                    .col(ColumnDef::new(Exhibitions::Slug).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Exhibitions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Exhibitions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Global slug uniqueness (case-insensitive)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_exhibitions_slug_unique
                ON exhibitions (lower(slug));
                "#,
            )
            .await?;

        // At most one exhibition is "current" (position 0)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_exhibitions_single_current
                ON exhibitions (position)
                WHERE position = 0;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_exhibitions_position
                ON exhibitions (position DESC);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_exhibitions_updated_at
                BEFORE UPDATE ON exhibitions
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
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_exhibitions_updated_at ON exhibitions;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_exhibitions_slug_unique;
                DROP INDEX IF EXISTS idx_exhibitions_single_current;
                DROP INDEX IF EXISTS idx_exhibitions_position;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Exhibitions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Exhibitions {
    Table,
    Id,
    Title,
    Subtitle,
    Text,
    MainImage,
    Author,
    Date,
    Position,
    Slug,
    CreatedAt,
    UpdatedAt,
}
