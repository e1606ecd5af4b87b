use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(News::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(News::Title).string_len(200).not_null())
                    .col(ColumnDef::new(News::Subtitle).text())
                    .col(ColumnDef::new(News::Text).text())
                    .col(ColumnDef::new(News::MainImage).text())
                    .col(ColumnDef::new(News::Date).string_len(100))
                    .col(
                        ColumnDef::new(News::Position)
                            .integer()
                            .not_null()
                            .default(1000)
                            .check(
                                Expr::col(News::Position)
                                    .gte(0)
                                    .and(Expr::col(News::Position).lte(1000)),
                            ),
                    )
                    .col(ColumnDef::new(News::Slug).string_len(200).not_null())
                    .col(
                        ColumnDef::new(News::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(News::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_news_slug_unique
                ON news (lower(slug));
                "#,
            )
            .await?;

        // Single headline item
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_news_single_headline
                ON news (position)
                WHERE position = 0;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_news_updated_at
                BEFORE UPDATE ON news
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
                DROP TRIGGER IF EXISTS update_news_updated_at ON news;
                DROP INDEX IF EXISTS idx_news_slug_unique;
                DROP INDEX IF EXISTS idx_news_single_headline;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum News {
    Table,
    Id,
    Title,
    Subtitle,
    Text,
    MainImage,
    Date,
    Position,
    Slug,
    CreatedAt,
    UpdatedAt,
}
