use sea_orm_migration::prelude::*;

use super::m20260301_000002_create_table_exhibitions::Exhibitions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create exhibition_images table (gallery rows)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ExhibitionImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExhibitionImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(ExhibitionImages::ExhibitionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExhibitionImages::Url).text().not_null())
                    .col(
                        ColumnDef::new(ExhibitionImages::ImageOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ExhibitionImages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // FK → exhibitions; gallery rows go with their exhibition
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exhibition_images_exhibition_id")
                            .from(ExhibitionImages::Table, ExhibitionImages::ExhibitionId)
                            .to(Exhibitions::Table, Exhibitions::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_exhibition_images_exhibition_order
                ON exhibition_images (exhibition_id, image_order);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_exhibition_images_exhibition_order")
            .await?;

        manager
            .drop_table(Table::drop().table(ExhibitionImages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ExhibitionImages {
    Table,
    Id,
    ExhibitionId,
    Url,
    ImageOrder,
    CreatedAt,
}
