use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(EventImages::ImageUrl).text().not_null())
                    .col(ColumnDef::new(EventImages::Caption).text())
                    .col(
                        ColumnDef::new(EventImages::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(EventImages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventImages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventImages {
    Table,
    Id,
    ImageUrl,
    Caption,
    Position,
    CreatedAt,
}
