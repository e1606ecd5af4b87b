use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Desktop and mobile slides live in two independent tables with the same shape.
fn slide_table(table: CarouselTable) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(Slide::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(Slide::ImageUrl).text().not_null())
        .col(ColumnDef::new(Slide::LinkUrl).text().not_null())
        .col(
            ColumnDef::new(Slide::Position)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Slide::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(slide_table(CarouselTable::CarouselSlides))
            .await?;

        manager
            .create_table(slide_table(CarouselTable::CarouselMobileSlides))
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_carousel_slides_position
                ON carousel_slides (position);
                CREATE INDEX IF NOT EXISTS idx_carousel_mobile_slides_position
                ON carousel_mobile_slides (position);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(CarouselTable::CarouselMobileSlides)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CarouselTable::CarouselSlides).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum CarouselTable {
    CarouselSlides,
    CarouselMobileSlides,
}

#[derive(DeriveIden)]
enum Slide {
    Id,
    ImageUrl,
    LinkUrl,
    Position,
    CreatedAt,
}
