pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_updated_at_function;
mod m20260301_000002_create_table_exhibitions;
mod m20260301_000003_create_table_exhibition_images;
mod m20260301_000004_create_table_news;
mod m20260301_000005_create_table_carousel_slides;
mod m20260301_000006_create_table_event_images;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_updated_at_function::Migration),
            Box::new(m20260301_000002_create_table_exhibitions::Migration),
            Box::new(m20260301_000003_create_table_exhibition_images::Migration),
            Box::new(m20260301_000004_create_table_news::Migration),
            Box::new(m20260301_000005_create_table_carousel_slides::Migration),
            Box::new(m20260301_000006_create_table_event_images::Migration),
        ]
    }
}
