pub mod event_image_repository_postgres;
pub mod sea_orm_entity;

pub use event_image_repository_postgres::EventImageRepositoryPostgres;
