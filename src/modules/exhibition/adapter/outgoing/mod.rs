pub mod exhibition_query_postgres;
pub mod exhibition_repository_postgres;
pub mod sea_orm_entity;

pub use exhibition_query_postgres::ExhibitionQueryPostgres;
pub use exhibition_repository_postgres::ExhibitionRepositoryPostgres;
