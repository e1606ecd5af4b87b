pub mod carousel_query_postgres;
pub mod carousel_repository_postgres;
mod slide_row;

pub use carousel_query_postgres::CarouselQueryPostgres;
pub use carousel_repository_postgres::CarouselRepositoryPostgres;
