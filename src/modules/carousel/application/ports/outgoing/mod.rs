pub mod carousel_query;
pub mod carousel_repository;
