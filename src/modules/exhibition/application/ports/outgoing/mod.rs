pub mod exhibition_query;
pub mod exhibition_repository;
