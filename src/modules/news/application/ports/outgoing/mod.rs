pub mod news_query;
pub mod news_repository;
