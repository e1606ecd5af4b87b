// src/modules/news/application/ports/outgoing/news_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::domain::entities::NewsItem;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NewsQueryError {
    #[error("News item not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsQuery: Send + Sync {
    /// Every row, archived included, in display order.
    async fn list_all(&self) -> Result<Vec<NewsItem>, NewsQueryError>;

    /// Rows visible on the public site.
    async fn list_public(&self) -> Result<Vec<NewsItem>, NewsQueryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<NewsItem, NewsQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<NewsItem, NewsQueryError>;

    async fn slug_exists(&self, slug: &str) -> Result<bool, NewsQueryError>;
}
