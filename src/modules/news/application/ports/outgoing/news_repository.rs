// src/modules/news/application/ports/outgoing/news_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::domain::entities::NewsItem;
use crate::shared::patch_field::PatchField;
use crate::shared::position::Position;

//
// ──────────────────────────────────────────────────────────
// Write models
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateNewsData {
    pub title: String,
    pub slug: String,
    pub subtitle: Option<String>,
    pub text: Option<String>,
    pub main_image: Option<String>,
    pub date: Option<String>,
    pub position: Position,
}

#[derive(Debug, Clone, Default)]
pub struct PatchNewsData {
    pub title: Option<String>,
    pub subtitle: PatchField<String>,
    pub text: PatchField<String>,
    pub main_image: PatchField<String>,
    pub date: PatchField<String>,
    pub position: Option<Position>,
}

/// A written row plus the media it stopped referencing.
#[derive(Debug, Clone)]
pub struct NewsWritten {
    pub item: NewsItem,
    pub released_urls: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NewsDeleted {
    pub id: Uuid,
    pub owned_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NewsRepositoryError {
    #[error("News item not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (write side)
// ──────────────────────────────────────────────────────────
//

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Inserts the row; a `Current` item demotes the previous headline in
    /// the same transaction.
    async fn create(&self, data: CreateNewsData) -> Result<NewsWritten, NewsRepositoryError>;

    async fn patch(
        &self,
        id: Uuid,
        data: PatchNewsData,
    ) -> Result<NewsWritten, NewsRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<NewsDeleted, NewsRepositoryError>;
}
