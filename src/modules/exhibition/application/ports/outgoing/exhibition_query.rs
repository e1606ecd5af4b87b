// src/modules/exhibition/application/ports/outgoing/exhibition_query.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::exhibition::application::domain::entities::{Exhibition, ExhibitionImage};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExhibitionQueryError {
    #[error("Exhibition not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side)
// ──────────────────────────────────────────────────────────
//

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExhibitionQuery: Send + Sync {
    /// Every row, archived included, in display order.
    async fn list_all(&self) -> Result<Vec<Exhibition>, ExhibitionQueryError>;

    /// Rows visible on the public site (archived excluded).
    async fn list_public(&self) -> Result<Vec<Exhibition>, ExhibitionQueryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Exhibition, ExhibitionQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<Exhibition, ExhibitionQueryError>;

    /// Gallery rows ordered by `image_order`.
    async fn list_images(
        &self,
        exhibition_id: Uuid,
    ) -> Result<Vec<ExhibitionImage>, ExhibitionQueryError>;

    async fn slug_exists(&self, slug: &str) -> Result<bool, ExhibitionQueryError>;
}
