// src/modules/exhibition/application/ports/outgoing/exhibition_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::exhibition::application::domain::entities::{Exhibition, ExhibitionImage};
use crate::shared::patch_field::PatchField;
use crate::shared::position::Position;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateExhibitionData {
    pub title: String,
    /// Already normalized and checked for uniqueness; immutable afterwards.
    pub slug: String,
    pub subtitle: Option<String>,
    pub text: Option<String>,
    pub main_image: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub position: Position,
    /// Gallery URLs; `image_order` is the list index.
    pub images: Vec<String>,
}

/// Partial update:
/// - `title` / `position`: `None` keeps the stored value
/// - nullable columns: `Unset` keeps, `Null` clears, `Value` replaces
/// - `images`: `Some` replaces the whole gallery in the same transaction
#[derive(Debug, Clone, Default)]
pub struct PatchExhibitionData {
    pub title: Option<String>,
    pub subtitle: PatchField<String>,
    pub text: PatchField<String>,
    pub main_image: PatchField<String>,
    pub author: PatchField<String>,
    pub date: PatchField<String>,
    pub position: Option<Position>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct ExhibitionWritten {
    pub exhibition: Exhibition,
    pub images: Vec<ExhibitionImage>,
    /// URLs the row referenced before the write and no longer does.
    pub released_urls: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GalleryReplaced {
    pub images: Vec<ExhibitionImage>,
    pub released_urls: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ExhibitionDeleted {
    pub id: Uuid,
    /// Main image plus every gallery URL the deleted row owned.
    pub owned_urls: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExhibitionRepositoryError {
    #[error("Exhibition not found")]
    NotFound,

    /// Unique index on `lower(slug)` hit by a concurrent insert.
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (write side)
// ──────────────────────────────────────────────────────────
// Every method runs in one transaction. Writing `Position::Current`
// demotes the previous holder to `Archived` in that same transaction.
//

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExhibitionRepository: Send + Sync {
    async fn create(
        &self,
        data: CreateExhibitionData,
    ) -> Result<ExhibitionWritten, ExhibitionRepositoryError>;

    async fn patch(
        &self,
        id: Uuid,
        data: PatchExhibitionData,
    ) -> Result<ExhibitionWritten, ExhibitionRepositoryError>;

    async fn replace_images(
        &self,
        id: Uuid,
        urls: Vec<String>,
    ) -> Result<GalleryReplaced, ExhibitionRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<ExhibitionDeleted, ExhibitionRepositoryError>;
}
