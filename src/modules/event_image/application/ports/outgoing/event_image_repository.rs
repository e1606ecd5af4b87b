use async_trait::async_trait;
use uuid::Uuid;

use crate::event_image::application::domain::entities::EventImage;
use crate::shared::patch_field::PatchField;

#[derive(Debug, Clone, PartialEq)]
pub struct NewEventImageData {
    pub image_url: String,
    pub caption: Option<String>,
    pub position: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchEventImageData {
    pub image_url: Option<String>,
    pub caption: PatchField<String>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct EventImageWritten {
    pub image: EventImage,
    pub released_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EventImageRepositoryError {
    #[error("Event image not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Reads and writes for `event_images`. The table is small and flat, so
/// the listing lives here rather than behind a separate query port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventImageRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<EventImage>, EventImageRepositoryError>;

    async fn create(&self, data: NewEventImageData)
        -> Result<EventImage, EventImageRepositoryError>;

    async fn patch(
        &self,
        id: Uuid,
        data: PatchEventImageData,
    ) -> Result<EventImageWritten, EventImageRepositoryError>;

    /// Returns the removed row.
    async fn delete(&self, id: Uuid) -> Result<EventImage, EventImageRepositoryError>;
}
