use async_trait::async_trait;
use uuid::Uuid;

use crate::event_image::application::domain::entities::EventImage;
use crate::event_image::application::ports::outgoing::event_image_repository::PatchEventImageData;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateEventImageError {
    #[error("{0}")]
    Validation(String),

    #[error("event image not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateEventImageUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: PatchEventImageData,
    ) -> Result<EventImage, UpdateEventImageError>;
}
