use async_trait::async_trait;
use uuid::Uuid;

use crate::carousel::application::domain::entities::{CarouselSlide, SlideDeck};
use crate::carousel::application::ports::outgoing::carousel_repository::PatchSlideData;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateSlideError {
    #[error("{0}")]
    Validation(String),

    #[error("slide not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateSlideUseCase: Send + Sync {
    async fn execute(
        &self,
        deck: SlideDeck,
        id: Uuid,
        data: PatchSlideData,
    ) -> Result<CarouselSlide, UpdateSlideError>;
}
