use async_trait::async_trait;

use crate::carousel::application::domain::entities::{CarouselSlide, SlideDeck};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetSlidesError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSlidesUseCase: Send + Sync {
    async fn execute(&self, deck: SlideDeck) -> Result<Vec<CarouselSlide>, GetSlidesError>;
}
