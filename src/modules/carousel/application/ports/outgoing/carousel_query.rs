use async_trait::async_trait;

use crate::carousel::application::domain::entities::{CarouselSlide, SlideDeck};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CarouselQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarouselQuery: Send + Sync {
    /// Slides of one deck, `position` ascending then oldest first.
    async fn list(&self, deck: SlideDeck) -> Result<Vec<CarouselSlide>, CarouselQueryError>;
}
