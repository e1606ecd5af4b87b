use async_trait::async_trait;
use uuid::Uuid;

use crate::carousel::application::domain::entities::{CarouselSlide, SlideDeck};

#[derive(Debug, Clone, PartialEq)]
pub struct NewSlideData {
    pub image_url: String,
    pub link_url: String,
    pub position: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchSlideData {
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub position: Option<i32>,
}

impl PatchSlideData {
    pub fn is_empty(&self) -> bool {
        self.image_url.is_none() && self.link_url.is_none() && self.position.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct SlideWritten {
    pub slide: CarouselSlide,
    pub released_urls: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SlideDeleted {
    pub id: Uuid,
    pub owned_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CarouselRepositoryError {
    #[error("Slide not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarouselRepository: Send + Sync {
    async fn create(
        &self,
        deck: SlideDeck,
        data: NewSlideData,
    ) -> Result<CarouselSlide, CarouselRepositoryError>;

    async fn patch(
        &self,
        deck: SlideDeck,
        id: Uuid,
        data: PatchSlideData,
    ) -> Result<SlideWritten, CarouselRepositoryError>;

    async fn delete(&self, deck: SlideDeck, id: Uuid)
        -> Result<SlideDeleted, CarouselRepositoryError>;
}
