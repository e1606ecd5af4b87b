use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::carousel::application::domain::entities::SlideDeck;
use crate::carousel::application::ports::incoming::use_cases::{
    DeleteSlideError, DeleteSlideUseCase,
};
use crate::carousel::application::ports::outgoing::carousel_repository::{
    CarouselRepository, CarouselRepositoryError,
};
use crate::multimedia::application::ports::outgoing::MediaCleanup;

pub struct DeleteSlideService<R>
where
    R: CarouselRepository,
{
    repository: R,
    media_cleanup: Arc<dyn MediaCleanup>,
}

impl<R> DeleteSlideService<R>
where
    R: CarouselRepository,
{
    pub fn new(repository: R, media_cleanup: Arc<dyn MediaCleanup>) -> Self {
        Self {
            repository,
            media_cleanup,
        }
    }
}

#[async_trait]
impl<R> DeleteSlideUseCase for DeleteSlideService<R>
where
    R: CarouselRepository + Send + Sync,
{
    async fn execute(&self, deck: SlideDeck, id: Uuid) -> Result<Uuid, DeleteSlideError> {
        let deleted = self
            .repository
            .delete(deck, id)
            .await
            .map_err(|e| match e {
                CarouselRepositoryError::NotFound => DeleteSlideError::NotFound,
                other => DeleteSlideError::RepositoryError(other.to_string()),
            })?;

        info!(deck = deck.label(), slide_id = %deleted.id, "Slide deleted");
        self.media_cleanup.schedule(deleted.owned_urls);

        Ok(deleted.id)
    }
}
