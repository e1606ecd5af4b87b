use async_trait::async_trait;
use tracing::info;

use crate::carousel::application::domain::entities::{CarouselSlide, SlideDeck};
use crate::carousel::application::ports::incoming::use_cases::{
    CreateSlideCommand, CreateSlideError, CreateSlideUseCase,
};
use crate::carousel::application::ports::outgoing::carousel_repository::{
    CarouselRepository, NewSlideData,
};
use crate::shared::position::validate_sort_key;
use crate::shared::text::required;

pub struct CreateSlideService<R>
where
    R: CarouselRepository,
{
    repository: R,
}

impl<R> CreateSlideService<R>
where
    R: CarouselRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateSlideUseCase for CreateSlideService<R>
where
    R: CarouselRepository + Send + Sync,
{
    async fn execute(
        &self,
        deck: SlideDeck,
        command: CreateSlideCommand,
    ) -> Result<CarouselSlide, CreateSlideError> {
        let data = NewSlideData {
            image_url: required("image_url", &command.image_url)
                .map_err(CreateSlideError::Validation)?,
            link_url: required("link_url", &command.link_url)
                .map_err(CreateSlideError::Validation)?,
            position: validate_sort_key(command.position.unwrap_or(0))
                .map_err(CreateSlideError::Validation)?,
        };

        let slide = self
            .repository
            .create(deck, data)
            .await
            .map_err(|e| CreateSlideError::RepositoryError(e.to_string()))?;

        info!(deck = deck.label(), slide_id = %slide.id, "Slide created");

        Ok(slide)
    }
}
