use async_trait::async_trait;

use crate::carousel::application::domain::entities::{CarouselSlide, SlideDeck};
use crate::carousel::application::ports::incoming::use_cases::{GetSlidesError, GetSlidesUseCase};
use crate::carousel::application::ports::outgoing::carousel_query::CarouselQuery;

pub struct GetSlidesService<Q>
where
    Q: CarouselQuery,
{
    query: Q,
}

impl<Q> GetSlidesService<Q>
where
    Q: CarouselQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSlidesUseCase for GetSlidesService<Q>
where
    Q: CarouselQuery + Send + Sync,
{
    async fn execute(&self, deck: SlideDeck) -> Result<Vec<CarouselSlide>, GetSlidesError> {
        self.query
            .list(deck)
            .await
            .map_err(|e| GetSlidesError::RepositoryError(e.to_string()))
    }
}
