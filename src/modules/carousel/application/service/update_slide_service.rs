use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::carousel::application::domain::entities::{CarouselSlide, SlideDeck};
use crate::carousel::application::ports::incoming::use_cases::{
    UpdateSlideError, UpdateSlideUseCase,
};
use crate::carousel::application::ports::outgoing::carousel_repository::{
    CarouselRepository, CarouselRepositoryError, PatchSlideData,
};
use crate::multimedia::application::ports::outgoing::MediaCleanup;
use crate::shared::position::validate_sort_key;
use crate::shared::text::required;

pub struct UpdateSlideService<R>
where
    R: CarouselRepository,
{
    repository: R,
    media_cleanup: Arc<dyn MediaCleanup>,
}

impl<R> UpdateSlideService<R>
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

fn normalize(data: PatchSlideData) -> Result<PatchSlideData, String> {
    Ok(PatchSlideData {
        image_url: data
            .image_url
            .map(|v| required("image_url", &v))
            .transpose()?,
        link_url: data.link_url.map(|v| required("link_url", &v)).transpose()?,
        position: data.position.map(validate_sort_key).transpose()?,
    })
}

#[async_trait]
impl<R> UpdateSlideUseCase for UpdateSlideService<R>
where
    R: CarouselRepository + Send + Sync,
{
    async fn execute(
        &self,
        deck: SlideDeck,
        id: Uuid,
        data: PatchSlideData,
    ) -> Result<CarouselSlide, UpdateSlideError> {
        let data = normalize(data).map_err(UpdateSlideError::Validation)?;

        let written = self
            .repository
            .patch(deck, id, data)
            .await
            .map_err(|e| match e {
                CarouselRepositoryError::NotFound => UpdateSlideError::NotFound,
                other => UpdateSlideError::RepositoryError(other.to_string()),
            })?;

        if !written.released_urls.is_empty() {
            info!(deck = deck.label(), slide_id = %id, "Scheduling cleanup of replaced slide image");
            self.media_cleanup.schedule(written.released_urls);
        }

        Ok(written.slide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::application::domain::entities::fixtures::slide;
    use crate::carousel::application::ports::outgoing::carousel_repository::{
        MockCarouselRepository, SlideWritten,
    };
    use crate::tests::support::stubs::RecordingMediaCleanup;

    #[tokio::test]
    async fn test_new_image_schedules_old_one() {
        let mut repo = MockCarouselRepository::new();
        repo.expect_patch()
            .withf(|_, _, d| d.image_url.as_deref() == Some("new.jpg"))
            .returning(|_, _, _| {
                Ok(SlideWritten {
                    slide: slide("new.jpg", 1),
                    released_urls: vec!["old.jpg".into()],
                })
            });

        let cleanup = RecordingMediaCleanup::default();
        let updated = UpdateSlideService::new(repo, Arc::new(cleanup.clone()))
            .execute(
                SlideDeck::Desktop,
                Uuid::new_v4(),
                PatchSlideData {
                    image_url: Some("new.jpg".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.image_url, "new.jpg");
        assert_eq!(cleanup.scheduled(), vec!["old.jpg"]);
    }

    #[tokio::test]
    async fn test_blank_link_is_rejected() {
        let cleanup = RecordingMediaCleanup::default();
        let err = UpdateSlideService::new(MockCarouselRepository::new(), Arc::new(cleanup))
            .execute(
                SlideDeck::Mobile,
                Uuid::new_v4(),
                PatchSlideData {
                    link_url: Some("  ".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, UpdateSlideError::Validation("link_url is required".into()));
    }

    #[tokio::test]
    async fn test_unknown_slide() {
        let mut repo = MockCarouselRepository::new();
        repo.expect_patch()
            .returning(|_, _, _| Err(CarouselRepositoryError::NotFound));

        let cleanup = RecordingMediaCleanup::default();
        let err = UpdateSlideService::new(repo, Arc::new(cleanup))
            .execute(SlideDeck::Desktop, Uuid::new_v4(), PatchSlideData::default())
            .await
            .unwrap_err();

        assert_eq!(err, UpdateSlideError::NotFound);
    }
}
