use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::exhibition::application::domain::entities::ExhibitionDetail;
use crate::exhibition::application::ports::incoming::use_cases::{
    UpdateExhibitionError, UpdateExhibitionUseCase,
};
use crate::exhibition::application::ports::outgoing::exhibition_repository::{
    ExhibitionRepository, ExhibitionRepositoryError, PatchExhibitionData,
};
use crate::multimedia::application::ports::outgoing::MediaCleanup;
use crate::shared::text::{
    check_max_len, clean_urls, non_blank_patch, validate_title, MAX_AUTHOR_LEN, MAX_DATE_LEN,
};

pub struct UpdateExhibitionService<R>
where
    R: ExhibitionRepository,
{
    repository: R,
    media_cleanup: Arc<dyn MediaCleanup>,
}

impl<R> UpdateExhibitionService<R>
where
    R: ExhibitionRepository,
{
    pub fn new(repository: R, media_cleanup: Arc<dyn MediaCleanup>) -> Self {
        Self {
            repository,
            media_cleanup,
        }
    }
}

fn normalize(data: PatchExhibitionData) -> Result<PatchExhibitionData, UpdateExhibitionError> {
    let title = match data.title {
        Some(title) => Some(validate_title(&title).map_err(UpdateExhibitionError::Validation)?),
        None => None,
    };
    let author = non_blank_patch(data.author);
    let date = non_blank_patch(data.date);
    check_max_len("author", author.as_value().map(String::as_str), MAX_AUTHOR_LEN)
        .and_then(|_| check_max_len("date", date.as_value().map(String::as_str), MAX_DATE_LEN))
        .map_err(UpdateExhibitionError::Validation)?;

    Ok(PatchExhibitionData {
        title,
        subtitle: non_blank_patch(data.subtitle),
        text: non_blank_patch(data.text),
        main_image: non_blank_patch(data.main_image),
        author,
        date,
        position: data.position,
        images: data.images.map(clean_urls),
    })
}

#[async_trait]
impl<R> UpdateExhibitionUseCase for UpdateExhibitionService<R>
where
    R: ExhibitionRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: PatchExhibitionData,
    ) -> Result<ExhibitionDetail, UpdateExhibitionError> {
        let data = normalize(data)?;

        let written = self.repository.patch(id, data).await.map_err(|e| match e {
            ExhibitionRepositoryError::NotFound => UpdateExhibitionError::NotFound,
            other => UpdateExhibitionError::RepositoryError(other.to_string()),
        })?;

        if !written.released_urls.is_empty() {
            info!(
                exhibition_id = %id,
                count = written.released_urls.len(),
                "Scheduling cleanup of replaced media"
            );
            self.media_cleanup.schedule(written.released_urls);
        }

        Ok(ExhibitionDetail {
            exhibition: written.exhibition,
            images: written.images,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::exhibition::application::domain::entities::fixtures::exhibition;
    use crate::exhibition::application::ports::outgoing::exhibition_repository::{
        ExhibitionWritten, MockExhibitionRepository,
    };
    use crate::shared::patch_field::PatchField;
    use crate::shared::position::Position;
    use crate::tests::support::stubs::RecordingMediaCleanup;

    const URL_A: &str = "https://res.cloudinary.com/demo/image/upload/v1/gallery/a.jpg";
    const URL_B: &str = "https://res.cloudinary.com/demo/image/upload/v1/gallery/b.jpg";

    #[tokio::test]
    async fn test_main_image_swap_schedules_old_url() {
        let mut repo = MockExhibitionRepository::new();
        repo.expect_patch()
            .withf(|_, d| d.main_image == PatchField::Value(URL_B.to_string()))
            .times(1)
            .returning(|_, _| {
                let mut e = exhibition("Show", Position::Current);
                e.main_image = Some(URL_B.to_string());
                Ok(ExhibitionWritten {
                    exhibition: e,
                    images: vec![],
                    released_urls: vec![URL_A.to_string()],
                })
            });

        let cleanup = RecordingMediaCleanup::default();
        let service = UpdateExhibitionService::new(repo, Arc::new(cleanup.clone()));

        let detail = service
            .execute(
                Uuid::new_v4(),
                PatchExhibitionData {
                    main_image: PatchField::Value(URL_B.to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(detail.exhibition.main_image.as_deref(), Some(URL_B));
        assert_eq!(cleanup.scheduled(), vec![URL_A.to_string()]);
    }

    #[tokio::test]
    async fn test_nothing_released_schedules_nothing() {
        let mut repo = MockExhibitionRepository::new();
        repo.expect_patch().returning(|_, _| {
            Ok(ExhibitionWritten {
                exhibition: exhibition("Show", Position::Past(2)),
                images: vec![],
                released_urls: vec![],
            })
        });

        let cleanup = RecordingMediaCleanup::default();
        let service = UpdateExhibitionService::new(repo, Arc::new(cleanup.clone()));

        service
            .execute(Uuid::new_v4(), PatchExhibitionData::default())
            .await
            .unwrap();

        assert!(cleanup.batches().is_empty());
    }

    #[tokio::test]
    async fn test_blank_title_is_validation_error() {
        let repo = MockExhibitionRepository::new();
        let service =
            UpdateExhibitionService::new(repo, Arc::new(RecordingMediaCleanup::default()));

        let err = service
            .execute(
                Uuid::new_v4(),
                PatchExhibitionData {
                    title: Some("  ".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, UpdateExhibitionError::Validation(_)));
    }

    #[tokio::test]
    async fn test_blank_subtitle_clears_column() {
        let mut repo = MockExhibitionRepository::new();
        repo.expect_patch()
            .withf(|_, d| d.subtitle == PatchField::Null && d.text == PatchField::Unset)
            .returning(|_, _| {
                Ok(ExhibitionWritten {
                    exhibition: exhibition("Show", Position::Past(2)),
                    images: vec![],
                    released_urls: vec![],
                })
            });

        let service =
            UpdateExhibitionService::new(repo, Arc::new(RecordingMediaCleanup::default()));

        let result = service
            .execute(
                Uuid::new_v4(),
                PatchExhibitionData {
                    subtitle: PatchField::Value("".into()),
                    ..Default::default()
                },
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_not_found_is_mapped() {
        let mut repo = MockExhibitionRepository::new();
        repo.expect_patch()
            .returning(|_, _| Err(ExhibitionRepositoryError::NotFound));

        let cleanup = RecordingMediaCleanup::default();
        let service = UpdateExhibitionService::new(repo, Arc::new(cleanup.clone()));

        let err = service
            .execute(Uuid::new_v4(), PatchExhibitionData::default())
            .await
            .unwrap_err();

        assert_eq!(err, UpdateExhibitionError::NotFound);
        assert!(cleanup.batches().is_empty());
    }
}
