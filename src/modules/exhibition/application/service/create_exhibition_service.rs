use async_trait::async_trait;
use tracing::info;

use crate::exhibition::application::domain::entities::{
    ExhibitionDetail, EXHIBITION_SLUG_FALLBACK_PREFIX,
};
use crate::exhibition::application::ports::incoming::use_cases::{
    CreateExhibitionCommand, CreateExhibitionError, CreateExhibitionUseCase,
};
use crate::exhibition::application::ports::outgoing::exhibition_query::ExhibitionQuery;
use crate::exhibition::application::ports::outgoing::exhibition_repository::{
    CreateExhibitionData, ExhibitionRepository, ExhibitionRepositoryError,
};
use crate::shared::slug::{derive_base_slug, resolve_unique_slug};
use crate::shared::text::{
    check_max_len, clean_urls, non_blank, validate_title, MAX_AUTHOR_LEN, MAX_DATE_LEN,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateExhibitionService<Q, R>
where
    Q: ExhibitionQuery,
    R: ExhibitionRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateExhibitionService<Q, R>
where
    Q: ExhibitionQuery,
    R: ExhibitionRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    async fn unique_slug(
        &self,
        requested: Option<&str>,
        title: &str,
    ) -> Result<String, CreateExhibitionError> {
        let base = derive_base_slug(requested, title, EXHIBITION_SLUG_FALLBACK_PREFIX);

        resolve_unique_slug(base, |candidate| async move {
            self.query.slug_exists(&candidate).await
        })
        .await
        .map_err(|e| CreateExhibitionError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<Q, R> CreateExhibitionUseCase for CreateExhibitionService<Q, R>
where
    Q: ExhibitionQuery + Send + Sync,
    R: ExhibitionRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateExhibitionCommand,
    ) -> Result<ExhibitionDetail, CreateExhibitionError> {
        let title = validate_title(&command.title).map_err(CreateExhibitionError::Validation)?;
        let author = non_blank(command.author);
        let date = non_blank(command.date);
        check_max_len("author", author.as_deref(), MAX_AUTHOR_LEN)
            .and_then(|_| check_max_len("date", date.as_deref(), MAX_DATE_LEN))
            .map_err(CreateExhibitionError::Validation)?;

        let slug = self.unique_slug(command.slug.as_deref(), &title).await?;

        let data = CreateExhibitionData {
            title,
            slug,
            subtitle: non_blank(command.subtitle),
            text: non_blank(command.text),
            main_image: non_blank(command.main_image),
            author,
            date,
            position: command.position,
            images: clean_urls(command.images),
        };

        let written = self.repository.create(data).await.map_err(|e| match e {
            ExhibitionRepositoryError::SlugAlreadyExists => CreateExhibitionError::SlugAlreadyExists,
            ExhibitionRepositoryError::DatabaseError(msg) => {
                CreateExhibitionError::RepositoryError(msg)
            }
            ExhibitionRepositoryError::NotFound => CreateExhibitionError::RepositoryError(
                "unexpected not found while creating exhibition".to_string(),
            ),
        })?;

        info!(
            exhibition_id = %written.exhibition.id,
            slug = %written.exhibition.slug,
            "Exhibition created"
        );

        Ok(ExhibitionDetail {
            exhibition: written.exhibition,
            images: written.images,
        })
    }
}
