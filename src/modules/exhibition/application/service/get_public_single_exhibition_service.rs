use async_trait::async_trait;

use crate::exhibition::application::domain::entities::PublicExhibitionDetail;
use crate::exhibition::application::ports::incoming::use_cases::{
    GetPublicSingleExhibitionError, GetPublicSingleExhibitionUseCase,
};
use crate::exhibition::application::ports::outgoing::exhibition_query::{
    ExhibitionQuery, ExhibitionQueryError,
};

pub struct GetPublicSingleExhibitionService<Q>
where
    Q: ExhibitionQuery,
{
    query: Q,
}

impl<Q> GetPublicSingleExhibitionService<Q>
where
    Q: ExhibitionQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn map_query_error(e: ExhibitionQueryError) -> GetPublicSingleExhibitionError {
    match e {
        ExhibitionQueryError::NotFound => GetPublicSingleExhibitionError::NotFound,
        ExhibitionQueryError::DatabaseError(msg) => {
            GetPublicSingleExhibitionError::RepositoryError(msg)
        }
    }
}

#[async_trait]
impl<Q> GetPublicSingleExhibitionUseCase for GetPublicSingleExhibitionService<Q>
where
    Q: ExhibitionQuery + Send + Sync,
{
    async fn execute(
        &self,
        slug: &str,
    ) -> Result<PublicExhibitionDetail, GetPublicSingleExhibitionError> {
        let exhibition = self
            .query
            .get_by_slug(slug)
            .await
            .map_err(map_query_error)?;

        // Archived pages stay hidden from direct links.
        if exhibition.position.is_archived() {
            return Err(GetPublicSingleExhibitionError::NotFound);
        }

        let gallery = self
            .query
            .list_images(exhibition.id)
            .await
            .map_err(map_query_error)?;

        Ok(PublicExhibitionDetail::new(exhibition, gallery))
    }
}
