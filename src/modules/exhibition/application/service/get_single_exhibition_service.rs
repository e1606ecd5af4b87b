use async_trait::async_trait;
use uuid::Uuid;

use crate::exhibition::application::domain::entities::ExhibitionDetail;
use crate::exhibition::application::ports::incoming::use_cases::{
    GetSingleExhibitionError, GetSingleExhibitionUseCase,
};
use crate::exhibition::application::ports::outgoing::exhibition_query::{
    ExhibitionQuery, ExhibitionQueryError,
};

pub struct GetSingleExhibitionService<Q>
where
    Q: ExhibitionQuery,
{
    query: Q,
}

impl<Q> GetSingleExhibitionService<Q>
where
    Q: ExhibitionQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn map_query_error(e: ExhibitionQueryError) -> GetSingleExhibitionError {
    match e {
        ExhibitionQueryError::NotFound => GetSingleExhibitionError::NotFound,
        ExhibitionQueryError::DatabaseError(msg) => GetSingleExhibitionError::RepositoryError(msg),
    }
}

#[async_trait]
impl<Q> GetSingleExhibitionUseCase for GetSingleExhibitionService<Q>
where
    Q: ExhibitionQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<ExhibitionDetail, GetSingleExhibitionError> {
        let exhibition = self.query.get_by_id(id).await.map_err(map_query_error)?;
        let images = self.query.list_images(id).await.map_err(map_query_error)?;

        Ok(ExhibitionDetail { exhibition, images })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::exhibition::application::domain::entities::fixtures::{exhibition, gallery_image};
    use crate::exhibition::application::ports::outgoing::exhibition_query::MockExhibitionQuery;
    use crate::shared::position::Position;

    #[tokio::test]
    async fn test_returns_row_with_gallery() {
        let mut query = MockExhibitionQuery::new();
        query
            .expect_get_by_id()
            .returning(|_| Ok(exhibition("Archived show", Position::Archived)));
        query
            .expect_list_images()
            .returning(|id| Ok(vec![gallery_image(id, "a.jpg", 0)]));

        let detail = GetSingleExhibitionService::new(query)
            .execute(Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(detail.exhibition.position, Position::Archived);
        assert_eq!(detail.images.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let mut query = MockExhibitionQuery::new();
        query
            .expect_get_by_id()
            .returning(|_| Err(ExhibitionQueryError::NotFound));

        let err = GetSingleExhibitionService::new(query)
            .execute(Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err, GetSingleExhibitionError::NotFound);
    }
}
