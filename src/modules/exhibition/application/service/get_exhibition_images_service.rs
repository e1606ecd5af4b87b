use async_trait::async_trait;
use uuid::Uuid;

use crate::exhibition::application::domain::entities::ExhibitionImage;
use crate::exhibition::application::ports::incoming::use_cases::{
    GetExhibitionImagesError, GetExhibitionImagesUseCase,
};
use crate::exhibition::application::ports::outgoing::exhibition_query::{
    ExhibitionQuery, ExhibitionQueryError,
};

pub struct GetExhibitionImagesService<Q>
where
    Q: ExhibitionQuery,
{
    query: Q,
}

impl<Q> GetExhibitionImagesService<Q>
where
    Q: ExhibitionQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn map_query_error(e: ExhibitionQueryError) -> GetExhibitionImagesError {
    match e {
        ExhibitionQueryError::NotFound => GetExhibitionImagesError::NotFound,
        ExhibitionQueryError::DatabaseError(msg) => GetExhibitionImagesError::RepositoryError(msg),
    }
}

#[async_trait]
impl<Q> GetExhibitionImagesUseCase for GetExhibitionImagesService<Q>
where
    Q: ExhibitionQuery + Send + Sync,
{
    async fn execute(
        &self,
        exhibition_id: Uuid,
    ) -> Result<Vec<ExhibitionImage>, GetExhibitionImagesError> {
        // An unknown exhibition is a 404, not an empty gallery.
        self.query
            .get_by_id(exhibition_id)
            .await
            .map_err(map_query_error)?;

        self.query
            .list_images(exhibition_id)
            .await
            .map_err(map_query_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::exhibition::application::domain::entities::fixtures::{exhibition, gallery_image};
    use crate::exhibition::application::ports::outgoing::exhibition_query::MockExhibitionQuery;
    use crate::shared::position::Position;

    #[tokio::test]
    async fn test_lists_gallery() {
        let mut query = MockExhibitionQuery::new();
        query
            .expect_get_by_id()
            .returning(|_| Ok(exhibition("Show", Position::Past(1))));
        query.expect_list_images().returning(|id| {
            Ok(vec![
                gallery_image(id, "a.jpg", 0),
                gallery_image(id, "b.jpg", 1),
            ])
        });

        let images = GetExhibitionImagesService::new(query)
            .execute(Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(
            images.iter().map(|i| i.url.as_str()).collect::<Vec<_>>(),
            vec!["a.jpg", "b.jpg"]
        );
    }

    #[tokio::test]
    async fn test_unknown_exhibition_skips_gallery_lookup() {
        let mut query = MockExhibitionQuery::new();
        query
            .expect_get_by_id()
            .returning(|_| Err(ExhibitionQueryError::NotFound));
        query.expect_list_images().never();

        let err = GetExhibitionImagesService::new(query)
            .execute(Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err, GetExhibitionImagesError::NotFound);
    }
}
