use async_trait::async_trait;

use crate::exhibition::application::domain::entities::PublicExhibitionList;
use crate::exhibition::application::ports::incoming::use_cases::{
    GetPublicExhibitionsError, GetPublicExhibitionsUseCase,
};
use crate::exhibition::application::ports::outgoing::exhibition_query::ExhibitionQuery;

pub struct GetPublicExhibitionsService<Q>
where
    Q: ExhibitionQuery,
{
    query: Q,
}

impl<Q> GetPublicExhibitionsService<Q>
where
    Q: ExhibitionQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPublicExhibitionsUseCase for GetPublicExhibitionsService<Q>
where
    Q: ExhibitionQuery + Send + Sync,
{
    async fn execute(&self) -> Result<PublicExhibitionList, GetPublicExhibitionsError> {
        let rows = self
            .query
            .list_public()
            .await
            .map_err(|e| GetPublicExhibitionsError::RepositoryError(e.to_string()))?;

        Ok(PublicExhibitionList::from_exhibitions(rows))
    }
}
