use async_trait::async_trait;

use crate::exhibition::application::domain::entities::Exhibition;
use crate::exhibition::application::ports::incoming::use_cases::{
    GetExhibitionsError, GetExhibitionsUseCase,
};
use crate::exhibition::application::ports::outgoing::exhibition_query::ExhibitionQuery;

pub struct GetExhibitionsService<Q>
where
    Q: ExhibitionQuery,
{
    query: Q,
}

impl<Q> GetExhibitionsService<Q>
where
    Q: ExhibitionQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetExhibitionsUseCase for GetExhibitionsService<Q>
where
    Q: ExhibitionQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Exhibition>, GetExhibitionsError> {
        self.query
            .list_all()
            .await
            .map_err(|e| GetExhibitionsError::RepositoryError(e.to_string()))
    }
}
