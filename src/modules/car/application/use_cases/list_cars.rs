use async_trait::async_trait;

use crate::car::application::ports::outgoing::car_query::{
    CarListFilter, CarQuery, CarQueryError, CarSummaryView,
};
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCarsError {
    #[error("Listing query failed: {0}")]
    QueryFailed(String),
}

impl From<CarQueryError> for ListCarsError {
    fn from(err: CarQueryError) -> Self {
        ListCarsError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait IListCarsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: CarListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CarSummaryView>, ListCarsError>;
}

pub struct ListCarsUseCase<Q>
where
    Q: CarQuery,
{
    query: Q,
}

impl<Q> ListCarsUseCase<Q>
where
    Q: CarQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListCarsUseCase for ListCarsUseCase<Q>
where
    Q: CarQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: CarListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CarSummaryView>, ListCarsError> {
        self.query
            .list(filter, page)
            .await
            .map_err(ListCarsError::from)
    }
}
