use async_trait::async_trait;
use uuid::Uuid;

use crate::car::application::ports::outgoing::car_query::{
    CarQuery, CarQueryError, CarSummaryView,
};
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchMyCarsError {
    #[error("Listing query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IFetchMyCarsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<CarSummaryView>, FetchMyCarsError>;
}

pub struct FetchMyCarsUseCase<Q>
where
    Q: CarQuery,
{
    query: Q,
}

impl<Q> FetchMyCarsUseCase<Q>
where
    Q: CarQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchMyCarsUseCase for FetchMyCarsUseCase<Q>
where
    Q: CarQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<CarSummaryView>, FetchMyCarsError> {
        self.query
            .list_by_user(user_id, page)
            .await
            .map_err(|e| FetchMyCarsError::QueryFailed(e.to_string()))
    }
}
