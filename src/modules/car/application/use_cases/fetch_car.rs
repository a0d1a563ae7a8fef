use async_trait::async_trait;
use uuid::Uuid;

use crate::car::application::ports::outgoing::car_query::{
    CarDetailView, CarQuery, CarQueryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchCarError {
    #[error("Car not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IFetchCarUseCase: Send + Sync {
    async fn execute(&self, car_id: Uuid) -> Result<CarDetailView, FetchCarError>;
}

pub struct FetchCarUseCase<Q>
where
    Q: CarQuery,
{
    query: Q,
}

impl<Q> FetchCarUseCase<Q>
where
    Q: CarQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchCarUseCase for FetchCarUseCase<Q>
where
    Q: CarQuery + Send + Sync,
{
    async fn execute(&self, car_id: Uuid) -> Result<CarDetailView, FetchCarError> {
        self.query.get_by_id(car_id).await.map_err(|e| match e {
            CarQueryError::NotFound => FetchCarError::NotFound,
            other => FetchCarError::QueryFailed(other.to_string()),
        })
    }
}
