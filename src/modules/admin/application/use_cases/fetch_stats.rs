use async_trait::async_trait;

use crate::admin::application::ports::outgoing::admin_query::{
    AdminQuery, AdminQueryError, AdminStatsView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchStatsError {
    #[error("Stats query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IFetchStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<AdminStatsView, FetchStatsError>;
}

pub struct FetchStatsUseCase<Q>
where
    Q: AdminQuery,
{
    query: Q,
}

impl<Q> FetchStatsUseCase<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchStatsUseCase for FetchStatsUseCase<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self) -> Result<AdminStatsView, FetchStatsError> {
        self.query
            .stats()
            .await
            .map_err(|e| FetchStatsError::QueryFailed(e.to_string()))
    }
}
