use async_trait::async_trait;

use crate::admin::application::ports::outgoing::admin_query::{
    AdminQuery, AdminQueryError, AdminUserView, UserSearchFilter,
};
use crate::shared::api::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("User listing failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait IListUsersUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: UserSearchFilter,
        page: PageRequest,
    ) -> Result<PageResult<AdminUserView>, ListUsersError>;
}

pub struct ListUsersUseCase<Q>
where
    Q: AdminQuery,
{
    query: Q,
}

impl<Q> ListUsersUseCase<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListUsersUseCase for ListUsersUseCase<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: UserSearchFilter,
        page: PageRequest,
    ) -> Result<PageResult<AdminUserView>, ListUsersError> {
        self.query
            .list_users(filter, page)
            .await
            .map_err(|e| ListUsersError::QueryFailed(e.to_string()))
    }
}
