use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Cannot delete admin users")]
    AdminUserProtected,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<(), DeleteUserError>;
}

/// Hard-deletes a user and, via FK cascade, their cars and gallery rows.
/// Admin accounts are never deletable through this path.
pub struct DeleteUserUseCase {
    query: Arc<dyn UserQuery + Send + Sync>,
    repository: Arc<dyn UserRepository + Send + Sync>,
}

impl DeleteUserUseCase {
    pub fn new(
        query: Arc<dyn UserQuery + Send + Sync>,
        repository: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl IDeleteUserUseCase for DeleteUserUseCase {
    async fn execute(&self, user_id: Uuid) -> Result<(), DeleteUserError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|UserQueryError::DatabaseError(msg)| DeleteUserError::RepositoryError(msg))?
            .ok_or(DeleteUserError::UserNotFound)?;

        if user.role.is_admin() {
            return Err(DeleteUserError::AdminUserProtected);
        }

        self.repository
            .delete_user(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
                other => DeleteUserError::RepositoryError(other.to_string()),
            })
    }
}
