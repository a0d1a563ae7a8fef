use std::sync::Arc;

use uuid::Uuid;

use crate::auth::application::domain::entities::Identity;
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveIdentityError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Turns the user id from a verified token into a live `{id, email, role}`
/// identity. A token whose subject no longer exists resolves to `NotFound`,
/// which the extractor treats as an authentication failure.
#[derive(Clone)]
pub struct UserIdentityResolver {
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl UserIdentityResolver {
    pub fn new(user_query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { user_query }
    }

    pub async fn by_id(&self, user_id: Uuid) -> Result<Identity, ResolveIdentityError> {
        match self.user_query.find_by_id(user_id).await {
            Ok(Some(user)) => Ok(Identity {
                id: user.id,
                email: user.email,
                role: user.role,
            }),
            Ok(None) => Err(ResolveIdentityError::NotFound),
            Err(UserQueryError::DatabaseError(msg)) => {
                Err(ResolveIdentityError::RepositoryError(msg))
            }
        }
    }
}
