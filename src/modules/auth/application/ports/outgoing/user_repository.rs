use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Everything needed to persist a new user. The id and timestamps are
/// assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub business_name: Option<String>,
    pub business_type: Option<String>,
    pub license_number: Option<String>,
    pub is_verified: bool,
}

/// Write side of the users table.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Hard delete; listings and gallery rows go with it (FK cascade).
    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
