use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// `/auth/me` payload: the public user fields plus a listing count.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub business_name: Option<String>,
    pub business_type: Option<String>,
    pub license_number: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub car_count: u64,
}

impl ProfileView {
    fn from_user(user: User, car_count: u64) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            phone: user.phone,
            address: user.address,
            business_name: user.business_name,
            business_type: user.business_type,
            license_number: user.license_number,
            is_verified: user.is_verified,
            created_at: user.created_at,
            car_count,
        }
    }
}

// Interface for FetchProfile use case
#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<ProfileView, FetchProfileError>;
}

#[derive(Clone)]
pub struct FetchProfileUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchProfileUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchProfileUseCase for FetchProfileUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<ProfileView, FetchProfileError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(map_query_err)?
            .ok_or(FetchProfileError::UserNotFound)?;

        let car_count = self.query.car_count(user_id).await.map_err(map_query_err)?;

        Ok(ProfileView::from_user(user, car_count))
    }
}

fn map_query_err(err: UserQueryError) -> FetchProfileError {
    let UserQueryError::DatabaseError(msg) = err;
    FetchProfileError::QueryError(msg)
}
