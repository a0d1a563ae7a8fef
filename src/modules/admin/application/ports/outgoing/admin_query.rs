// src/modules/admin/application/ports/outgoing/admin_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserRole;
use crate::car::application::domain::entities::CarCondition;
use crate::car::application::ports::outgoing::car_query::CarOwnerView;
use crate::shared::api::{PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    pub total_users: u64,
    pub total_cars: u64,
    pub approved_cars: u64,
    pub pending_cars: u64,
    /// Sum of approved listing prices.
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentCarView {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub condition: CarCondition,
    pub price: f64,
    pub approved: bool,
    pub user: CarOwnerView,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentUserView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub car_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsView {
    pub overview: StatsOverview,
    pub recent_cars: Vec<RecentCarView>,
    pub recent_users: Vec<RecentUserView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub car_count: u64,
}

#[derive(Debug, Clone, Default)]
pub struct UserSearchFilter {
    /// Case-insensitive substring match against name or email.
    pub search: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AdminQuery: Send + Sync {
    /// Dashboard aggregates plus the five newest cars and users.
    async fn stats(&self) -> Result<AdminStatsView, AdminQueryError>;

    /// Paginated user listing with optional name/email search.
    async fn list_users(
        &self,
        filter: UserSearchFilter,
        page: PageRequest,
    ) -> Result<PageResult<AdminUserView>, AdminQueryError>;
}
