// src/modules/car/application/ports/outgoing/car_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::car::application::domain::entities::CarCondition;
use crate::shared::api::{PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Owner summary attached to every listing row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarOwnerView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarGalleryItem {
    pub id: Uuid,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Listing row: the car plus its owner and how many gallery images hang off
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarSummaryView {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub condition: CarCondition,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
    pub approved: bool,
    pub user: CarOwnerView,
    pub gallery_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Single-car view with the full gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDetailView {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub condition: CarCondition,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
    pub approved: bool,
    pub user: CarOwnerView,
    pub gallery: Vec<CarGalleryItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Conjunctive listing filter. Absent fields impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct CarListFilter {
    /// Case-insensitive substring match on the brand.
    pub brand: Option<String>,
    pub condition: Option<CarCondition>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub year: Option<i32>,
    pub approved: Option<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CarQueryError {
    #[error("Car not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side, joins users and gallery_images)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CarQuery: Send + Sync {
    /// Filtered listing, newest first. The total count is computed
    /// independently of the requested page.
    async fn list(
        &self,
        filter: CarListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CarSummaryView>, CarQueryError>;

    /// One user's listings regardless of approval state, newest first.
    async fn list_by_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<CarSummaryView>, CarQueryError>;

    /// Public single-car read including the gallery.
    async fn get_by_id(&self, car_id: Uuid) -> Result<CarDetailView, CarQueryError>;
}
