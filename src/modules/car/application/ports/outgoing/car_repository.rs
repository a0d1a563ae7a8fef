// src/modules/car/application/ports/outgoing/car_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::car::application::domain::entities::CarCondition;

/// A car row as returned after a mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub condition: CarCondition,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload. There is deliberately no `approved` field: new listings
/// always start unapproved.
#[derive(Debug, Clone)]
pub struct NewCar {
    pub user_id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub condition: CarCondition,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
}

/// Partial update. `images`, when present, replaces the whole list.
#[derive(Debug, Clone, Default)]
pub struct CarUpdate {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub condition: Option<CarCondition>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CarRepositoryError {
    #[error("Car not found")]
    CarNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn insert(&self, car: NewCar) -> Result<CarRecord, CarRepositoryError>;

    async fn update(&self, car_id: Uuid, update: CarUpdate)
        -> Result<CarRecord, CarRepositoryError>;

    /// Gallery rows cascade at the database layer.
    async fn delete(&self, car_id: Uuid) -> Result<(), CarRepositoryError>;

    async fn set_approved(
        &self,
        car_id: Uuid,
        approved: bool,
    ) -> Result<CarRecord, CarRepositoryError>;

    /// Owner lookup for the owner-or-admin gate.
    async fn owner_id(&self, car_id: Uuid) -> Result<Uuid, CarRepositoryError>;
}
