use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::api::{PageRequest, PageResult};

/// The car a gallery image belongs to, as shown in the public feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryCarView {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageView {
    pub id: Uuid,
    pub image_url: String,
    pub car: GalleryCarView,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GalleryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait GalleryQuery: Send + Sync {
    /// Public gallery feed, newest first.
    async fn list(&self, page: PageRequest)
        -> Result<PageResult<GalleryImageView>, GalleryQueryError>;
}
