use async_trait::async_trait;
use uuid::Uuid;

use crate::gallery::application::ports::outgoing::gallery_query::GalleryImageView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GalleryRepositoryError {
    #[error("Gallery image not found")]
    ImageNotFound,

    #[error("Car not found")]
    CarNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// What the ownership gate needs to know about an existing image.
#[derive(Debug, Clone)]
pub struct GalleryImageOwner {
    pub image_id: Uuid,
    pub car_id: Uuid,
    pub car_owner_id: Uuid,
}

#[async_trait]
pub trait GalleryRepository: Send + Sync {
    /// Insert an image for an existing car and return the feed view.
    async fn insert(
        &self,
        car_id: Uuid,
        image_url: String,
    ) -> Result<GalleryImageView, GalleryRepositoryError>;

    /// Owner of the car a new image would attach to.
    async fn car_owner_id(&self, car_id: Uuid) -> Result<Uuid, GalleryRepositoryError>;

    /// Image plus the owner of its car, for the delete gate.
    async fn image_owner(&self, image_id: Uuid)
        -> Result<GalleryImageOwner, GalleryRepositoryError>;

    async fn delete(&self, image_id: Uuid) -> Result<(), GalleryRepositoryError>;
}
