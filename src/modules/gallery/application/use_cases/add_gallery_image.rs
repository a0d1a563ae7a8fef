use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Identity;
use crate::gallery::application::ports::outgoing::gallery_query::GalleryImageView;
use crate::gallery::application::ports::outgoing::gallery_repository::{
    GalleryRepository, GalleryRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddGalleryImageError {
    /// The car does not exist or belongs to someone else. Both collapse to
    /// one error so the endpoint leaks nothing about other users' cars.
    #[error("Car not found or you do not own this car")]
    CarNotOwned,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IAddGalleryImageUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Identity,
        car_id: Uuid,
        image_url: String,
    ) -> Result<GalleryImageView, AddGalleryImageError>;
}

pub struct AddGalleryImageUseCase<R>
where
    R: GalleryRepository,
{
    repository: R,
}

impl<R> AddGalleryImageUseCase<R>
where
    R: GalleryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IAddGalleryImageUseCase for AddGalleryImageUseCase<R>
where
    R: GalleryRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Identity,
        car_id: Uuid,
        image_url: String,
    ) -> Result<GalleryImageView, AddGalleryImageError> {
        let owner_id = self
            .repository
            .car_owner_id(car_id)
            .await
            .map_err(|e| match e {
                GalleryRepositoryError::CarNotFound => AddGalleryImageError::CarNotOwned,
                other => AddGalleryImageError::RepositoryError(other.to_string()),
            })?;

        // Gallery additions are strictly owner-only
        if owner_id != caller.id {
            return Err(AddGalleryImageError::CarNotOwned);
        }

        self.repository
            .insert(car_id, image_url)
            .await
            .map_err(|e| match e {
                GalleryRepositoryError::CarNotFound => AddGalleryImageError::CarNotOwned,
                other => AddGalleryImageError::RepositoryError(other.to_string()),
            })
    }
}
