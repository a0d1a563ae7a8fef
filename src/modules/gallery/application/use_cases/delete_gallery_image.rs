use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Identity;
use crate::gallery::application::ports::outgoing::gallery_repository::{
    GalleryRepository, GalleryRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteGalleryImageError {
    #[error("Gallery image not found")]
    ImageNotFound,

    #[error("You do not have permission to delete this image")]
    AccessDenied,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteGalleryImageUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Identity,
        image_id: Uuid,
    ) -> Result<(), DeleteGalleryImageError>;
}

pub struct DeleteGalleryImageUseCase<R>
where
    R: GalleryRepository,
{
    repository: R,
}

impl<R> DeleteGalleryImageUseCase<R>
where
    R: GalleryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteGalleryImageUseCase for DeleteGalleryImageUseCase<R>
where
    R: GalleryRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Identity,
        image_id: Uuid,
    ) -> Result<(), DeleteGalleryImageError> {
        let image = self
            .repository
            .image_owner(image_id)
            .await
            .map_err(|e| match e {
                GalleryRepositoryError::ImageNotFound => DeleteGalleryImageError::ImageNotFound,
                other => DeleteGalleryImageError::RepositoryError(other.to_string()),
            })?;

        if !caller.role.is_admin() && image.car_owner_id != caller.id {
            return Err(DeleteGalleryImageError::AccessDenied);
        }

        self.repository.delete(image_id).await.map_err(|e| match e {
            GalleryRepositoryError::ImageNotFound => DeleteGalleryImageError::ImageNotFound,
            other => DeleteGalleryImageError::RepositoryError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::auth::application::domain::entities::UserRole;
    use crate::gallery::application::ports::outgoing::gallery_query::GalleryImageView;
    use crate::gallery::application::ports::outgoing::gallery_repository::GalleryImageOwner;

    struct MockGalleryRepository {
        owner: Uuid,
        missing: bool,
    }

    #[async_trait]
    impl GalleryRepository for MockGalleryRepository {
        async fn insert(
            &self,
            _car_id: Uuid,
            _image_url: String,
        ) -> Result<GalleryImageView, GalleryRepositoryError> {
            unimplemented!("not used in delete tests")
        }

        async fn car_owner_id(&self, _car_id: Uuid) -> Result<Uuid, GalleryRepositoryError> {
            unimplemented!("not used in delete tests")
        }

        async fn image_owner(
            &self,
            image_id: Uuid,
        ) -> Result<GalleryImageOwner, GalleryRepositoryError> {
            if self.missing {
                return Err(GalleryRepositoryError::ImageNotFound);
            }
            Ok(GalleryImageOwner {
                image_id,
                car_id: Uuid::new_v4(),
                car_owner_id: self.owner,
            })
        }

        async fn delete(&self, _image_id: Uuid) -> Result<(), GalleryRepositoryError> {
            Ok(())
        }
    }

    fn caller(id: Uuid, role: UserRole) -> Identity {
        Identity {
            id,
            email: "caller@example.com".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn owner_of_the_car_can_delete() {
        let owner = Uuid::new_v4();
        let use_case = DeleteGalleryImageUseCase::new(MockGalleryRepository {
            owner,
            missing: false,
        });

        let result = use_case
            .execute(caller(owner, UserRole::Owner), Uuid::new_v4())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn admin_bypasses_ownership() {
        let use_case = DeleteGalleryImageUseCase::new(MockGalleryRepository {
            owner: Uuid::new_v4(),
            missing: false,
        });

        let result = use_case
            .execute(caller(Uuid::new_v4(), UserRole::Admin), Uuid::new_v4())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn other_users_are_denied() {
        let use_case = DeleteGalleryImageUseCase::new(MockGalleryRepository {
            owner: Uuid::new_v4(),
            missing: false,
        });

        let result = use_case
            .execute(caller(Uuid::new_v4(), UserRole::Shop), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(DeleteGalleryImageError::AccessDenied)));
    }

    #[tokio::test]
    async fn missing_image_maps_to_not_found() {
        let use_case = DeleteGalleryImageUseCase::new(MockGalleryRepository {
            owner: Uuid::new_v4(),
            missing: true,
        });

        let result = use_case
            .execute(caller(Uuid::new_v4(), UserRole::Admin), Uuid::new_v4())
            .await;

        assert!(matches!(
            result,
            Err(DeleteGalleryImageError::ImageNotFound)
        ));
    }
}
