use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::gallery::application::ports::outgoing::gallery_query::{
    GalleryCarView, GalleryImageView,
};
use crate::gallery::application::ports::outgoing::gallery_repository::{
    GalleryImageOwner, GalleryRepository, GalleryRepositoryError,
};
use crate::modules::car::adapter::outgoing::sea_orm_entity::cars;

use super::sea_orm_entity::gallery_images::{
    ActiveModel as GalleryActiveModel, Entity as GalleryEntity,
};

#[derive(Clone)]
pub struct GalleryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GalleryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_car(&self, car_id: Uuid) -> Result<cars::Model, GalleryRepositoryError> {
        cars::Entity::find_by_id(car_id)
            .one(&*self.db)
            .await
            .map_err(|e| GalleryRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(GalleryRepositoryError::CarNotFound)
    }
}

#[async_trait]
impl GalleryRepository for GalleryRepositoryPostgres {
    async fn insert(
        &self,
        car_id: Uuid,
        image_url: String,
    ) -> Result<GalleryImageView, GalleryRepositoryError> {
        let car = self.find_car(car_id).await?;

        let active_image = GalleryActiveModel {
            id: Set(Uuid::new_v4()),
            car_id: Set(car_id),
            image_url: Set(image_url),
            created_at: NotSet,
        };

        let inserted = active_image
            .insert(&*self.db)
            .await
            .map_err(|e| GalleryRepositoryError::DatabaseError(e.to_string()))?;

        Ok(GalleryImageView {
            id: inserted.id,
            image_url: inserted.image_url,
            car: GalleryCarView {
                id: car.id,
                brand: car.brand,
                model: car.model,
                year: car.year,
            },
            created_at: inserted.created_at.into(),
        })
    }

    async fn car_owner_id(&self, car_id: Uuid) -> Result<Uuid, GalleryRepositoryError> {
        Ok(self.find_car(car_id).await?.user_id)
    }

    async fn image_owner(
        &self,
        image_id: Uuid,
    ) -> Result<GalleryImageOwner, GalleryRepositoryError> {
        let image = GalleryEntity::find_by_id(image_id)
            .one(&*self.db)
            .await
            .map_err(|e| GalleryRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(GalleryRepositoryError::ImageNotFound)?;

        let car = cars::Entity::find_by_id(image.car_id)
            .one(&*self.db)
            .await
            .map_err(|e| GalleryRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(GalleryRepositoryError::CarNotFound)?;

        Ok(GalleryImageOwner {
            image_id: image.id,
            car_id: car.id,
            car_owner_id: car.user_id,
        })
    }

    async fn delete(&self, image_id: Uuid) -> Result<(), GalleryRepositoryError> {
        let image = GalleryEntity::find_by_id(image_id)
            .one(&*self.db)
            .await
            .map_err(|e| GalleryRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(GalleryRepositoryError::ImageNotFound)?;

        image
            .delete(&*self.db)
            .await
            .map_err(|e| GalleryRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::super::sea_orm_entity::gallery_images;

    fn mock_car_model(id: Uuid, user_id: Uuid) -> cars::Model {
        let now = Utc::now().fixed_offset();

        cars::Model {
            id,
            user_id,
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2021,
            condition: "PRE_OWNED".to_string(),
            price: 15000.0,
            description: "Clean one-owner car".to_string(),
            images: serde_json::json!(["/uploads/images-1.jpg"]),
            approved: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn mock_image_model(id: Uuid, car_id: Uuid) -> gallery_images::Model {
        gallery_images::Model {
            id,
            car_id,
            image_url: "/uploads/image-1.jpg".to_string(),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_car_owner_id_success() {
        let car_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_car_model(car_id, user_id)]])
            .into_connection();

        let repository = GalleryRepositoryPostgres::new(Arc::new(db));
        assert_eq!(repository.car_owner_id(car_id).await.unwrap(), user_id);
    }

    #[tokio::test]
    async fn test_car_owner_id_missing_car() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<cars::Model>::new()])
            .into_connection();

        let repository = GalleryRepositoryPostgres::new(Arc::new(db));
        let result = repository.car_owner_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(GalleryRepositoryError::CarNotFound)));
    }

    #[tokio::test]
    async fn test_image_owner_success() {
        let image_id = Uuid::new_v4();
        let car_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_image_model(image_id, car_id)]])
            .append_query_results(vec![vec![mock_car_model(car_id, user_id)]])
            .into_connection();

        let repository = GalleryRepositoryPostgres::new(Arc::new(db));
        let owner = repository.image_owner(image_id).await.unwrap();

        assert_eq!(owner.image_id, image_id);
        assert_eq!(owner.car_id, car_id);
        assert_eq!(owner.car_owner_id, user_id);
    }

    #[tokio::test]
    async fn test_image_owner_missing_image() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<gallery_images::Model>::new()])
            .into_connection();

        let repository = GalleryRepositoryPostgres::new(Arc::new(db));
        let result = repository.image_owner(Uuid::new_v4()).await;

        assert!(matches!(
            result,
            Err(GalleryRepositoryError::ImageNotFound)
        ));
    }
}
