use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::gallery::application::ports::outgoing::gallery_query::{
    GalleryCarView, GalleryImageView, GalleryQuery, GalleryQueryError,
};
use crate::modules::car::adapter::outgoing::sea_orm_entity::cars;
use crate::shared::api::{PageRequest, PageResult};

use super::sea_orm_entity::gallery_images::{Column, Entity};

#[derive(Clone)]
pub struct GalleryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GalleryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GalleryQuery for GalleryQueryPostgres {
    async fn list(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<GalleryImageView>, GalleryQueryError> {
        let query = Entity::find().order_by_desc(Column::CreatedAt);

        let total = query
            .clone()
            .count(&*self.db)
            .await
            .map_err(|e| GalleryQueryError::DatabaseError(e.to_string()))?;

        let images = query
            .offset(page.offset())
            .limit(page.limit as u64)
            .all(&*self.db)
            .await
            .map_err(|e| GalleryQueryError::DatabaseError(e.to_string()))?;

        // One follow-up query resolves every car on the page
        let car_ids: Vec<Uuid> = images.iter().map(|i| i.car_id).collect();
        let cars_by_id: HashMap<Uuid, GalleryCarView> = if car_ids.is_empty() {
            HashMap::new()
        } else {
            cars::Entity::find()
                .filter(cars::Column::Id.is_in(car_ids))
                .all(&*self.db)
                .await
                .map_err(|e| GalleryQueryError::DatabaseError(e.to_string()))?
                .into_iter()
                .map(|c| {
                    (
                        c.id,
                        GalleryCarView {
                            id: c.id,
                            brand: c.brand,
                            model: c.model,
                            year: c.year,
                        },
                    )
                })
                .collect()
        };

        let items: Result<Vec<GalleryImageView>, GalleryQueryError> = images
            .into_iter()
            .map(|image| {
                let car = cars_by_id.get(&image.car_id).cloned().ok_or_else(|| {
                    GalleryQueryError::DatabaseError(format!(
                        "Missing car row for gallery image {}",
                        image.id
                    ))
                })?;
                Ok(GalleryImageView {
                    id: image.id,
                    image_url: image.image_url,
                    car,
                    created_at: image.created_at.into(),
                })
            })
            .collect();

        Ok(PageResult {
            items: items?,
            page: page.page,
            limit: page.limit,
            total,
        })
    }
}
