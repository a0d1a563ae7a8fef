// src/modules/car/adapter/outgoing/car_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::car::application::domain::entities::CarCondition;
use crate::car::application::ports::outgoing::car_query::{
    CarDetailView, CarGalleryItem, CarListFilter, CarOwnerView, CarQuery, CarQueryError,
    CarSummaryView,
};
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::gallery::adapter::outgoing::sea_orm_entity::gallery_images;
use crate::shared::api::{PageRequest, PageResult};

use super::sea_orm_entity::cars::{self, Column, Entity};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct CarQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CarQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Count, fetch one page, then enrich the rows with owner summaries and
    /// gallery counts in two follow-up queries.
    async fn run_paged(
        &self,
        query: Select<Entity>,
        page: PageRequest,
    ) -> Result<PageResult<CarSummaryView>, CarQueryError> {
        // Total count is independent of pagination
        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.limit as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let owners = self.owners_by_id(&models).await?;
        let gallery_counts = self.gallery_counts(&models).await?;

        let items: Result<Vec<CarSummaryView>, CarQueryError> = models
            .into_iter()
            .map(|model| {
                let owner = owners.get(&model.user_id).cloned().ok_or_else(|| {
                    CarQueryError::DatabaseError(format!(
                        "Missing owner row for car {}",
                        model.id
                    ))
                })?;
                let count = gallery_counts.get(&model.id).copied().unwrap_or(0);
                model_to_summary(model, owner, count)
            })
            .collect();

        Ok(PageResult {
            items: items?,
            page: page.page,
            limit: page.limit,
            total,
        })
    }

    async fn owners_by_id(
        &self,
        models: &[cars::Model],
    ) -> Result<HashMap<Uuid, CarOwnerView>, CarQueryError> {
        let user_ids: Vec<Uuid> = models.iter().map(|m| m.user_id).collect();
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let owners = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(owners
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    CarOwnerView {
                        id: u.id,
                        name: u.name,
                        email: u.email,
                    },
                )
            })
            .collect())
    }

    async fn gallery_counts(
        &self,
        models: &[cars::Model],
    ) -> Result<HashMap<Uuid, u64>, CarQueryError> {
        let car_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        if car_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts = gallery_images::Entity::find()
            .select_only()
            .column(gallery_images::Column::CarId)
            .column_as(Expr::col(gallery_images::Column::Id).count(), "count")
            .filter(gallery_images::Column::CarId.is_in(car_ids))
            .group_by(gallery_images::Column::CarId)
            .into_tuple::<(Uuid, i64)>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(counts
            .into_iter()
            .map(|(car_id, count)| (car_id, count.max(0) as u64))
            .collect())
    }
}

fn apply_filter(mut query: Select<Entity>, filter: &CarListFilter) -> Select<Entity> {
    if let Some(ref brand) = filter.brand {
        let pattern = format!("%{}%", brand.trim());
        query = query.filter(Expr::col(Column::Brand).ilike(&pattern));
    }

    if let Some(condition) = filter.condition {
        query = query.filter(Column::Condition.eq(condition.as_str()));
    }

    if let Some(min_price) = filter.min_price {
        query = query.filter(Column::Price.gte(min_price));
    }

    if let Some(max_price) = filter.max_price {
        query = query.filter(Column::Price.lte(max_price));
    }

    if let Some(year) = filter.year {
        query = query.filter(Column::Year.eq(year));
    }

    if let Some(approved) = filter.approved {
        query = query.filter(Column::Approved.eq(approved));
    }

    query
}

#[async_trait]
impl CarQuery for CarQueryPostgres {
    async fn list(
        &self,
        filter: CarListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CarSummaryView>, CarQueryError> {
        let query = apply_filter(Entity::find(), &filter).order_by_desc(Column::CreatedAt);

        self.run_paged(query, page).await
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<CarSummaryView>, CarQueryError> {
        let query = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt);

        self.run_paged(query, page).await
    }

    async fn get_by_id(&self, car_id: Uuid) -> Result<CarDetailView, CarQueryError> {
        let car = Entity::find_by_id(car_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CarQueryError::NotFound)?;

        let owner = users::Entity::find_by_id(car.user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| {
                CarQueryError::DatabaseError(format!("Missing owner row for car {}", car.id))
            })?;

        let gallery = gallery_images::Entity::find()
            .filter(gallery_images::Column::CarId.eq(car_id))
            .order_by_asc(gallery_images::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        model_to_detail(car, owner, gallery)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_summary(
    model: cars::Model,
    owner: CarOwnerView,
    gallery_count: u64,
) -> Result<CarSummaryView, CarQueryError> {
    Ok(CarSummaryView {
        id: model.id,
        brand: model.brand,
        model: model.model,
        year: model.year,
        condition: parse_condition(&model.condition)?,
        price: model.price,
        description: model.description,
        images: from_json(&model.images)?,
        approved: model.approved,
        user: owner,
        gallery_count,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn model_to_detail(
    model: cars::Model,
    owner: users::Model,
    gallery: Vec<gallery_images::Model>,
) -> Result<CarDetailView, CarQueryError> {
    Ok(CarDetailView {
        id: model.id,
        brand: model.brand,
        model: model.model,
        year: model.year,
        condition: parse_condition(&model.condition)?,
        price: model.price,
        description: model.description,
        images: from_json(&model.images)?,
        approved: model.approved,
        user: CarOwnerView {
            id: owner.id,
            name: owner.name,
            email: owner.email,
        },
        gallery: gallery
            .into_iter()
            .map(|image| CarGalleryItem {
                id: image.id,
                image_url: image.image_url,
                created_at: image.created_at.into(),
            })
            .collect(),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

pub(super) fn parse_condition(value: &str) -> Result<CarCondition, CarQueryError> {
    CarCondition::from_str(value)
        .map_err(|e| CarQueryError::SerializationError(format!("Corrupt condition column: {}", e)))
}

pub(super) fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, CarQueryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| CarQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> CarQueryError {
    CarQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
