// src/modules/car/adapter/outgoing/car_repository_postgres.rs

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::car::application::ports::outgoing::car_repository::{
    CarRecord, CarRepository, CarRepositoryError, CarUpdate, NewCar,
};

use super::car_query_postgres::{from_json, parse_condition};
use super::sea_orm_entity::cars::{self, ActiveModel as CarActiveModel, Entity as CarEntity};

#[derive(Clone)]
pub struct CarRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CarRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(&self, car_id: Uuid) -> Result<cars::Model, CarRepositoryError> {
        CarEntity::find_by_id(car_id)
            .one(&*self.db)
            .await
            .map_err(|e| CarRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(CarRepositoryError::CarNotFound)
    }
}

#[async_trait]
impl CarRepository for CarRepositoryPostgres {
    async fn insert(&self, car: NewCar) -> Result<CarRecord, CarRepositoryError> {
        let active_car = CarActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(car.user_id),
            brand: Set(car.brand),
            model: Set(car.model),
            year: Set(car.year),
            condition: Set(car.condition.as_str().to_string()),
            price: Set(car.price),
            description: Set(car.description),
            images: Set(serde_json::json!(car.images)),
            // Every new listing waits for moderation
            approved: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_car
            .insert(&*self.db)
            .await
            .map_err(|e| CarRepositoryError::DatabaseError(e.to_string()))?;

        model_to_record(inserted)
    }

    async fn update(
        &self,
        car_id: Uuid,
        update: CarUpdate,
    ) -> Result<CarRecord, CarRepositoryError> {
        let car = self.find_model(car_id).await?;

        let mut active_car: CarActiveModel = car.into();

        if let Some(brand) = update.brand {
            active_car.brand = Set(brand);
        }
        if let Some(model) = update.model {
            active_car.model = Set(model);
        }
        if let Some(year) = update.year {
            active_car.year = Set(year);
        }
        if let Some(condition) = update.condition {
            active_car.condition = Set(condition.as_str().to_string());
        }
        if let Some(price) = update.price {
            active_car.price = Set(price);
        }
        if let Some(description) = update.description {
            active_car.description = Set(description);
        }
        if let Some(images) = update.images {
            active_car.images = Set(serde_json::json!(images));
        }

        let updated = active_car
            .update(&*self.db)
            .await
            .map_err(|e| CarRepositoryError::DatabaseError(e.to_string()))?;

        model_to_record(updated)
    }

    async fn delete(&self, car_id: Uuid) -> Result<(), CarRepositoryError> {
        let car = self.find_model(car_id).await?;

        car.delete(&*self.db)
            .await
            .map_err(|e| CarRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn set_approved(
        &self,
        car_id: Uuid,
        approved: bool,
    ) -> Result<CarRecord, CarRepositoryError> {
        let car = self.find_model(car_id).await?;

        let mut active_car: CarActiveModel = car.into();
        active_car.approved = Set(approved);

        let updated = active_car
            .update(&*self.db)
            .await
            .map_err(|e| CarRepositoryError::DatabaseError(e.to_string()))?;

        model_to_record(updated)
    }

    async fn owner_id(&self, car_id: Uuid) -> Result<Uuid, CarRepositoryError> {
        Ok(self.find_model(car_id).await?.user_id)
    }
}

fn model_to_record(model: cars::Model) -> Result<CarRecord, CarRepositoryError> {
    Ok(CarRecord {
        id: model.id,
        user_id: model.user_id,
        brand: model.brand,
        model: model.model,
        year: model.year,
        condition: parse_condition(&model.condition)
            .map_err(|e| CarRepositoryError::SerializationError(e.to_string()))?,
        price: model.price,
        description: model.description,
        images: from_json(&model.images)
            .map_err(|e| CarRepositoryError::SerializationError(e.to_string()))?,
        approved: model.approved,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
