use async_trait::async_trait;
use uuid::Uuid;

use crate::car::application::domain::entities::{max_car_year, CarCondition, MIN_CAR_YEAR};
use crate::car::application::ports::outgoing::car_repository::{
    CarRecord, CarRepository, CarRepositoryError, NewCar,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCarError {
    #[error("{0}")]
    InvalidBrand(String),

    #[error("{0}")]
    InvalidModel(String),

    #[error("{0}")]
    InvalidYear(String),

    #[error("{0}")]
    InvalidPrice(String),

    #[error("{0}")]
    InvalidDescription(String),

    #[error("At least one image is required")]
    MissingImages,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct CreateCarInput {
    pub owner_id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub condition: CarCondition,
    pub price: f64,
    pub description: String,
    pub images: Vec<String>,
}

#[async_trait]
pub trait ICreateCarUseCase: Send + Sync {
    async fn execute(&self, input: CreateCarInput) -> Result<CarRecord, CreateCarError>;
}

pub struct CreateCarUseCase<R>
where
    R: CarRepository,
{
    repository: R,
}

impl<R> CreateCarUseCase<R>
where
    R: CarRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

pub(super) fn validate_year(year: i32) -> Result<(), String> {
    let max = max_car_year();
    if year < MIN_CAR_YEAR || year > max {
        return Err(format!("Year must be between {} and {}", MIN_CAR_YEAR, max));
    }
    Ok(())
}

pub(super) fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price < 0.0 {
        return Err("Price must be a positive number".to_string());
    }
    Ok(())
}

#[async_trait]
impl<R> ICreateCarUseCase for CreateCarUseCase<R>
where
    R: CarRepository + Send + Sync,
{
    async fn execute(&self, input: CreateCarInput) -> Result<CarRecord, CreateCarError> {
        let brand = input.brand.trim().to_string();
        if brand.is_empty() {
            return Err(CreateCarError::InvalidBrand("Brand is required".to_string()));
        }

        let model = input.model.trim().to_string();
        if model.is_empty() {
            return Err(CreateCarError::InvalidModel("Model is required".to_string()));
        }

        validate_year(input.year).map_err(CreateCarError::InvalidYear)?;
        validate_price(input.price).map_err(CreateCarError::InvalidPrice)?;

        let description = input.description.trim().to_string();
        if description.is_empty() {
            return Err(CreateCarError::InvalidDescription(
                "Description is required".to_string(),
            ));
        }

        if input.images.is_empty() {
            return Err(CreateCarError::MissingImages);
        }

        // `NewCar` has no approval field, so no caller can self-approve.
        self.repository
            .insert(NewCar {
                user_id: input.owner_id,
                brand,
                model,
                year: input.year,
                condition: input.condition,
                price: input.price,
                description,
                images: input.images,
            })
            .await
            .map_err(|e| CreateCarError::RepositoryError(e.to_string()))
    }
}
