use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Identity;
use crate::car::application::domain::entities::CarCondition;
use crate::car::application::ports::outgoing::car_repository::{
    CarRecord, CarRepository, CarRepositoryError, CarUpdate,
};
use crate::car::application::use_cases::create_car::{validate_price, validate_year};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCarError {
    #[error("Car not found")]
    CarNotFound,

    #[error("Access denied")]
    AccessDenied,

    #[error("{0}")]
    InvalidBrand(String),

    #[error("{0}")]
    InvalidModel(String),

    #[error("{0}")]
    InvalidYear(String),

    #[error("{0}")]
    InvalidPrice(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Partial replacement; omitted fields stay untouched. A supplied image set
/// replaces the previous one wholesale.
#[derive(Debug, Clone, Default)]
pub struct UpdateCarInput {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub condition: Option<CarCondition>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
}

#[async_trait]
pub trait IUpdateCarUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Identity,
        car_id: Uuid,
        input: UpdateCarInput,
    ) -> Result<CarRecord, UpdateCarError>;
}

pub struct UpdateCarUseCase<R>
where
    R: CarRepository,
{
    repository: R,
}

impl<R> UpdateCarUseCase<R>
where
    R: CarRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateCarUseCase for UpdateCarUseCase<R>
where
    R: CarRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Identity,
        car_id: Uuid,
        input: UpdateCarInput,
    ) -> Result<CarRecord, UpdateCarError> {
        let owner_id = self.repository.owner_id(car_id).await.map_err(|e| match e {
            CarRepositoryError::CarNotFound => UpdateCarError::CarNotFound,
            other => UpdateCarError::RepositoryError(other.to_string()),
        })?;

        if !caller.role.is_admin() && owner_id != caller.id {
            return Err(UpdateCarError::AccessDenied);
        }

        let brand = match input.brand {
            Some(b) => {
                let b = b.trim().to_string();
                if b.is_empty() {
                    return Err(UpdateCarError::InvalidBrand(
                        "Brand cannot be empty".to_string(),
                    ));
                }
                Some(b)
            }
            None => None,
        };

        let model = match input.model {
            Some(m) => {
                let m = m.trim().to_string();
                if m.is_empty() {
                    return Err(UpdateCarError::InvalidModel(
                        "Model cannot be empty".to_string(),
                    ));
                }
                Some(m)
            }
            None => None,
        };

        if let Some(year) = input.year {
            validate_year(year).map_err(UpdateCarError::InvalidYear)?;
        }

        if let Some(price) = input.price {
            validate_price(price).map_err(UpdateCarError::InvalidPrice)?;
        }

        self.repository
            .update(
                car_id,
                CarUpdate {
                    brand,
                    model,
                    year: input.year,
                    condition: input.condition,
                    price: input.price,
                    description: input.description,
                    images: input.images,
                },
            )
            .await
            .map_err(|e| match e {
                CarRepositoryError::CarNotFound => UpdateCarError::CarNotFound,
                other => UpdateCarError::RepositoryError(other.to_string()),
            })
    }
}
