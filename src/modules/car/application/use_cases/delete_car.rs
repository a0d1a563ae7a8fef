use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Identity;
use crate::car::application::ports::outgoing::car_repository::{
    CarRepository, CarRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCarError {
    #[error("Car not found")]
    CarNotFound,

    #[error("Access denied")]
    AccessDenied,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteCarUseCase: Send + Sync {
    async fn execute(&self, caller: Identity, car_id: Uuid) -> Result<(), DeleteCarError>;
}

pub struct DeleteCarUseCase<R>
where
    R: CarRepository,
{
    repository: R,
}

impl<R> DeleteCarUseCase<R>
where
    R: CarRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteCarUseCase for DeleteCarUseCase<R>
where
    R: CarRepository + Send + Sync,
{
    async fn execute(&self, caller: Identity, car_id: Uuid) -> Result<(), DeleteCarError> {
        let owner_id = self.repository.owner_id(car_id).await.map_err(|e| match e {
            CarRepositoryError::CarNotFound => DeleteCarError::CarNotFound,
            other => DeleteCarError::RepositoryError(other.to_string()),
        })?;

        if !caller.role.is_admin() && owner_id != caller.id {
            return Err(DeleteCarError::AccessDenied);
        }

        self.repository.delete(car_id).await.map_err(|e| match e {
            CarRepositoryError::CarNotFound => DeleteCarError::CarNotFound,
            other => DeleteCarError::RepositoryError(other.to_string()),
        })
    }
}
