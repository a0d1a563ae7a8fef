use async_trait::async_trait;
use uuid::Uuid;

use crate::car::application::ports::outgoing::car_repository::{
    CarRecord, CarRepository, CarRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApproveCarError {
    #[error("Car not found")]
    CarNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Flips the approval flag. The route is ADMIN-gated; this use case only
/// carries out the flip.
#[async_trait]
pub trait IApproveCarUseCase: Send + Sync {
    async fn execute(&self, car_id: Uuid, approved: bool) -> Result<CarRecord, ApproveCarError>;
}

pub struct ApproveCarUseCase<R>
where
    R: CarRepository,
{
    repository: R,
}

impl<R> ApproveCarUseCase<R>
where
    R: CarRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IApproveCarUseCase for ApproveCarUseCase<R>
where
    R: CarRepository + Send + Sync,
{
    async fn execute(&self, car_id: Uuid, approved: bool) -> Result<CarRecord, ApproveCarError> {
        self.repository
            .set_approved(car_id, approved)
            .await
            .map_err(|e| match e {
                CarRepositoryError::CarNotFound => ApproveCarError::CarNotFound,
                other => ApproveCarError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;

    use crate::car::application::domain::entities::CarCondition;
    use crate::car::application::ports::outgoing::car_repository::{CarUpdate, NewCar};

    struct MockCarRepository {
        missing: bool,
    }

    #[async_trait]
    impl CarRepository for MockCarRepository {
        async fn insert(&self, _car: NewCar) -> Result<CarRecord, CarRepositoryError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _car_id: Uuid,
            _update: CarUpdate,
        ) -> Result<CarRecord, CarRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _car_id: Uuid) -> Result<(), CarRepositoryError> {
            unimplemented!()
        }

        async fn set_approved(
            &self,
            car_id: Uuid,
            approved: bool,
        ) -> Result<CarRecord, CarRepositoryError> {
            if self.missing {
                return Err(CarRepositoryError::CarNotFound);
            }
            Ok(CarRecord {
                id: car_id,
                user_id: Uuid::new_v4(),
                brand: "Toyota".to_string(),
                model: "Corolla".to_string(),
                year: 2021,
                condition: CarCondition::PreOwned,
                price: 15000.0,
                description: "Clean one-owner car".to_string(),
                images: vec!["/uploads/images-1.jpg".to_string()],
                approved,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }

        async fn owner_id(&self, _car_id: Uuid) -> Result<Uuid, CarRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn approval_flag_is_applied() {
        let use_case = ApproveCarUseCase::new(MockCarRepository { missing: false });

        let approved = use_case.execute(Uuid::new_v4(), true).await.unwrap();
        assert!(approved.approved);

        let rejected = use_case.execute(Uuid::new_v4(), false).await.unwrap();
        assert!(!rejected.approved);
    }

    #[tokio::test]
    async fn missing_car_maps_to_not_found() {
        let use_case = ApproveCarUseCase::new(MockCarRepository { missing: true });

        let result = use_case.execute(Uuid::new_v4(), true).await;
        assert!(matches!(result, Err(ApproveCarError::CarNotFound)));
    }
}
