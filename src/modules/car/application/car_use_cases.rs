use std::sync::Arc;

use crate::car::application::use_cases::approve_car::IApproveCarUseCase;
use crate::car::application::use_cases::create_car::ICreateCarUseCase;
use crate::car::application::use_cases::delete_car::IDeleteCarUseCase;
use crate::car::application::use_cases::fetch_car::IFetchCarUseCase;
use crate::car::application::use_cases::fetch_my_cars::IFetchMyCarsUseCase;
use crate::car::application::use_cases::list_cars::IListCarsUseCase;
use crate::car::application::use_cases::update_car::IUpdateCarUseCase;

/// Car use cases wired into `AppState`.
#[derive(Clone)]
pub struct CarUseCases {
    pub list: Arc<dyn IListCarsUseCase + Send + Sync>,
    pub get_single: Arc<dyn IFetchCarUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateCarUseCase + Send + Sync>,
    pub update: Arc<dyn IUpdateCarUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteCarUseCase + Send + Sync>,
    pub my_cars: Arc<dyn IFetchMyCarsUseCase + Send + Sync>,
    pub approve: Arc<dyn IApproveCarUseCase + Send + Sync>,
}
