use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::car::application::use_cases::fetch_car::FetchCarError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/cars/{id}")]
pub async fn get_car_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let car_id = path.into_inner();

    match data.car.get_single.execute(car_id).await {
        Ok(car) => ApiResponse::success(car),

        Err(FetchCarError::NotFound) => ApiResponse::not_found("Car not found"),

        Err(FetchCarError::QueryFailed(msg)) => {
            error!(car_id = %car_id, "Failed to fetch car: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
