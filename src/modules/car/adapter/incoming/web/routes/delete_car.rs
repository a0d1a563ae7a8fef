use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::car::application::use_cases::delete_car::DeleteCarError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/cars/{id}")]
pub async fn delete_car_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let car_id = path.into_inner();

    match data.car.delete.execute(user.identity(), car_id).await {
        Ok(()) => {
            info!(car_id = %car_id, user_id = %user.id, "Car deleted");
            ApiResponse::success_message("Car deleted successfully")
        }

        Err(DeleteCarError::CarNotFound) => ApiResponse::not_found("Car not found"),

        Err(DeleteCarError::AccessDenied) => ApiResponse::forbidden("Access denied"),

        Err(DeleteCarError::RepositoryError(msg)) => {
            error!(car_id = %car_id, "Failed to delete car: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
