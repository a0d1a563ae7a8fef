use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::car::application::use_cases::delete_car::DeleteCarError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admins can remove any listing.
#[delete("/api/admin/cars/{id}")]
pub async fn admin_delete_car_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let car_id = path.into_inner();

    match data.car.delete.execute(admin.identity(), car_id).await {
        Ok(()) => {
            info!(car_id = %car_id, admin_id = %admin.id, "Car deleted by admin");
            ApiResponse::success_message("Car deleted successfully")
        }

        Err(DeleteCarError::CarNotFound) => ApiResponse::not_found("Car not found"),

        // Unreachable for an admin caller, but mapped anyway
        Err(DeleteCarError::AccessDenied) => ApiResponse::forbidden("Access denied"),

        Err(DeleteCarError::RepositoryError(msg)) => {
            error!(car_id = %car_id, "Failed to delete car: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
