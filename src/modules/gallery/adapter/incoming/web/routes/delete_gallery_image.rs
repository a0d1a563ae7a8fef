use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::gallery::application::use_cases::delete_gallery_image::DeleteGalleryImageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/gallery/{id}")]
pub async fn delete_gallery_image_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let image_id = path.into_inner();

    match data
        .gallery
        .delete
        .execute(user.identity(), image_id)
        .await
    {
        Ok(()) => {
            info!(image_id = %image_id, user_id = %user.id, "Gallery image deleted");
            ApiResponse::success_message("Gallery image deleted successfully")
        }

        Err(DeleteGalleryImageError::ImageNotFound) => {
            ApiResponse::not_found("Gallery image not found")
        }

        Err(DeleteGalleryImageError::AccessDenied) => {
            ApiResponse::forbidden("You do not have permission to delete this image")
        }

        Err(DeleteGalleryImageError::RepositoryError(msg)) => {
            error!(image_id = %image_id, "Failed to delete gallery image: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
