use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use futures::TryStreamExt;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::gallery::application::use_cases::add_gallery_image::AddGalleryImageError;
use crate::shared::api::{ApiResponse, FieldError};
use crate::shared::upload::{
    read_text_field, save_image_field, upload_error_response, UploadConfig, UploadError,
};
use crate::AppState;

struct GalleryForm {
    car_id: Option<String>,
    image: Option<String>,
}

async fn collect_gallery_form(
    payload: &mut Multipart,
    upload: &UploadConfig,
) -> Result<GalleryForm, UploadError> {
    let mut form = GalleryForm {
        car_id: None,
        image: None,
    };

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| UploadError::Malformed(e.to_string()))?
    {
        match field.name() {
            "image" => {
                if form.image.is_some() {
                    return Err(UploadError::TooManyFiles(1));
                }
                form.image = Some(save_image_field(upload, &mut field).await?);
            }
            "carId" => form.car_id = Some(read_text_field(&mut field).await?),
            _ => {
                while field
                    .try_next()
                    .await
                    .map_err(|e| UploadError::Malformed(e.to_string()))?
                    .is_some()
                {}
            }
        }
    }

    Ok(form)
}

#[post("/api/gallery")]
pub async fn upload_gallery_image_handler(
    user: AuthenticatedUser,
    mut payload: Multipart,
    data: web::Data<AppState>,
    upload: web::Data<UploadConfig>,
) -> impl Responder {
    let form = match collect_gallery_form(&mut payload, &upload).await {
        Ok(form) => form,
        Err(e) => return upload_error_response(&e),
    };

    let car_id = match form.car_id.as_deref().map(|raw| raw.parse::<Uuid>()) {
        Some(Ok(car_id)) => car_id,
        _ => {
            return ApiResponse::validation_failed(vec![FieldError::new(
                "carId",
                "Car ID is required",
            )])
        }
    };

    let Some(image_url) = form.image else {
        return ApiResponse::bad_request("No image file provided");
    };

    match data
        .gallery
        .add
        .execute(user.identity(), car_id, image_url)
        .await
    {
        Ok(image) => {
            info!(car_id = %car_id, user_id = %user.id, "Gallery image uploaded");
            ApiResponse::created("Image uploaded to gallery successfully", image)
        }

        Err(AddGalleryImageError::CarNotOwned) => {
            ApiResponse::not_found("Car not found or you do not own this car")
        }

        Err(AddGalleryImageError::RepositoryError(msg)) => {
            error!(car_id = %car_id, "Failed to upload gallery image: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
