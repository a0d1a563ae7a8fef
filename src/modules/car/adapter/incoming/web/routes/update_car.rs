use actix_multipart::Multipart;
use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::car::adapter::incoming::web::car_form::{
    collect_car_form, parse_condition, parse_price, parse_year, CarForm,
};
use crate::car::application::use_cases::update_car::{UpdateCarError, UpdateCarInput};
use crate::shared::api::{ApiResponse, FieldError};
use crate::shared::upload::{upload_error_response, UploadConfig};
use crate::AppState;

fn build_input(form: CarForm) -> Result<UpdateCarInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    let year = match form.year.as_deref() {
        Some(raw) => match parse_year(raw) {
            Some(year) => Some(year),
            None => {
                errors.push(FieldError::new("year", "Valid year required"));
                None
            }
        },
        None => None,
    };

    let condition = match form.condition.as_deref() {
        Some(raw) => match parse_condition(raw) {
            Some(condition) => Some(condition),
            None => {
                errors.push(FieldError::new("condition", "Valid condition required"));
                None
            }
        },
        None => None,
    };

    let price = match form.price.as_deref() {
        Some(raw) => match parse_price(raw) {
            Some(price) => Some(price),
            None => {
                errors.push(FieldError::new("price", "Valid price required"));
                None
            }
        },
        None => None,
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UpdateCarInput {
        brand: form.brand,
        model: form.model,
        year,
        condition,
        price,
        description: form.description,
        // No uploaded files means "keep the current image list"
        images: if form.images.is_empty() {
            None
        } else {
            Some(form.images)
        },
    })
}

fn map_update_error(err: UpdateCarError, car_id: Uuid) -> HttpResponse {
    match err {
        UpdateCarError::CarNotFound => ApiResponse::not_found("Car not found"),
        UpdateCarError::AccessDenied => ApiResponse::forbidden("Access denied"),
        UpdateCarError::InvalidBrand(msg) => {
            ApiResponse::validation_failed(vec![FieldError::new("brand", &msg)])
        }
        UpdateCarError::InvalidModel(msg) => {
            ApiResponse::validation_failed(vec![FieldError::new("model", &msg)])
        }
        UpdateCarError::InvalidYear(msg) => {
            ApiResponse::validation_failed(vec![FieldError::new("year", &msg)])
        }
        UpdateCarError::InvalidPrice(msg) => {
            ApiResponse::validation_failed(vec![FieldError::new("price", &msg)])
        }
        UpdateCarError::RepositoryError(msg) => {
            error!(car_id = %car_id, "Failed to update car: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/cars/{id}")]
pub async fn update_car_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    mut payload: Multipart,
    data: web::Data<AppState>,
    upload: web::Data<UploadConfig>,
) -> impl Responder {
    let car_id = path.into_inner();

    let form = match collect_car_form(&mut payload, &upload).await {
        Ok(form) => form,
        Err(e) => return upload_error_response(&e),
    };

    let input = match build_input(form) {
        Ok(input) => input,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.car.update.execute(user.identity(), car_id, input).await {
        Ok(car) => {
            info!(car_id = %car_id, user_id = %user.id, "Car updated");
            ApiResponse::success_with_message("Car updated successfully", car)
        }

        Err(e) => map_update_error(e, car_id),
    }
}
