use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::car::adapter::incoming::web::car_form::{
    collect_car_form, parse_condition, parse_price, parse_year, CarForm,
};
use crate::car::application::use_cases::create_car::{CreateCarError, CreateCarInput};
use crate::shared::api::{ApiResponse, FieldError};
use crate::shared::upload::{upload_error_response, UploadConfig};
use crate::AppState;

fn build_input(form: CarForm, owner_id: uuid::Uuid) -> Result<CreateCarInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    let brand = form.brand.unwrap_or_default();
    if brand.is_empty() {
        errors.push(FieldError::new("brand", "Brand is required"));
    }

    let model = form.model.unwrap_or_default();
    if model.is_empty() {
        errors.push(FieldError::new("model", "Model is required"));
    }

    let year = match form.year.as_deref().map(parse_year) {
        Some(Some(year)) => Some(year),
        _ => {
            errors.push(FieldError::new("year", "Valid year required"));
            None
        }
    };

    let condition = match form.condition.as_deref().map(parse_condition) {
        Some(Some(condition)) => Some(condition),
        _ => {
            errors.push(FieldError::new("condition", "Valid condition required"));
            None
        }
    };

    let price = match form.price.as_deref().map(parse_price) {
        Some(Some(price)) => Some(price),
        _ => {
            errors.push(FieldError::new("price", "Valid price required"));
            None
        }
    };

    let description = form.description.unwrap_or_default();
    if description.is_empty() {
        errors.push(FieldError::new("description", "Description is required"));
    }

    match (year, condition, price) {
        (Some(year), Some(condition), Some(price)) if errors.is_empty() => Ok(CreateCarInput {
            owner_id,
            brand,
            model,
            year,
            condition,
            price,
            description,
            images: form.images,
        }),
        _ => Err(errors),
    }
}

fn map_create_error(err: CreateCarError) -> HttpResponse {
    match err {
        CreateCarError::InvalidBrand(msg) => {
            ApiResponse::validation_failed(vec![FieldError::new("brand", &msg)])
        }
        CreateCarError::InvalidModel(msg) => {
            ApiResponse::validation_failed(vec![FieldError::new("model", &msg)])
        }
        CreateCarError::InvalidYear(msg) => {
            ApiResponse::validation_failed(vec![FieldError::new("year", &msg)])
        }
        CreateCarError::InvalidPrice(msg) => {
            ApiResponse::validation_failed(vec![FieldError::new("price", &msg)])
        }
        CreateCarError::InvalidDescription(msg) => {
            ApiResponse::validation_failed(vec![FieldError::new("description", &msg)])
        }
        CreateCarError::MissingImages => {
            ApiResponse::bad_request("At least one image is required")
        }
        CreateCarError::RepositoryError(msg) => {
            error!("Failed to create car: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/cars")]
pub async fn create_car_handler(
    user: AuthenticatedUser,
    mut payload: Multipart,
    data: web::Data<AppState>,
    upload: web::Data<UploadConfig>,
) -> impl Responder {
    let form = match collect_car_form(&mut payload, &upload).await {
        Ok(form) => form,
        Err(e) => return upload_error_response(&e),
    };

    let input = match build_input(form, user.id) {
        Ok(input) => input,
        Err(errors) => return ApiResponse::validation_failed(errors),
    };

    match data.car.create.execute(input).await {
        Ok(car) => {
            info!(car_id = %car.id, user_id = %user.id, "Car created");
            ApiResponse::created("Car created successfully", car)
        }

        Err(e) => map_create_error(e),
    }
}
