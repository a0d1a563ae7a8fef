// src/modules/car/adapter/incoming/web/car_form.rs
//
// Multipart intake for the car create/update endpoints: text parts for the
// listing fields, any number of `images` file parts (up to the shared cap).
use actix_multipart::Multipart;
use futures::TryStreamExt;
use std::str::FromStr;

use crate::car::application::domain::entities::CarCondition;
use crate::shared::upload::{
    read_text_field, save_image_field, UploadConfig, UploadError, MAX_IMAGES_PER_REQUEST,
};

#[derive(Debug, Default)]
pub struct CarForm {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub condition: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    /// Public paths of the already-saved image files, in submission order.
    pub images: Vec<String>,
}

pub async fn collect_car_form(
    payload: &mut Multipart,
    upload: &UploadConfig,
) -> Result<CarForm, UploadError> {
    let mut form = CarForm::default();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| UploadError::Malformed(e.to_string()))?
    {
        match field.name() {
            "images" => {
                if form.images.len() >= MAX_IMAGES_PER_REQUEST {
                    return Err(UploadError::TooManyFiles(MAX_IMAGES_PER_REQUEST));
                }
                form.images.push(save_image_field(upload, &mut field).await?);
            }
            "brand" => form.brand = Some(read_text_field(&mut field).await?),
            "model" => form.model = Some(read_text_field(&mut field).await?),
            "year" => form.year = Some(read_text_field(&mut field).await?),
            "condition" => form.condition = Some(read_text_field(&mut field).await?),
            "price" => form.price = Some(read_text_field(&mut field).await?),
            "description" => form.description = Some(read_text_field(&mut field).await?),
            _ => {
                // Drain unknown parts without keeping them
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

pub fn parse_year(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

pub fn parse_condition(raw: &str) -> Option<CarCondition> {
    CarCondition::from_str(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_parsing_tolerates_whitespace() {
        assert_eq!(parse_year(" 2021 "), Some(2021));
        assert_eq!(parse_year("twenty"), None);
    }

    #[test]
    fn price_parsing_accepts_decimals() {
        assert_eq!(parse_price("15000.50"), Some(15000.50));
        assert_eq!(parse_price("free"), None);
    }

    #[test]
    fn condition_parsing_uses_wire_values() {
        assert_eq!(parse_condition("PRE_OWNED"), Some(CarCondition::PreOwned));
        assert_eq!(parse_condition("used"), None);
    }
}
