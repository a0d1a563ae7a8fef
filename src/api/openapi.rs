use crate::api::schemas::{ErrorResponse, FieldErrorSchema, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginResponseData, RegisterUserRequest, RegisterUserResponse,
};
use crate::auth::application::use_cases::fetch_profile::ProfileView;
use crate::auth::application::use_cases::login_user::LoginRequest;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Car Marketplace API",
        version = "1.0.0",
        description = "API documentation for the car marketplace backend",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_me::fetch_me_handler,

        // Car endpoints
        // list_cars_handler,
        // get_car_handler,
        // create_car_handler,
        // update_car_handler,
        // delete_car_handler,
        // my_cars_handler,

        // Gallery endpoints
        // list_gallery_handler,
        // upload_gallery_image_handler,
        // delete_gallery_image_handler,

        // Admin endpoints
        // get_stats_handler,
        // admin_list_users_handler,
        // admin_list_cars_handler,
        // approve_car_handler,
        // admin_delete_user_handler,
        // admin_delete_car_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisterUserResponse>,
            ErrorResponse,
            FieldErrorSchema,

            // Auth DTOs
            RegisterUserRequest,
            RegisterUserResponse,
            LoginRequest,
            LoginResponseData,
            ProfileView
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "cars", description = "Car listing endpoints"),
        (name = "gallery", description = "Gallery endpoints"),
        (name = "admin", description = "Admin moderation endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
