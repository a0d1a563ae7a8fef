use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{UserRole, UserView};
use crate::auth::application::use_cases::register_user::{
    RegisterUserError, RegisterUserInput,
};
use crate::shared::api::{ApiResponse, FieldError};
use crate::AppState;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    /// Display name
    #[schema(example = "John Doe")]
    pub name: String,

    /// Email address (unique)
    #[schema(example = "john@example.com")]
    pub email: String,

    /// Password (minimum 6 characters)
    #[schema(example = "SecurePass123")]
    pub password: String,

    /// OWNER (default), SHOP, VENDOR or ADMIN
    #[serde(default)]
    pub role: UserRole,

    pub phone: Option<String>,
    pub address: Option<String>,
    pub business_name: Option<String>,
    pub business_type: Option<String>,
    pub license_number: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    pub user: UserView,
    /// Bearer token for the new session
    pub token: String,
}

fn map_register_error(err: RegisterUserError, req: &RegisterUserRequest) -> HttpResponse {
    match &err {
        RegisterUserError::InvalidName(msg) => {
            warn!(email = %req.email, error = %err, "Invalid registration input");
            ApiResponse::validation_failed(vec![FieldError::new("name", msg)])
        }

        RegisterUserError::InvalidEmail(msg) => {
            warn!(email = %req.email, error = %err, "Invalid registration input");
            ApiResponse::validation_failed(vec![FieldError::new("email", msg)])
        }

        RegisterUserError::InvalidPassword(msg) => {
            warn!(email = %req.email, error = %err, "Invalid registration input");
            ApiResponse::validation_failed(vec![FieldError::new("password", msg)])
        }

        RegisterUserError::UserAlreadyExists => {
            warn!(email = %req.email, "User already exists");
            ApiResponse::bad_request("User already exists")
        }

        other => {
            error!(email = %req.email, error = %other, "Unhandled user registration error");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// OWNER registrations are verified immediately; SHOP and VENDOR accounts
/// wait for manual verification.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = RegisterUserResponse),
        (
            status = 400,
            description = "Validation error or duplicate email",
            example = json!({
                "success": false,
                "message": "Validation failed",
                "errors": [{"field": "email", "message": "Invalid email format"}]
            })
        ),
        (status = 500, description = "Internal server error"),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(email = %req.email, role = %req.role, "User registration attempt");

    let input = RegisterUserInput {
        name: req.name.clone(),
        email: req.email.clone(),
        password: req.password.clone(),
        role: req.role,
        phone: req.phone.clone(),
        address: req.address.clone(),
        business_name: req.business_name.clone(),
        business_type: req.business_type.clone(),
        license_number: req.license_number.clone(),
    };

    match data.register_user_use_case.execute(input).await {
        Ok(output) => {
            info!(user_id = %output.user.id, email = %output.user.email, "User created successfully");

            ApiResponse::created(
                "User created successfully",
                RegisterUserResponse {
                    user: output.user,
                    token: output.token,
                },
            )
        }

        Err(e) => map_register_error(e, &req),
    }
}
