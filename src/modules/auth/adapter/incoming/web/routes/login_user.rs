use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserView;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LoginResponseData {
    pub user: UserView,
    pub token: String,
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseData),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Invalid credentials"),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();
    let email = request.email().to_string();

    match data.login_user_use_case.execute(request).await {
        Ok(response) => {
            info!(email = %email, "Login successful");

            ApiResponse::success_with_message(
                "Login successful",
                LoginResponseData {
                    user: response.user,
                    token: response.token,
                },
            )
        }

        Err(LoginError::InvalidCredentials) => {
            warn!(email = %email, "Login rejected");
            ApiResponse::unauthorized("Invalid credentials")
        }

        Err(e) => {
            error!(email = %email, error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
