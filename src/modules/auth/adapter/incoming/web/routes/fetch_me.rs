use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current user profile
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Profile of the authenticated user"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User no longer exists"),
    )
)]
#[get("/api/auth/me")]
pub async fn fetch_me_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.fetch_profile_use_case.execute(user.id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(FetchProfileError::UserNotFound) => ApiResponse::not_found("User not found"),

        Err(FetchProfileError::QueryError(msg)) => {
            error!(user_id = %user.id, "Failed to fetch profile: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
