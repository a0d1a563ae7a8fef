use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::admin::application::use_cases::delete_user::DeleteUserError;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/users/{id}")]
pub async fn admin_delete_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.admin.delete_user.execute(user_id).await {
        Ok(()) => {
            info!(user_id = %user_id, admin_id = %admin.id, "User deleted");
            ApiResponse::success_message("User deleted successfully")
        }

        Err(DeleteUserError::UserNotFound) => ApiResponse::not_found("User not found"),

        Err(DeleteUserError::AdminUserProtected) => {
            ApiResponse::bad_request("Cannot delete admin users")
        }

        Err(DeleteUserError::RepositoryError(msg)) => {
            error!(user_id = %user_id, "Failed to delete user: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
