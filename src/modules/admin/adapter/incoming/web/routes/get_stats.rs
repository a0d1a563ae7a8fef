use actix_web::{get, web, Responder};
use tracing::error;

use crate::admin::application::use_cases::fetch_stats::FetchStatsError;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/stats")]
pub async fn get_stats_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.admin.stats.execute().await {
        Ok(stats) => ApiResponse::success(stats),

        Err(FetchStatsError::QueryFailed(msg)) => {
            error!("Failed to compute admin stats: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
