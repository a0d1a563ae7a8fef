use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::gallery::application::ports::outgoing::gallery_query::GalleryImageView;
use crate::gallery::application::use_cases::list_gallery::ListGalleryError;
use crate::shared::api::{ApiResponse, PageRequest, Pagination};
use crate::AppState;

const DEFAULT_GALLERY_PAGE_LIMIT: u32 = 20;

#[derive(Debug, Deserialize)]
pub struct ListGalleryQuery {
    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub limit: u32,
}

#[derive(Serialize)]
pub struct GalleryListData {
    pub images: Vec<GalleryImageView>,
    pub pagination: Pagination,
}

#[get("/api/gallery")]
pub async fn list_gallery_handler(
    query: web::Query<ListGalleryQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = PageRequest::clamped(query.page, query.limit, DEFAULT_GALLERY_PAGE_LIMIT);

    match data.gallery.list.execute(page).await {
        Ok(result) => {
            let pagination = result.pagination();
            ApiResponse::success(GalleryListData {
                images: result.items,
                pagination,
            })
        }

        Err(ListGalleryError::QueryFailed(msg)) => {
            error!("Failed to list gallery: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
