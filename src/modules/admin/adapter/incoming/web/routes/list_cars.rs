use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::car::adapter::incoming::web::routes::list_cars::CarListData;
use crate::car::application::ports::outgoing::car_query::CarListFilter;
use crate::car::application::use_cases::list_cars::ListCarsError;
use crate::shared::api::{ApiResponse, PageRequest};
use crate::AppState;

const DEFAULT_ADMIN_CAR_PAGE_LIMIT: u32 = 20;

/// Moderation listing: unlike the public endpoint there is no implicit
/// approved filter, so pending cars show up too.
#[derive(Debug, Deserialize)]
pub struct AdminListCarsQuery {
    pub approved: Option<bool>,
    pub brand: Option<String>,

    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub limit: u32,
}

#[get("/api/admin/cars")]
pub async fn admin_list_cars_handler(
    _admin: AdminUser,
    query: web::Query<AdminListCarsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::clamped(query.page, query.limit, DEFAULT_ADMIN_CAR_PAGE_LIMIT);
    let filter = CarListFilter {
        brand: query.brand,
        approved: query.approved,
        ..Default::default()
    };

    match data.car.list.execute(filter, page).await {
        Ok(result) => {
            let pagination = result.pagination();
            ApiResponse::success(CarListData {
                cars: result.items,
                pagination,
            })
        }

        Err(ListCarsError::QueryFailed(msg)) => {
            error!("Failed to list cars for moderation: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
