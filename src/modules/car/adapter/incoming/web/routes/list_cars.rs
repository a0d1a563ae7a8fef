use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::car::application::domain::entities::CarCondition;
use crate::car::application::ports::outgoing::car_query::{CarListFilter, CarSummaryView};
use crate::car::application::use_cases::list_cars::ListCarsError;
use crate::shared::api::{ApiResponse, PageRequest, Pagination};
use crate::AppState;

const DEFAULT_CAR_PAGE_LIMIT: u32 = 12;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCarsQuery {
    pub brand: Option<String>,
    pub condition: Option<CarCondition>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub year: Option<i32>,
    pub approved: Option<bool>,

    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub limit: u32,
}

impl From<ListCarsQuery> for (CarListFilter, PageRequest) {
    fn from(q: ListCarsQuery) -> Self {
        let filter = CarListFilter {
            brand: q.brand,
            condition: q.condition,
            min_price: q.min_price,
            max_price: q.max_price,
            year: q.year,
            // The public listing shows approved cars unless asked otherwise
            approved: Some(q.approved.unwrap_or(true)),
        };

        let page = PageRequest::clamped(q.page, q.limit, DEFAULT_CAR_PAGE_LIMIT);

        (filter, page)
    }
}

#[derive(Serialize, Deserialize)]
pub struct CarListData {
    pub cars: Vec<CarSummaryView>,
    pub pagination: Pagination,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/api/cars")]
pub async fn list_cars_handler(
    query: web::Query<ListCarsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = query.into_inner().into();

    match data.car.list.execute(filter, page).await {
        Ok(result) => {
            let pagination = result.pagination();
            ApiResponse::success(CarListData {
                cars: result.items,
                pagination,
            })
        }

        Err(ListCarsError::QueryFailed(msg)) => {
            error!("Failed to list cars: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::Value as JsonValue;
    use uuid::Uuid;

    use crate::car::application::ports::outgoing::car_query::CarOwnerView;
    use crate::car::application::use_cases::list_cars::IListCarsUseCase;
    use crate::shared::api::json_config::custom_query_config;
    use crate::shared::api::PageResult;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    /* --------------------------------------------------
     * Mock ListCars Use Case
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockListCarsUseCase {
        result: Result<PageResult<CarSummaryView>, ListCarsError>,
        seen_filter: std::sync::Arc<std::sync::Mutex<Option<CarListFilter>>>,
    }

    impl MockListCarsUseCase {
        fn success(result: PageResult<CarSummaryView>) -> Self {
            Self {
                result: Ok(result),
                seen_filter: Default::default(),
            }
        }

        fn error(err: ListCarsError) -> Self {
            Self {
                result: Err(err),
                seen_filter: Default::default(),
            }
        }
    }

    #[async_trait]
    impl IListCarsUseCase for MockListCarsUseCase {
        async fn execute(
            &self,
            filter: CarListFilter,
            _page: PageRequest,
        ) -> Result<PageResult<CarSummaryView>, ListCarsError> {
            *self.seen_filter.lock().unwrap() = Some(filter);
            self.result.clone()
        }
    }

    fn sample_car() -> CarSummaryView {
        CarSummaryView {
            id: Uuid::new_v4(),
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2021,
            condition: CarCondition::PreOwned,
            price: 15000.0,
            description: "Clean one-owner car".to_string(),
            images: vec!["/uploads/images-1.jpg".to_string()],
            approved: true,
            user: CarOwnerView {
                id: Uuid::new_v4(),
                name: "Seller".to_string(),
                email: "seller@example.com".to_string(),
            },
            gallery_count: 2,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_page() -> PageResult<CarSummaryView> {
        PageResult {
            items: vec![sample_car()],
            page: 1,
            limit: 12,
            total: 25,
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[actix_web::test]
    async fn test_list_cars_success_shape() {
        let app_state = TestAppStateBuilder::default()
            .with_list_cars(MockListCarsUseCase::success(sample_page()))
            .build();

        let app = test::init_service(
            App::new().app_data(app_state).service(list_cars_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/cars").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["cars"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["cars"][0]["galleryCount"], 2);
        assert_eq!(body["data"]["pagination"]["total"], 25);
        assert_eq!(body["data"]["pagination"]["totalPages"], 3);
        assert_eq!(body["data"]["pagination"]["hasNext"], true);
        assert_eq!(body["data"]["pagination"]["hasPrev"], false);
    }

    #[actix_web::test]
    async fn test_list_cars_defaults_to_approved_filter() {
        let mock = MockListCarsUseCase::success(sample_page());
        let seen = mock.seen_filter.clone();

        let app_state = TestAppStateBuilder::default().with_list_cars(mock).build();

        let app = test::init_service(
            App::new().app_data(app_state).service(list_cars_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/cars").to_request();
        test::call_service(&app, req).await;

        let filter = seen.lock().unwrap().clone().unwrap();
        assert_eq!(filter.approved, Some(true));
        assert!(filter.brand.is_none());
    }

    #[actix_web::test]
    async fn test_list_cars_passes_filters_through() {
        let mock = MockListCarsUseCase::success(sample_page());
        let seen = mock.seen_filter.clone();

        let app_state = TestAppStateBuilder::default().with_list_cars(mock).build();

        let app = test::init_service(
            App::new().app_data(app_state).service(list_cars_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/cars?brand=toy&condition=PRE_OWNED&minPrice=1000&maxPrice=20000&year=2021&approved=false")
            .to_request();
        test::call_service(&app, req).await;

        let filter = seen.lock().unwrap().clone().unwrap();
        assert_eq!(filter.brand.as_deref(), Some("toy"));
        assert_eq!(filter.condition, Some(CarCondition::PreOwned));
        assert_eq!(filter.min_price, Some(1000.0));
        assert_eq!(filter.max_price, Some(20000.0));
        assert_eq!(filter.year, Some(2021));
        assert_eq!(filter.approved, Some(false));
    }

    #[actix_web::test]
    async fn test_list_cars_invalid_condition_is_400() {
        let app_state = TestAppStateBuilder::default()
            .with_list_cars(MockListCarsUseCase::success(sample_page()))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_query_config())
                .service(list_cars_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/cars?condition=USED")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_list_cars_query_failure_is_500() {
        let app_state = TestAppStateBuilder::default()
            .with_list_cars(MockListCarsUseCase::error(ListCarsError::QueryFailed(
                "db down".to_string(),
            )))
            .build();

        let app = test::init_service(
            App::new().app_data(app_state).service(list_cars_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/cars").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn query_conversion_clamps_pagination() {
        let (_, page) = <(CarListFilter, PageRequest)>::from(ListCarsQuery {
            brand: None,
            condition: None,
            min_price: None,
            max_price: None,
            year: None,
            approved: None,
            page: 0,
            limit: 500,
        });

        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 50);
    }
}
