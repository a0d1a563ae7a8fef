use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::car::adapter::incoming::web::routes::list_cars::CarListData;
use crate::car::application::use_cases::fetch_my_cars::FetchMyCarsError;
use crate::shared::api::{ApiResponse, PageRequest};
use crate::AppState;

const DEFAULT_MY_CARS_PAGE_LIMIT: u32 = 12;

#[derive(Debug, Deserialize)]
pub struct MyCarsQuery {
    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub limit: u32,
}

/// The caller's own listings, approved or not.
#[get("/api/cars/user/my-cars")]
pub async fn my_cars_handler(
    user: AuthenticatedUser,
    query: web::Query<MyCarsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = PageRequest::clamped(query.page, query.limit, DEFAULT_MY_CARS_PAGE_LIMIT);

    match data.car.my_cars.execute(user.id, page).await {
        Ok(result) => {
            let pagination = result.pagination();
            ApiResponse::success(CarListData {
                cars: result.items,
                pagination,
            })
        }

        Err(FetchMyCarsError::QueryFailed(msg)) => {
            error!(user_id = %user.id, "Failed to list own cars: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value as JsonValue;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::car::application::ports::outgoing::car_query::CarSummaryView;
    use crate::car::application::use_cases::fetch_my_cars::IFetchMyCarsUseCase;
    use crate::shared::api::PageResult;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{jwt_service, token_for};
    use crate::tests::support::stubs::test_user;

    #[derive(Clone)]
    struct MockFetchMyCarsUseCase {
        result: Result<PageResult<CarSummaryView>, FetchMyCarsError>,
        seen_user: Arc<std::sync::Mutex<Option<Uuid>>>,
    }

    #[async_trait]
    impl IFetchMyCarsUseCase for MockFetchMyCarsUseCase {
        async fn execute(
            &self,
            user_id: Uuid,
            _page: PageRequest,
        ) -> Result<PageResult<CarSummaryView>, FetchMyCarsError> {
            *self.seen_user.lock().unwrap() = Some(user_id);
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_my_cars_scopes_to_caller() {
        let user_id = Uuid::new_v4();

        let mock = MockFetchMyCarsUseCase {
            result: Ok(PageResult {
                items: vec![],
                page: 1,
                limit: 12,
                total: 0,
            }),
            seen_user: Default::default(),
        };
        let seen = mock.seen_user.clone();

        let app_state = TestAppStateBuilder::default()
            .with_identity(test_user(user_id, UserRole::Owner))
            .with_fetch_my_cars(mock)
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service());

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(token_provider))
                .service(my_cars_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/cars/user/my-cars")
            .insert_header(("Authorization", format!("Bearer {}", token_for(user_id))))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["cars"].as_array().unwrap().len(), 0);
        assert_eq!(body["data"]["pagination"]["hasNext"], false);

        assert_eq!(seen.lock().unwrap().unwrap(), user_id);
    }

    #[actix_web::test]
    async fn test_my_cars_requires_authentication() {
        let mock = MockFetchMyCarsUseCase {
            result: Ok(PageResult {
                items: vec![],
                page: 1,
                limit: 12,
                total: 0,
            }),
            seen_user: Default::default(),
        };

        let app_state = TestAppStateBuilder::default()
            .with_fetch_my_cars(mock)
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service());

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(token_provider))
                .service(my_cars_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/cars/user/my-cars")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
