use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::car::application::use_cases::approve_car::ApproveCarError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ApproveCarRequest {
    pub approved: bool,
}

#[put("/api/admin/cars/{id}/approve")]
pub async fn approve_car_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ApproveCarRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let car_id = path.into_inner();

    match data.car.approve.execute(car_id, req.approved).await {
        Ok(car) => {
            info!(car_id = %car_id, admin_id = %admin.id, approved = req.approved, "Car moderated");

            let message = if req.approved {
                "Car approved successfully"
            } else {
                "Car rejected successfully"
            };
            ApiResponse::success_with_message(message, car)
        }

        Err(ApproveCarError::CarNotFound) => ApiResponse::not_found("Car not found"),

        Err(ApproveCarError::RepositoryError(msg)) => {
            error!(car_id = %car_id, "Failed to moderate car: {}", msg);
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
    use std::sync::Arc;

    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::car::application::domain::entities::CarCondition;
    use crate::car::application::ports::outgoing::car_repository::CarRecord;
    use crate::car::application::use_cases::approve_car::IApproveCarUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{jwt_service, token_for};
    use crate::tests::support::stubs::test_user;

    #[derive(Clone)]
    struct MockApproveCarUseCase {
        missing: bool,
    }

    #[async_trait]
    impl IApproveCarUseCase for MockApproveCarUseCase {
        async fn execute(
            &self,
            car_id: Uuid,
            approved: bool,
        ) -> Result<CarRecord, ApproveCarError> {
            if self.missing {
                return Err(ApproveCarError::CarNotFound);
            }
            Ok(CarRecord {
                id: car_id,
                user_id: Uuid::new_v4(),
                brand: "Toyota".to_string(),
                model: "Corolla".to_string(),
                year: 2021,
                condition: CarCondition::PreOwned,
                price: 15000.0,
                description: "Clean one-owner car".to_string(),
                images: vec!["/uploads/images-1.jpg".to_string()],
                approved,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }
    }

    async fn call(
        role: UserRole,
        missing: bool,
        approved: bool,
    ) -> actix_web::dev::ServiceResponse {
        let user_id = Uuid::new_v4();

        let app_state = TestAppStateBuilder::default()
            .with_identity(test_user(user_id, role))
            .with_approve_car(MockApproveCarUseCase { missing })
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service());

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(token_provider))
                .service(approve_car_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/cars/{}/approve", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", token_for(user_id))))
            .set_json(serde_json::json!({ "approved": approved }))
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_approve_car_success() {
        let resp = call(UserRole::Admin, false, true).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Car approved successfully");
        assert_eq!(body["data"]["approved"], true);
    }

    #[actix_web::test]
    async fn test_reject_car_success() {
        let resp = call(UserRole::Admin, false, false).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: JsonValue = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Car rejected successfully");
        assert_eq!(body["data"]["approved"], false);
    }

    #[actix_web::test]
    async fn test_approve_car_not_found() {
        let resp = call(UserRole::Admin, true, true).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_approve_car_forbidden_for_non_admin() {
        // Sellers can never approve their own listings
        for role in [UserRole::Owner, UserRole::Shop, UserRole::Vendor] {
            let resp = call(role, false, true).await;
            assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        }
    }
}
