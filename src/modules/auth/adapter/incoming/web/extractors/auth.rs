use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Identity, UserRole};
use crate::auth::application::helpers::ResolveIdentityError;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The authenticated caller: token verified and identity re-loaded from the
/// database, so the role is always current.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            email: self.email.clone(),
            role: self.role,
        }
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let jwt_service = req
                .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
                .cloned()
                .ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            let state = req
                .app_data::<web::Data<AppState>>()
                .cloned()
                .ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            let token = extract_token_from_header(&req).ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized("Access token required"))
            })?;

            let claims = jwt_service.verify_token(&token).map_err(|_| {
                create_api_error(ApiResponse::unauthorized("Invalid or expired token"))
            })?;

            // A valid signature is not enough: the subject must still exist.
            match state.user_identity_resolver.by_id(claims.sub).await {
                Ok(identity) => Ok(AuthenticatedUser {
                    id: identity.id,
                    email: identity.email,
                    role: identity.role,
                }),
                Err(ResolveIdentityError::NotFound) => {
                    Err(create_api_error(ApiResponse::unauthorized("Invalid token")))
                }
                Err(ResolveIdentityError::RepositoryError(msg)) => {
                    tracing::error!("Failed to resolve identity: {}", msg);
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

/// An authenticated caller with the ADMIN role.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: Uuid,
    pub email: String,
}

impl AdminUser {
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            email: self.email.clone(),
            role: UserRole::Admin,
        }
    }
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let user = AuthenticatedUser::from_request(&req, &mut Payload::None).await?;

            if !user.role.is_admin() {
                return Err(create_api_error(ApiResponse::forbidden(
                    "Admin access required",
                )));
            }

            Ok(AdminUser {
                id: user.id,
                email: user.email,
            })
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
