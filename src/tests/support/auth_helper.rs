use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: "CarMarket".to_string(),
        access_token_expiry: 3600,
    })
}

pub fn token_for(user_id: Uuid) -> String {
    jwt_service()
        .generate_access_token(user_id, "test@example.com")
        .unwrap()
}
