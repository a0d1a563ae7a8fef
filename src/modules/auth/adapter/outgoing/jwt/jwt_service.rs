use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    /// Initialize the service with config
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid, email: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            token_type: "access".to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false; // We will enforce manually

        let decoded = decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::MalformedToken,
            },
        )?;

        let now = Utc::now().timestamp();
        if decoded.claims.exp < now {
            return Err(TokenError::TokenExpired);
        }

        if decoded.claims.token_type != "access" {
            return Err(TokenError::InvalidTokenType("access".to_string()));
        }

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(expiry: i64) -> JwtConfig {
        JwtConfig {
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            issuer: "CarMarket".to_string(),
            access_token_expiry: expiry,
        }
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let jwt_service = JwtTokenService::new(config(3600));
        let user_id = Uuid::new_v4();

        let token = jwt_service
            .generate_access_token(user_id, "test@example.com")
            .expect("Token should be generated");

        let claims = jwt_service.verify_token(&token);
        assert!(claims.is_ok(), "Token should be valid");
        let claims = claims.unwrap();
        assert_eq!(claims.sub, user_id, "User ID should match");
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_invalid_token_verification() {
        let jwt_service = JwtTokenService::new(config(3600));

        let claims = jwt_service.verify_token("invalid.jwt.token");
        assert!(claims.is_err(), "Invalid token should fail verification");
    }

    #[test]
    fn test_expired_token() {
        // Negative expiry puts `exp` in the past without sleeping
        let jwt_service = JwtTokenService::new(config(-10));
        let user_id = Uuid::new_v4();

        let token = jwt_service
            .generate_access_token(user_id, "test@example.com")
            .expect("Token should be generated");

        let result = jwt_service.verify_token(&token);
        assert!(matches!(result, Err(TokenError::TokenExpired)));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let jwt_service = JwtTokenService::new(config(3600));
        let other = JwtTokenService::new(JwtConfig {
            secret_key: "another_secret_key_for_testing_purposes".to_string(),
            issuer: "CarMarket".to_string(),
            access_token_expiry: 3600,
        });

        let token = other
            .generate_access_token(Uuid::new_v4(), "test@example.com")
            .unwrap();

        let result = jwt_service.verify_token(&token);
        assert!(result.is_err());
    }
}
