use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;

use crate::auth::application::domain::entities::{UserRole, UserView};
use crate::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, TokenProvider, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError,
};

const MIN_PASSWORD_LEN: usize = 6;

// Possible errors for registering a user
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("{0}")]
    InvalidName(String),

    #[error("{0}")]
    InvalidEmail(String),

    #[error("{0}")]
    InvalidPassword(String),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub business_name: Option<String>,
    pub business_type: Option<String>,
    pub license_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RegisterUserOutput {
    pub user: UserView,
    pub token: String,
}

// Interface for RegisterUser use case
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput)
        -> Result<RegisterUserOutput, RegisterUserError>;
}

// Implementation of RegisterUser use case
#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(RegisterUserError::InvalidName(
                "Name is required".to_string(),
            ));
        }

        let email = input.email.trim().to_lowercase();
        if email.is_empty() || !EmailAddress::is_valid(&email) {
            return Err(RegisterUserError::InvalidEmail(
                "Invalid email format".to_string(),
            ));
        }

        if input.password.len() < MIN_PASSWORD_LEN {
            return Err(RegisterUserError::InvalidPassword(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        match self.query.find_by_email(&email).await {
            Ok(Some(_)) => return Err(RegisterUserError::UserAlreadyExists),
            Ok(None) => {}
            Err(UserQueryError::DatabaseError(msg)) => {
                return Err(RegisterUserError::RepositoryError(msg))
            }
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // Private sellers are trusted immediately; business accounts wait for
        // manual verification.
        let is_verified = input.role == UserRole::Owner;

        let created = self
            .repository
            .create_user(NewUser {
                name,
                email,
                password_hash,
                role: input.role,
                phone: input.phone,
                address: input.address,
                business_name: input.business_name,
                business_type: input.business_type,
                license_number: input.license_number,
                is_verified,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::UserAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        let token = self
            .token_provider
            .generate_access_token(created.id, &created.email)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        Ok(RegisterUserOutput {
            user: UserView::from(created),
            token,
        })
    }
}
