//! Inert implementations for every `AppState` slot. Each returns a
//! "not used in this test" failure so a route test only has to wire the one
//! use case it exercises.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::admin::application::ports::outgoing::admin_query::{AdminStatsView, AdminUserView, UserSearchFilter};
use crate::admin::application::use_cases::delete_user::{DeleteUserError, IDeleteUserUseCase};
use crate::admin::application::use_cases::fetch_stats::{FetchStatsError, IFetchStatsUseCase};
use crate::admin::application::use_cases::list_users::{IListUsersUseCase, ListUsersError};
use crate::auth::application::domain::entities::{Identity, User, UserRole};
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use crate::auth::application::use_cases::fetch_profile::{
    FetchProfileError, IFetchProfileUseCase, ProfileView,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput, RegisterUserOutput,
};
use crate::car::application::ports::outgoing::car_query::{
    CarDetailView, CarListFilter, CarSummaryView,
};
use crate::car::application::ports::outgoing::car_repository::CarRecord;
use crate::car::application::use_cases::approve_car::{ApproveCarError, IApproveCarUseCase};
use crate::car::application::use_cases::create_car::{
    CreateCarError, CreateCarInput, ICreateCarUseCase,
};
use crate::car::application::use_cases::delete_car::{DeleteCarError, IDeleteCarUseCase};
use crate::car::application::use_cases::fetch_car::{FetchCarError, IFetchCarUseCase};
use crate::car::application::use_cases::fetch_my_cars::{FetchMyCarsError, IFetchMyCarsUseCase};
use crate::car::application::use_cases::list_cars::{IListCarsUseCase, ListCarsError};
use crate::car::application::use_cases::update_car::{
    IUpdateCarUseCase, UpdateCarError, UpdateCarInput,
};
use crate::gallery::application::ports::outgoing::gallery_query::GalleryImageView;
use crate::gallery::application::use_cases::add_gallery_image::{
    AddGalleryImageError, IAddGalleryImageUseCase,
};
use crate::gallery::application::use_cases::delete_gallery_image::{
    DeleteGalleryImageError, IDeleteGalleryImageUseCase,
};
use crate::gallery::application::use_cases::list_gallery::{IListGalleryUseCase, ListGalleryError};
use crate::shared::api::{PageRequest, PageResult};

const NOT_USED: &str = "not used in this test";

/// A user the identity resolver will hand back for any token subject.
pub fn test_user(id: Uuid, role: UserRole) -> User {
    User {
        id,
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        password_hash: "hashed".to_string(),
        role,
        phone: None,
        address: None,
        business_name: None,
        business_type: None,
        license_number: None,
        is_verified: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Backs the identity resolver in tests. `user: None` makes every
/// authenticated request fail with 401.
pub struct StubUserQuery {
    pub user: Option<User>,
}

#[async_trait]
impl UserQuery for StubUserQuery {
    async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        Ok(self.user.clone())
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self.user.clone())
    }

    async fn car_count(&self, _user_id: Uuid) -> Result<u64, UserQueryError> {
        Ok(0)
    }
}

// ---------------------------------------------------------------------------
// Auth stubs
// ---------------------------------------------------------------------------

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::QueryError(NOT_USED.to_string()))
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<ProfileView, FetchProfileError> {
        Err(FetchProfileError::QueryError(NOT_USED.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Car stubs
// ---------------------------------------------------------------------------

pub struct StubListCarsUseCase;

#[async_trait]
impl IListCarsUseCase for StubListCarsUseCase {
    async fn execute(
        &self,
        _filter: CarListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<CarSummaryView>, ListCarsError> {
        Err(ListCarsError::QueryFailed(NOT_USED.to_string()))
    }
}

pub struct StubFetchCarUseCase;

#[async_trait]
impl IFetchCarUseCase for StubFetchCarUseCase {
    async fn execute(&self, _car_id: Uuid) -> Result<CarDetailView, FetchCarError> {
        Err(FetchCarError::QueryFailed(NOT_USED.to_string()))
    }
}

pub struct StubCreateCarUseCase;

#[async_trait]
impl ICreateCarUseCase for StubCreateCarUseCase {
    async fn execute(&self, _input: CreateCarInput) -> Result<CarRecord, CreateCarError> {
        Err(CreateCarError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubUpdateCarUseCase;

#[async_trait]
impl IUpdateCarUseCase for StubUpdateCarUseCase {
    async fn execute(
        &self,
        _caller: Identity,
        _car_id: Uuid,
        _input: UpdateCarInput,
    ) -> Result<CarRecord, UpdateCarError> {
        Err(UpdateCarError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubDeleteCarUseCase;

#[async_trait]
impl IDeleteCarUseCase for StubDeleteCarUseCase {
    async fn execute(&self, _caller: Identity, _car_id: Uuid) -> Result<(), DeleteCarError> {
        Err(DeleteCarError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubFetchMyCarsUseCase;

#[async_trait]
impl IFetchMyCarsUseCase for StubFetchMyCarsUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _page: PageRequest,
    ) -> Result<PageResult<CarSummaryView>, FetchMyCarsError> {
        Err(FetchMyCarsError::QueryFailed(NOT_USED.to_string()))
    }
}

pub struct StubApproveCarUseCase;

#[async_trait]
impl IApproveCarUseCase for StubApproveCarUseCase {
    async fn execute(&self, _car_id: Uuid, _approved: bool) -> Result<CarRecord, ApproveCarError> {
        Err(ApproveCarError::RepositoryError(NOT_USED.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Gallery stubs
// ---------------------------------------------------------------------------

pub struct StubListGalleryUseCase;

#[async_trait]
impl IListGalleryUseCase for StubListGalleryUseCase {
    async fn execute(
        &self,
        _page: PageRequest,
    ) -> Result<PageResult<GalleryImageView>, ListGalleryError> {
        Err(ListGalleryError::QueryFailed(NOT_USED.to_string()))
    }
}

pub struct StubAddGalleryImageUseCase;

#[async_trait]
impl IAddGalleryImageUseCase for StubAddGalleryImageUseCase {
    async fn execute(
        &self,
        _caller: Identity,
        _car_id: Uuid,
        _image_url: String,
    ) -> Result<GalleryImageView, AddGalleryImageError> {
        Err(AddGalleryImageError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubDeleteGalleryImageUseCase;

#[async_trait]
impl IDeleteGalleryImageUseCase for StubDeleteGalleryImageUseCase {
    async fn execute(
        &self,
        _caller: Identity,
        _image_id: Uuid,
    ) -> Result<(), DeleteGalleryImageError> {
        Err(DeleteGalleryImageError::RepositoryError(
            NOT_USED.to_string(),
        ))
    }
}

// ---------------------------------------------------------------------------
// Admin stubs
// ---------------------------------------------------------------------------

pub struct StubFetchStatsUseCase;

#[async_trait]
impl IFetchStatsUseCase for StubFetchStatsUseCase {
    async fn execute(&self) -> Result<AdminStatsView, FetchStatsError> {
        Err(FetchStatsError::QueryFailed(NOT_USED.to_string()))
    }
}

pub struct StubListUsersUseCase;

#[async_trait]
impl IListUsersUseCase for StubListUsersUseCase {
    async fn execute(
        &self,
        _filter: UserSearchFilter,
        _page: PageRequest,
    ) -> Result<PageResult<AdminUserView>, ListUsersError> {
        Err(ListUsersError::QueryFailed(NOT_USED.to_string()))
    }
}

pub struct StubDeleteUserUseCase;

#[async_trait]
impl IDeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<(), DeleteUserError> {
        Err(DeleteUserError::RepositoryError(NOT_USED.to_string()))
    }
}
