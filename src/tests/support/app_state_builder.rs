use actix_web::web;
use std::sync::Arc;

use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::use_cases::delete_user::IDeleteUserUseCase;
use crate::admin::application::use_cases::fetch_stats::IFetchStatsUseCase;
use crate::admin::application::use_cases::list_users::IListUsersUseCase;
use crate::auth::application::domain::entities::User;
use crate::auth::application::helpers::UserIdentityResolver;
use crate::auth::application::use_cases::fetch_profile::IFetchProfileUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::car::application::car_use_cases::CarUseCases;
use crate::car::application::use_cases::approve_car::IApproveCarUseCase;
use crate::car::application::use_cases::create_car::ICreateCarUseCase;
use crate::car::application::use_cases::delete_car::IDeleteCarUseCase;
use crate::car::application::use_cases::fetch_car::IFetchCarUseCase;
use crate::car::application::use_cases::fetch_my_cars::IFetchMyCarsUseCase;
use crate::car::application::use_cases::list_cars::IListCarsUseCase;
use crate::car::application::use_cases::update_car::IUpdateCarUseCase;
use crate::gallery::application::gallery_use_cases::GalleryUseCases;
use crate::gallery::application::use_cases::add_gallery_image::IAddGalleryImageUseCase;
use crate::gallery::application::use_cases::delete_gallery_image::IDeleteGalleryImageUseCase;
use crate::gallery::application::use_cases::list_gallery::IListGalleryUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    fetch_profile: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    car: CarUseCases,
    gallery: GalleryUseCases,
    admin: AdminUseCases,
    user_identity_resolver: UserIdentityResolver,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            fetch_profile: Arc::new(StubFetchProfileUseCase),
            car: CarUseCases {
                list: Arc::new(StubListCarsUseCase),
                get_single: Arc::new(StubFetchCarUseCase),
                create: Arc::new(StubCreateCarUseCase),
                update: Arc::new(StubUpdateCarUseCase),
                delete: Arc::new(StubDeleteCarUseCase),
                my_cars: Arc::new(StubFetchMyCarsUseCase),
                approve: Arc::new(StubApproveCarUseCase),
            },
            gallery: GalleryUseCases {
                list: Arc::new(StubListGalleryUseCase),
                add: Arc::new(StubAddGalleryImageUseCase),
                delete: Arc::new(StubDeleteGalleryImageUseCase),
            },
            admin: AdminUseCases {
                stats: Arc::new(StubFetchStatsUseCase),
                list_users: Arc::new(StubListUsersUseCase),
                delete_user: Arc::new(StubDeleteUserUseCase),
            },
            // No identity: every authenticated request fails with 401 unless
            // with_identity() is called
            user_identity_resolver: UserIdentityResolver::new(Arc::new(StubUserQuery {
                user: None,
            })),
        }
    }
}

impl TestAppStateBuilder {
    /// Make the extractor resolve every verified token to this user.
    pub fn with_identity(mut self, user: User) -> Self {
        self.user_identity_resolver =
            UserIdentityResolver::new(Arc::new(StubUserQuery { user: Some(user) }));
        self
    }

    pub fn with_register_user(mut self, uc: impl IRegisterUserUseCase + Send + Sync + 'static) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl IFetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_list_cars(mut self, uc: impl IListCarsUseCase + Send + Sync + 'static) -> Self {
        self.car.list = Arc::new(uc);
        self
    }

    pub fn with_fetch_car(mut self, uc: impl IFetchCarUseCase + Send + Sync + 'static) -> Self {
        self.car.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_car(mut self, uc: impl ICreateCarUseCase + Send + Sync + 'static) -> Self {
        self.car.create = Arc::new(uc);
        self
    }

    pub fn with_update_car(mut self, uc: impl IUpdateCarUseCase + Send + Sync + 'static) -> Self {
        self.car.update = Arc::new(uc);
        self
    }

    pub fn with_delete_car(mut self, uc: impl IDeleteCarUseCase + Send + Sync + 'static) -> Self {
        self.car.delete = Arc::new(uc);
        self
    }

    pub fn with_fetch_my_cars(
        mut self,
        uc: impl IFetchMyCarsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.car.my_cars = Arc::new(uc);
        self
    }

    pub fn with_approve_car(mut self, uc: impl IApproveCarUseCase + Send + Sync + 'static) -> Self {
        self.car.approve = Arc::new(uc);
        self
    }

    pub fn with_list_gallery(
        mut self,
        uc: impl IListGalleryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gallery.list = Arc::new(uc);
        self
    }

    pub fn with_add_gallery_image(
        mut self,
        uc: impl IAddGalleryImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gallery.add = Arc::new(uc);
        self
    }

    pub fn with_delete_gallery_image(
        mut self,
        uc: impl IDeleteGalleryImageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gallery.delete = Arc::new(uc);
        self
    }

    pub fn with_fetch_stats(mut self, uc: impl IFetchStatsUseCase + Send + Sync + 'static) -> Self {
        self.admin.stats = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl IListUsersUseCase + Send + Sync + 'static) -> Self {
        self.admin.list_users = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl IDeleteUserUseCase + Send + Sync + 'static) -> Self {
        self.admin.delete_user = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            fetch_profile_use_case: self.fetch_profile,
            car: self.car,
            gallery: self.gallery,
            admin: self.admin,
            user_identity_resolver: self.user_identity_resolver,
        })
    }
}
