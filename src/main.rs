pub mod modules;
pub use modules::admin;
pub use modules::auth;
pub use modules::car;
pub use modules::gallery;
pub mod api;
pub mod health;
pub mod shared;

use crate::admin::adapter::outgoing::admin_query_postgres::AdminQueryPostgres;
use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::use_cases::delete_user::DeleteUserUseCase;
use crate::admin::application::use_cases::fetch_stats::FetchStatsUseCase;
use crate::admin::application::use_cases::list_users::ListUsersUseCase;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::helpers::UserIdentityResolver;
use crate::auth::application::use_cases::{
    fetch_profile::{FetchProfileUseCase, IFetchProfileUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};
use crate::car::adapter::outgoing::car_query_postgres::CarQueryPostgres;
use crate::car::adapter::outgoing::car_repository_postgres::CarRepositoryPostgres;
use crate::car::application::car_use_cases::CarUseCases;
use crate::car::application::use_cases::approve_car::ApproveCarUseCase;
use crate::car::application::use_cases::create_car::CreateCarUseCase;
use crate::car::application::use_cases::delete_car::DeleteCarUseCase;
use crate::car::application::use_cases::fetch_car::FetchCarUseCase;
use crate::car::application::use_cases::fetch_my_cars::FetchMyCarsUseCase;
use crate::car::application::use_cases::list_cars::ListCarsUseCase;
use crate::car::application::use_cases::update_car::UpdateCarUseCase;
use crate::gallery::adapter::outgoing::gallery_query_postgres::GalleryQueryPostgres;
use crate::gallery::adapter::outgoing::gallery_repository_postgres::GalleryRepositoryPostgres;
use crate::gallery::application::gallery_use_cases::GalleryUseCases;
use crate::gallery::application::use_cases::add_gallery_image::AddGalleryImageUseCase;
use crate::gallery::application::use_cases::delete_gallery_image::DeleteGalleryImageUseCase;
use crate::gallery::application::use_cases::list_gallery::ListGalleryUseCase;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::json_config::{custom_json_config, custom_query_config};
use crate::shared::upload::UploadConfig;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    pub car: CarUseCases,
    pub gallery: GalleryUseCases,
    pub admin: AdminUseCases,
    pub user_identity_resolver: UserIdentityResolver,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Shared infrastructure
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let password_hasher = Arc::new(BcryptHasher);
    let upload_config = UploadConfig::from_env();

    // Auth
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    let register_user_use_case = RegisterUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        password_hasher.clone(),
        Arc::new(jwt_service.clone()),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        password_hasher,
        Arc::new(jwt_service.clone()),
    );
    let fetch_profile_use_case = FetchProfileUseCase::new(user_query.clone());
    let user_identity_resolver = UserIdentityResolver::new(Arc::new(user_query.clone()));

    // Cars
    let car_query = CarQueryPostgres::new(Arc::clone(&db_arc));
    let car_repo = CarRepositoryPostgres::new(Arc::clone(&db_arc));

    let car = CarUseCases {
        list: Arc::new(ListCarsUseCase::new(car_query.clone())),
        get_single: Arc::new(FetchCarUseCase::new(car_query.clone())),
        create: Arc::new(CreateCarUseCase::new(car_repo.clone())),
        update: Arc::new(UpdateCarUseCase::new(car_repo.clone())),
        delete: Arc::new(DeleteCarUseCase::new(car_repo.clone())),
        my_cars: Arc::new(FetchMyCarsUseCase::new(car_query.clone())),
        approve: Arc::new(ApproveCarUseCase::new(car_repo.clone())),
    };

    // Gallery
    let gallery_query = GalleryQueryPostgres::new(Arc::clone(&db_arc));
    let gallery_repo = GalleryRepositoryPostgres::new(Arc::clone(&db_arc));

    let gallery = GalleryUseCases {
        list: Arc::new(ListGalleryUseCase::new(gallery_query)),
        add: Arc::new(AddGalleryImageUseCase::new(gallery_repo.clone())),
        delete: Arc::new(DeleteGalleryImageUseCase::new(gallery_repo)),
    };

    // Admin
    let admin_query = AdminQueryPostgres::new(Arc::clone(&db_arc));

    let admin = AdminUseCases {
        stats: Arc::new(FetchStatsUseCase::new(admin_query.clone())),
        list_users: Arc::new(ListUsersUseCase::new(admin_query)),
        delete_user: Arc::new(DeleteUserUseCase::new(
            Arc::new(user_query),
            Arc::new(user_repo),
        )),
    };

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        car,
        gallery,
        admin,
        user_identity_resolver,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(upload_config.clone()))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_me_handler);
    // Cars
    cfg.service(crate::car::adapter::incoming::web::routes::list_cars_handler);
    cfg.service(crate::car::adapter::incoming::web::routes::my_cars_handler);
    cfg.service(crate::car::adapter::incoming::web::routes::get_car_handler);
    cfg.service(crate::car::adapter::incoming::web::routes::create_car_handler);
    cfg.service(crate::car::adapter::incoming::web::routes::update_car_handler);
    cfg.service(crate::car::adapter::incoming::web::routes::delete_car_handler);
    // Gallery
    cfg.service(crate::gallery::adapter::incoming::web::routes::list_gallery_handler);
    cfg.service(crate::gallery::adapter::incoming::web::routes::upload_gallery_image_handler);
    cfg.service(crate::gallery::adapter::incoming::web::routes::delete_gallery_image_handler);
    // Admin
    cfg.service(crate::admin::adapter::incoming::web::routes::get_stats_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_list_users_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_list_cars_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::approve_car_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_delete_user_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_delete_car_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
