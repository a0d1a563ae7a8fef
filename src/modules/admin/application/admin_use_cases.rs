use std::sync::Arc;

use crate::admin::application::use_cases::delete_user::IDeleteUserUseCase;
use crate::admin::application::use_cases::fetch_stats::IFetchStatsUseCase;
use crate::admin::application::use_cases::list_users::IListUsersUseCase;

/// Admin use cases wired into `AppState`.
#[derive(Clone)]
pub struct AdminUseCases {
    pub stats: Arc<dyn IFetchStatsUseCase + Send + Sync>,
    pub list_users: Arc<dyn IListUsersUseCase + Send + Sync>,
    pub delete_user: Arc<dyn IDeleteUserUseCase + Send + Sync>,
}
