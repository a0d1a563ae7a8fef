use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::admin::application::ports::outgoing::admin_query::{AdminUserView, UserSearchFilter};
use crate::admin::application::use_cases::list_users::ListUsersError;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::{ApiResponse, PageRequest, Pagination};
use crate::AppState;

const DEFAULT_USER_PAGE_LIMIT: u32 = 20;

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub search: Option<String>,

    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub limit: u32,
}

#[derive(Serialize)]
pub struct UserListData {
    pub users: Vec<AdminUserView>,
    pub pagination: Pagination,
}

#[get("/api/admin/users")]
pub async fn admin_list_users_handler(
    _admin: AdminUser,
    query: web::Query<ListUsersQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let page = PageRequest::clamped(query.page, query.limit, DEFAULT_USER_PAGE_LIMIT);
    let filter = UserSearchFilter {
        search: query.search,
    };

    match data.admin.list_users.execute(filter, page).await {
        Ok(result) => {
            let pagination = result.pagination();
            ApiResponse::success(UserListData {
                users: result.items,
                pagination,
            })
        }

        Err(ListUsersError::QueryFailed(msg)) => {
            error!("Failed to list users: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
