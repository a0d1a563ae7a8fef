pub mod delete_user;
pub mod fetch_stats;
pub mod list_users;
