pub mod approve_car;
pub mod delete_car;
pub mod delete_user;
pub mod get_stats;
pub mod list_cars;
pub mod list_users;

pub use approve_car::approve_car_handler;
pub use delete_car::admin_delete_car_handler;
pub use delete_user::admin_delete_user_handler;
pub use get_stats::get_stats_handler;
pub use list_cars::admin_list_cars_handler;
pub use list_users::admin_list_users_handler;
