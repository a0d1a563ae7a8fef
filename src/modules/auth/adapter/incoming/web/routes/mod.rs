pub mod fetch_me;
pub mod login_user;
pub mod register_user;

pub use fetch_me::fetch_me_handler;
pub use login_user::{login_user_handler, LoginResponseData};
pub use register_user::{register_user_handler, RegisterUserRequest, RegisterUserResponse};
