pub mod app_state_builder;
pub mod auth_helper;
pub mod multipart_helper;
pub mod stubs;
