pub mod admin;
pub mod auth;
pub mod car;
pub mod gallery;
