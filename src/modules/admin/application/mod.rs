pub mod admin_use_cases;
pub mod ports;
pub mod use_cases;

pub use admin_use_cases::AdminUseCases;
