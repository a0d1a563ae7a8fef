pub mod car_use_cases;
pub mod domain;
pub mod ports;
pub mod use_cases;

pub use car_use_cases::CarUseCases;
