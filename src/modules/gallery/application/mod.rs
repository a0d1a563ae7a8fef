pub mod gallery_use_cases;
pub mod ports;
pub mod use_cases;

pub use gallery_use_cases::GalleryUseCases;
