pub mod gallery_query;
pub mod gallery_repository;

pub use gallery_query::{GalleryCarView, GalleryImageView, GalleryQuery, GalleryQueryError};
pub use gallery_repository::{GalleryImageOwner, GalleryRepository, GalleryRepositoryError};
