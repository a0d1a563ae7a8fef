use std::sync::Arc;

use crate::gallery::application::use_cases::add_gallery_image::IAddGalleryImageUseCase;
use crate::gallery::application::use_cases::delete_gallery_image::IDeleteGalleryImageUseCase;
use crate::gallery::application::use_cases::list_gallery::IListGalleryUseCase;

/// Gallery use cases wired into `AppState`.
#[derive(Clone)]
pub struct GalleryUseCases {
    pub list: Arc<dyn IListGalleryUseCase + Send + Sync>,
    pub add: Arc<dyn IAddGalleryImageUseCase + Send + Sync>,
    pub delete: Arc<dyn IDeleteGalleryImageUseCase + Send + Sync>,
}
