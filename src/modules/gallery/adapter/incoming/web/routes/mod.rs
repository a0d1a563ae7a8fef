pub mod delete_gallery_image;
pub mod list_gallery;
pub mod upload_gallery_image;

pub use delete_gallery_image::delete_gallery_image_handler;
pub use list_gallery::list_gallery_handler;
pub use upload_gallery_image::upload_gallery_image_handler;
