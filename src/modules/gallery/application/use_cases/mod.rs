pub mod add_gallery_image;
pub mod delete_gallery_image;
pub mod list_gallery;
