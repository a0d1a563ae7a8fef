pub mod gallery_images;
