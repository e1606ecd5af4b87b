pub mod exhibition_images;
pub mod exhibitions;
