pub mod event_images;
