pub mod event_image_repository;
