pub mod auth;
pub mod carousel;
pub mod email;
pub mod event_image;
pub mod exhibition;
pub mod home;
pub mod multimedia;
pub mod news;
