mod create_event_image;
mod delete_event_image;
mod get_event_images;
mod update_event_image;

pub use create_event_image::{CreateEventImageCommand, CreateEventImageError, CreateEventImageUseCase};
pub use delete_event_image::{DeleteEventImageError, DeleteEventImageUseCase};
pub use get_event_images::{GetEventImagesError, GetEventImagesUseCase};
pub use update_event_image::{UpdateEventImageError, UpdateEventImageUseCase};
