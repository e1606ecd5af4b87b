mod create_event_image_service;
mod delete_event_image_service;
mod get_event_images_service;
mod update_event_image_service;

pub use create_event_image_service::CreateEventImageService;
pub use delete_event_image_service::DeleteEventImageService;
pub use get_event_images_service::GetEventImagesService;
pub use update_event_image_service::UpdateEventImageService;
