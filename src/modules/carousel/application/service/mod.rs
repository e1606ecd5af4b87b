mod create_slide_service;
mod delete_slide_service;
mod get_slides_service;
mod update_slide_service;

pub use create_slide_service::CreateSlideService;
pub use delete_slide_service::DeleteSlideService;
pub use get_slides_service::GetSlidesService;
pub use update_slide_service::UpdateSlideService;
