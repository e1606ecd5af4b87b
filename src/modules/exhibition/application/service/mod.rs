mod create_exhibition_service;
mod delete_exhibition_service;
mod get_exhibition_images_service;
mod get_exhibitions_service;
mod get_public_exhibitions_service;
mod get_public_single_exhibition_service;
mod get_single_exhibition_service;
mod replace_exhibition_images_service;
mod update_exhibition_service;

pub use create_exhibition_service::CreateExhibitionService;
pub use delete_exhibition_service::DeleteExhibitionService;
pub use get_exhibition_images_service::GetExhibitionImagesService;
pub use get_exhibitions_service::GetExhibitionsService;
pub use get_public_exhibitions_service::GetPublicExhibitionsService;
pub use get_public_single_exhibition_service::GetPublicSingleExhibitionService;
pub use get_single_exhibition_service::GetSingleExhibitionService;
pub use replace_exhibition_images_service::ReplaceExhibitionImagesService;
pub use update_exhibition_service::UpdateExhibitionService;
