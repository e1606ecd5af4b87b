mod create_exhibition;
mod delete_exhibition;
mod get_exhibition_images;
mod get_exhibitions;
mod get_public_exhibitions;
mod get_public_single_exhibition;
mod get_single_exhibition;
mod replace_exhibition_images;
mod update_exhibition;

pub use create_exhibition::{CreateExhibitionCommand, CreateExhibitionError, CreateExhibitionUseCase};
pub use delete_exhibition::{DeleteExhibitionError, DeleteExhibitionUseCase};
pub use get_exhibition_images::{GetExhibitionImagesError, GetExhibitionImagesUseCase};
pub use get_exhibitions::{GetExhibitionsError, GetExhibitionsUseCase};
pub use get_public_exhibitions::{GetPublicExhibitionsError, GetPublicExhibitionsUseCase};
pub use get_public_single_exhibition::{
    GetPublicSingleExhibitionError, GetPublicSingleExhibitionUseCase,
};
pub use get_single_exhibition::{GetSingleExhibitionError, GetSingleExhibitionUseCase};
pub use replace_exhibition_images::{
    ReplaceExhibitionImagesError, ReplaceExhibitionImagesUseCase,
};
pub use update_exhibition::{UpdateExhibitionError, UpdateExhibitionUseCase};
