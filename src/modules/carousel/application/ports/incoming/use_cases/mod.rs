mod create_slide;
mod delete_slide;
mod get_slides;
mod update_slide;

pub use create_slide::{CreateSlideCommand, CreateSlideError, CreateSlideUseCase};
pub use delete_slide::{DeleteSlideError, DeleteSlideUseCase};
pub use get_slides::{GetSlidesError, GetSlidesUseCase};
pub use update_slide::{UpdateSlideError, UpdateSlideUseCase};
