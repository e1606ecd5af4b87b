mod carousel;
mod carousel_mobile;
mod slides;

pub use carousel::*;
pub use carousel_mobile::*;
pub use slides::{CreateSlideRequest, UpdateSlideRequest};
