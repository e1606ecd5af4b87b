use std::sync::Arc;

use crate::carousel::application::ports::incoming::use_cases::{
    CreateSlideUseCase, DeleteSlideUseCase, GetSlidesUseCase, UpdateSlideUseCase,
};

/// Shared by the desktop and mobile routes; each handler passes its deck.
#[derive(Clone)]
pub struct CarouselUseCases {
    pub list: Arc<dyn GetSlidesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSlideUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSlideUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSlideUseCase + Send + Sync>,
}
