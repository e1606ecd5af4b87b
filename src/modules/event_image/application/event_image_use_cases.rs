use std::sync::Arc;

use crate::event_image::application::ports::incoming::use_cases::{
    CreateEventImageUseCase, DeleteEventImageUseCase, GetEventImagesUseCase,
    UpdateEventImageUseCase,
};

#[derive(Clone)]
pub struct EventImageUseCases {
    pub list: Arc<dyn GetEventImagesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateEventImageUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateEventImageUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteEventImageUseCase + Send + Sync>,
}
