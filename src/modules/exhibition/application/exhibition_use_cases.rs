use std::sync::Arc;

use crate::exhibition::application::ports::incoming::use_cases::{
    CreateExhibitionUseCase, DeleteExhibitionUseCase, GetExhibitionImagesUseCase,
    GetExhibitionsUseCase, GetPublicExhibitionsUseCase, GetPublicSingleExhibitionUseCase,
    GetSingleExhibitionUseCase, ReplaceExhibitionImagesUseCase, UpdateExhibitionUseCase,
};

#[derive(Clone)]
pub struct ExhibitionUseCases {
    pub create: Arc<dyn CreateExhibitionUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetExhibitionsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleExhibitionUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateExhibitionUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteExhibitionUseCase + Send + Sync>,
    pub get_images: Arc<dyn GetExhibitionImagesUseCase + Send + Sync>,
    pub replace_images: Arc<dyn ReplaceExhibitionImagesUseCase + Send + Sync>,
    pub get_public_list: Arc<dyn GetPublicExhibitionsUseCase + Send + Sync>,
    pub get_public_single: Arc<dyn GetPublicSingleExhibitionUseCase + Send + Sync>,
}
