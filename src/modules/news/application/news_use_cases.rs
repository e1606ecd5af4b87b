use std::sync::Arc;

use crate::news::application::ports::incoming::use_cases::{
    CreateNewsUseCase, DeleteNewsUseCase, GetNewsUseCase, GetPublicNewsUseCase,
    GetPublicSingleNewsUseCase, GetSingleNewsUseCase, UpdateNewsUseCase,
};

#[derive(Clone)]
pub struct NewsUseCases {
    pub create: Arc<dyn CreateNewsUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetNewsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleNewsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateNewsUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteNewsUseCase + Send + Sync>,
    pub get_public_list: Arc<dyn GetPublicNewsUseCase + Send + Sync>,
    pub get_public_single: Arc<dyn GetPublicSingleNewsUseCase + Send + Sync>,
}
