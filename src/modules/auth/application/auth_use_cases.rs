use std::sync::Arc;

use crate::auth::application::use_cases::{
    check_session::ICheckSessionUseCase, login::ILoginUseCase, logout::ILogoutUseCase,
    refresh_session::IRefreshSessionUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn ILoginUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub refresh: Arc<dyn IRefreshSessionUseCase + Send + Sync>,
    pub check: Arc<dyn ICheckSessionUseCase + Send + Sync>,
}
