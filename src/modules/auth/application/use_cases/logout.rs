use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::ports::outgoing::IdentityProvider;

// ============================ Logout Use Case =============================
/// Best-effort provider sign-out. Never fails: the caller clears the
/// session cookies regardless of what the provider says.
#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, access_token: Option<&str>);
}

#[derive(Clone)]
pub struct LogoutUseCase {
    identity_provider: Arc<dyn IdentityProvider>,
}

impl LogoutUseCase {
    pub fn new(identity_provider: Arc<dyn IdentityProvider>) -> Self {
        Self { identity_provider }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, access_token: Option<&str>) {
        let Some(token) = access_token.map(str::trim).filter(|t| !t.is_empty()) else {
            return;
        };

        match self.identity_provider.sign_out(token).await {
            Ok(()) => info!("Admin signed out"),
            Err(e) => warn!("Provider sign-out failed, clearing cookies anyway: {}", e),
        }
    }
}
