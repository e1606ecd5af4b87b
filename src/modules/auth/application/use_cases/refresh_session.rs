use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::auth::application::domain::entities::Session;
use crate::auth::application::ports::outgoing::{IdentityProvider, IdentityProviderError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshSessionError {
    #[error("Refresh token is missing, invalid or expired")]
    InvalidSession,

    #[error("Identity provider error: {0}")]
    ProviderError(String),
}

// ========================= Refresh Session Use Case =========================
#[async_trait]
pub trait IRefreshSessionUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<Session, RefreshSessionError>;
}

#[derive(Clone)]
pub struct RefreshSessionUseCase {
    identity_provider: Arc<dyn IdentityProvider>,
}

impl RefreshSessionUseCase {
    pub fn new(identity_provider: Arc<dyn IdentityProvider>) -> Self {
        Self { identity_provider }
    }
}

#[async_trait]
impl IRefreshSessionUseCase for RefreshSessionUseCase {
    async fn execute(&self, refresh_token: &str) -> Result<Session, RefreshSessionError> {
        let token = refresh_token.trim();
        if token.is_empty() {
            return Err(RefreshSessionError::InvalidSession);
        }

        match self.identity_provider.refresh(token).await {
            Ok(session) => {
                info!(user_id = %session.user.id, "Admin session refreshed");
                Ok(session)
            }
            Err(IdentityProviderError::InvalidSession)
            | Err(IdentityProviderError::InvalidCredentials) => {
                Err(RefreshSessionError::InvalidSession)
            }
            Err(e) => {
                error!("Identity provider refresh failed: {}", e);
                Err(RefreshSessionError::ProviderError(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::AdminIdentity;
    use crate::auth::application::ports::outgoing::MockIdentityProvider;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn exchanges_refresh_token() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_refresh()
            .with(eq("refresh-1"))
            .times(1)
            .returning(|_| {
                Ok(Session {
                    access_token: "access-2".into(),
                    refresh_token: "refresh-2".into(),
                    expires_in: None,
                    user: AdminIdentity {
                        id: "admin-1".into(),
                        email: None,
                    },
                })
            });

        let session = RefreshSessionUseCase::new(Arc::new(provider))
            .execute("refresh-1")
            .await
            .unwrap();

        assert_eq!(session.access_token, "access-2");
        assert_eq!(session.refresh_token, "refresh-2");
    }

    #[tokio::test]
    async fn rejected_token_is_invalid_session() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_refresh()
            .returning(|_| Err(IdentityProviderError::InvalidSession));

        let err = RefreshSessionUseCase::new(Arc::new(provider))
            .execute("stale")
            .await
            .unwrap_err();

        assert_eq!(err, RefreshSessionError::InvalidSession);
    }

    #[tokio::test]
    async fn blank_token_skips_provider() {
        let mut provider = MockIdentityProvider::new();
        provider.expect_refresh().never();

        let err = RefreshSessionUseCase::new(Arc::new(provider))
            .execute("")
            .await
            .unwrap_err();

        assert_eq!(err, RefreshSessionError::InvalidSession);
    }
}
