use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::auth::application::domain::entities::SessionStatus;
use crate::auth::application::ports::outgoing::{IdentityProvider, IdentityProviderError};

// ========================= Check Session Use Case =========================
/// Resolves an access token to a session status. Fails closed: any
/// provider error yields `Anonymous`, never an error.
#[async_trait]
pub trait ICheckSessionUseCase: Send + Sync {
    async fn execute(&self, access_token: &str) -> SessionStatus;
}

#[derive(Clone)]
pub struct CheckSessionUseCase {
    identity_provider: Arc<dyn IdentityProvider>,
}

impl CheckSessionUseCase {
    pub fn new(identity_provider: Arc<dyn IdentityProvider>) -> Self {
        Self { identity_provider }
    }
}

#[async_trait]
impl ICheckSessionUseCase for CheckSessionUseCase {
    async fn execute(&self, access_token: &str) -> SessionStatus {
        let token = access_token.trim();
        if token.is_empty() {
            return SessionStatus::Anonymous;
        }

        match self.identity_provider.get_user(token).await {
            Ok(identity) => SessionStatus::Authenticated(identity),
            Err(IdentityProviderError::InvalidSession)
            | Err(IdentityProviderError::InvalidCredentials) => {
                debug!("Access token rejected by identity provider");
                SessionStatus::Anonymous
            }
            Err(e) => {
                warn!("Session check failed, denying access: {}", e);
                SessionStatus::Anonymous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::AdminIdentity;
    use crate::auth::application::ports::outgoing::MockIdentityProvider;

    #[tokio::test]
    async fn valid_token_is_authenticated() {
        let mut provider = MockIdentityProvider::new();
        provider.expect_get_user().times(1).returning(|_| {
            Ok(AdminIdentity {
                id: "admin-1".into(),
                email: None,
            })
        });

        let status = CheckSessionUseCase::new(Arc::new(provider))
            .execute("token")
            .await;

        assert!(status.is_authenticated());
    }

    #[tokio::test]
    async fn rejected_token_is_anonymous() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_get_user()
            .returning(|_| Err(IdentityProviderError::InvalidSession));

        let status = CheckSessionUseCase::new(Arc::new(provider))
            .execute("expired")
            .await;

        assert_eq!(status, SessionStatus::Anonymous);
    }

    #[tokio::test]
    async fn provider_outage_fails_closed() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_get_user()
            .returning(|_| Err(IdentityProviderError::Unavailable("dns".into())));

        let status = CheckSessionUseCase::new(Arc::new(provider))
            .execute("token")
            .await;

        assert_eq!(status, SessionStatus::Anonymous);
    }

    #[tokio::test]
    async fn blank_token_skips_provider() {
        let mut provider = MockIdentityProvider::new();
        provider.expect_get_user().never();

        let status = CheckSessionUseCase::new(Arc::new(provider))
            .execute("   ")
            .await;

        assert_eq!(status, SessionStatus::Anonymous);
    }
}
