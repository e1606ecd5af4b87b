use async_trait::async_trait;

use crate::auth::application::domain::entities::{AdminIdentity, Session};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityProviderError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Session is invalid or expired")]
    InvalidSession,

    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),

    #[error("Unexpected identity provider response: {0}")]
    UnexpectedResponse(String),
}

/// Hosted authentication service that owns the admin accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityProviderError>;

    /// Resolves the user behind an access token.
    async fn get_user(&self, access_token: &str) -> Result<AdminIdentity, IdentityProviderError>;

    async fn refresh(&self, refresh_token: &str) -> Result<Session, IdentityProviderError>;

    /// Revokes the session server-side.
    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityProviderError>;
}
