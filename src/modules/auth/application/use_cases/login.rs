use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use tracing::{error, info};

use crate::auth::application::domain::entities::Session;
use crate::auth::application::ports::outgoing::{IdentityProvider, IdentityProviderError};

// ========================= Login Request =========================
/// Validated credentials; the provider is never called with blank input.
#[derive(Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        // Passwords are sent as typed; only emptiness is checked.
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Identity provider error: {0}")]
    ProviderError(String),
}

// ============================ Login Use Case =============================
#[async_trait]
pub trait ILoginUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<Session, LoginError>;
}

#[derive(Clone)]
pub struct LoginUseCase {
    identity_provider: Arc<dyn IdentityProvider>,
}

impl LoginUseCase {
    pub fn new(identity_provider: Arc<dyn IdentityProvider>) -> Self {
        Self { identity_provider }
    }
}

#[async_trait]
impl ILoginUseCase for LoginUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<Session, LoginError> {
        match self
            .identity_provider
            .sign_in(request.email(), request.password())
            .await
        {
            Ok(session) => {
                info!(user_id = %session.user.id, "Admin signed in");
                Ok(session)
            }
            Err(IdentityProviderError::InvalidCredentials)
            | Err(IdentityProviderError::InvalidSession) => {
                info!(email = %request.email(), "Sign-in rejected");
                Err(LoginError::InvalidCredentials)
            }
            Err(e) => {
                error!("Identity provider sign-in failed: {}", e);
                Err(LoginError::ProviderError(e.to_string()))
            }
        }
    }
}
