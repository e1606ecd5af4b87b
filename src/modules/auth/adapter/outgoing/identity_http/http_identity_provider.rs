use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use super::config::IdentityConfig;
use crate::auth::application::domain::entities::{AdminIdentity, Session};
use crate::auth::application::ports::outgoing::{IdentityProvider, IdentityProviderError};

//
// ──────────────────────────────────────────────────────────
// Wire format (GoTrue-compatible)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct UserPayload {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenPayload {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    user: UserPayload,
}

impl From<UserPayload> for AdminIdentity {
    fn from(user: UserPayload) -> Self {
        AdminIdentity {
            id: user.id,
            email: user.email,
        }
    }
}

impl From<TokenPayload> for Session {
    fn from(payload: TokenPayload) -> Self {
        Session {
            access_token: payload.access_token,
            refresh_token: payload.refresh_token,
            expires_in: payload.expires_in,
            user: payload.user.into(),
        }
    }
}

/// Which kind of rejection a 4xx means for the call being made.
#[derive(Clone, Copy)]
enum Rejection {
    Credentials,
    Session,
}

fn map_status(status: StatusCode, body: &str, rejection: Rejection) -> IdentityProviderError {
    if status.is_client_error() && status != StatusCode::TOO_MANY_REQUESTS {
        return match rejection {
            Rejection::Credentials => IdentityProviderError::InvalidCredentials,
            Rejection::Session => IdentityProviderError::InvalidSession,
        };
    }

    IdentityProviderError::Unavailable(format!("status {}: {}", status.as_u16(), body))
}

fn parse<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, IdentityProviderError> {
    serde_json::from_str(body).map_err(|e| IdentityProviderError::UnexpectedResponse(e.to_string()))
}

fn transport_error(e: reqwest::Error) -> IdentityProviderError {
    IdentityProviderError::Unavailable(e.to_string())
}

//
// ──────────────────────────────────────────────────────────
// Adapter
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    config: IdentityConfig,
}

impl HttpIdentityProvider {
    pub fn new(config: IdentityConfig) -> Result<Self, IdentityProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()
            .map_err(transport_error)?;

        Ok(Self { client, config })
    }

    async fn token_grant(
        &self,
        grant_type: &str,
        body: serde_json::Value,
        rejection: Rejection,
    ) -> Result<Session, IdentityProviderError> {
        let response = self
            .client
            .post(self.config.endpoint(&format!("token?grant_type={}", grant_type)))
            .header("apikey", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(map_status(status, &text, rejection));
        }

        parse::<TokenPayload>(&text).map(Session::from)
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, IdentityProviderError> {
        self.token_grant(
            "password",
            json!({ "email": email, "password": password }),
            Rejection::Credentials,
        )
        .await
    }

    async fn get_user(&self, access_token: &str) -> Result<AdminIdentity, IdentityProviderError> {
        let response = self
            .client
            .get(self.config.endpoint("user"))
            .header("apikey", &self.config.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(map_status(status, &text, Rejection::Session));
        }

        parse::<UserPayload>(&text).map(AdminIdentity::from)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, IdentityProviderError> {
        self.token_grant(
            "refresh_token",
            json!({ "refresh_token": refresh_token }),
            Rejection::Session,
        )
        .await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), IdentityProviderError> {
        let response = self
            .client
            .post(self.config.endpoint("logout"))
            .header("apikey", &self.config.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        Err(map_status(status, &text, Rejection::Session))
    }
}
