use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

#[derive(Clone)]
pub struct IdentityConfig {
    /// Project URL of the identity service, without a trailing slash.
    pub base_url: String,
    /// Public (anon) key sent as the `apikey` header.
    pub api_key: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl IdentityConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Result<Self, IdentityConfigError> {
        let base_url =
            std::env::var("IDENTITY_URL").map_err(|_| IdentityConfigError::Missing("IDENTITY_URL"))?;
        let api_key = std::env::var("IDENTITY_API_KEY")
            .map_err(|_| IdentityConfigError::Missing("IDENTITY_API_KEY"))?;

        let mut config = Self::new(base_url, api_key);

        if let Some(secs) = std::env::var("IDENTITY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path.trim_start_matches('/'))
    }
}
