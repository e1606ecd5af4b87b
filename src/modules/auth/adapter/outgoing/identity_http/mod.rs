mod config;
mod http_identity_provider;

pub use config::{IdentityConfig, IdentityConfigError};
pub use http_identity_provider::HttpIdentityProvider;
