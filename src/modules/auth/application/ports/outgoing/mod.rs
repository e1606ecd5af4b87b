pub mod identity_provider;

pub use identity_provider::{IdentityProvider, IdentityProviderError};

#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
