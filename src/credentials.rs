//! Credential Providers
//!
//! Bearer tokens are injected rather than read from a global, so the
//! editor can be driven without any hosting page.

use std::sync::Arc;

/// Env var read by [`EnvToken`]
pub const TOKEN_ENV: &str = "COLORING_ADMIN_TOKEN";

/// Source of the bearer token attached to every catalog call
pub trait CredentialProvider: Send + Sync {
    /// `None` when no token is available; expiry is the host's problem
    fn bearer_token(&self) -> Option<String>;
}

/// A fixed token handed over by the host
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        let token = self.0.trim();
        (!token.is_empty()).then(|| token.to_string())
    }
}

/// Reads the token from the environment on every call
#[derive(Debug, Clone, Default)]
pub struct EnvToken {
    var: Option<String>,
}

impl EnvToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_var(var: impl Into<String>) -> Self {
        Self { var: Some(var.into()) }
    }
}

impl CredentialProvider for EnvToken {
    fn bearer_token(&self) -> Option<String> {
        let var = self.var.as_deref().unwrap_or(TOKEN_ENV);
        std::env::var(var)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

impl<T: CredentialProvider + ?Sized> CredentialProvider for Arc<T> {
    fn bearer_token(&self) -> Option<String> {
        (**self).bearer_token()
    }
}
