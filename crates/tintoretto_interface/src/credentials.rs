//! Credential injection for the publisher.

/// Source of the bearer credential attached to destination dispatches.
///
/// The publisher takes a credential store at construction instead of
/// reading tokens from ambient state inside the fan-out logic.
pub trait CredentialStore: Send + Sync {
    /// The bearer token, if one is available.
    fn bearer_token(&self) -> Option<String>;
}

/// A fixed token handed in by the caller.
///
/// # Examples
///
/// ```
/// use tintoretto_interface::{CredentialStore, StaticCredentials};
///
/// let store = StaticCredentials::new("token-123");
/// assert_eq!(store.bearer_token().as_deref(), Some("token-123"));
/// ```
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    token: String,
}

impl StaticCredentials {
    /// Create a store holding the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl CredentialStore for StaticCredentials {
    fn bearer_token(&self) -> Option<String> {
        Some(self.token.clone())
    }
}

/// Reads a named environment variable once at construction.
///
/// An unset or empty variable yields no credential, which makes the
/// publisher short-circuit every destination.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    token: Option<String>,
}

impl EnvCredentials {
    /// Capture the variable's current value.
    pub fn new(var: &str) -> Self {
        let token = std::env::var(var).ok().filter(|t| !t.is_empty());
        Self { token }
    }
}

impl CredentialStore for EnvCredentials {
    fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}
