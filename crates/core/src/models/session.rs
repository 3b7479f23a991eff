use serde::{Deserialize, Serialize};

/// An authenticated session: the bearer token as an explicit value.
///
/// Passed into the data-fetch step rather than read from ambient
/// storage, so fetch logic is testable without a real store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: String,
}

impl Session {
    /// Wrap a token, normalizing one pair of surrounding double quotes.
    ///
    /// The signin endpoint returns the token as a JSON string literal;
    /// a store that persisted the raw body keeps the quotes around it.
    pub fn from_token(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim();
        let token = if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
            trimmed[1..trimmed.len() - 1].to_string()
        } else {
            trimmed.to_string()
        };
        Self { token }
    }

    /// The bearer token to present to the data query endpoint.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// True when the token is empty — nothing to authenticate with.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }
}
