use thiserror::Error;

/// Unified error type for the entire progress-board-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Credentials / Auth ──────────────────────────────────────────
    #[error("Please enter both username/email and password")]
    MissingCredentials,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    // ── Token storage (native only) ─────────────────────────────────
    #[error("Token storage error: {0}")]
    TokenStorage(String),

    // ── Aggregation ─────────────────────────────────────────────────
    #[error("Unknown skill category: {0}")]
    UnknownSkillCategory(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so
        // tokens embedded in a URL never reach the UI or logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::MalformedResponse(e.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::TokenStorage(e.to_string())
    }
}
