use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::session::Session;

use super::traits::AuthProvider;

const DEFAULT_BASE_URL: &str = "https://learn.reboot01.com";

/// Credential-exchange collaborator.
///
/// POSTs HTTP Basic credentials to the signin endpoint; the response
/// body is the bearer token as raw text. The endpoint reports a bad
/// login as a 200-shaped JSON `{"error": ...}` payload as well as via
/// non-success statuses, so both are treated as authentication
/// failures and no token is produced.
pub struct SigninClient {
    client: Client,
    base_url: String,
}

impl SigninClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into(),
        }
    }
}

impl Default for SigninClient {
    fn default() -> Self {
        Self::new()
    }
}

// ── Signin error payload ────────────────────────────────────────────

#[derive(Deserialize)]
struct ErrorPayload {
    error: String,
}

/// Distinguish the known error-shaped payload from a valid token body.
///
/// Returns the failure message when the body is `{"error": ...}` JSON,
/// `None` when it looks like a token.
#[must_use]
pub fn recognize_error_payload(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorPayload>(body.trim())
        .ok()
        .map(|payload| payload.error)
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AuthProvider for SigninClient {
    fn name(&self) -> &str {
        "Signin"
    }

    async fn signin(&self, username: &str, password: &str) -> Result<Session, CoreError> {
        let credentials = BASE64.encode(format!("{username}:{password}"));
        let url = format!("{}/api/auth/signin", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Basic {credentials}"))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if let Some(message) = recognize_error_payload(&body) {
            log::warn!("signin rejected for '{username}'");
            return Err(CoreError::AuthenticationFailed(message));
        }
        if !status.is_success() {
            return Err(CoreError::AuthenticationFailed(format!(
                "signin returned status {status}"
            )));
        }

        let session = Session::from_token(body);
        if session.is_empty() {
            return Err(CoreError::AuthenticationFailed(
                "signin returned an empty token".to_string(),
            ));
        }

        log::debug!("signin succeeded for '{username}'");
        Ok(session)
    }
}
