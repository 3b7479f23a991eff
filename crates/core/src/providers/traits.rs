use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::session::Session;
use crate::models::user::ProfileData;

/// Trait abstraction for the credential-exchange collaborator.
///
/// The backend is a fixed external fact; the trait exists so the facade
/// can be exercised in tests without a network.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AuthProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Exchange credentials for a session token.
    async fn signin(&self, username: &str, password: &str) -> Result<Session, CoreError>;
}

/// Trait abstraction for the data-query collaborator.
///
/// One call returns the whole activity record — profile fields, level,
/// skill transactions, and the chronological transaction list.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ProfileProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the current user's record with the given session.
    async fn fetch_profile(&self, session: &Session) -> Result<ProfileData, CoreError>;
}
