//! Token persistence collaborators.
//!
//! The page-load contract: the stored token is read once before any
//! rendering; absence sends the user to the login surface. The store is
//! always passed in explicitly — nothing in the library reads ambient
//! state.

use crate::errors::CoreError;
use crate::models::session::Session;

/// One persisted token string. Implementations are deliberately dumb —
/// the token is opaque and upstream owns its lifetime.
pub trait TokenStore {
    /// The raw stored token, if any.
    fn load(&self) -> Option<String>;

    /// Persist a token, replacing any prior one.
    fn save(&mut self, token: &str) -> Result<(), CoreError>;

    /// Remove the stored token (logout).
    fn clear(&mut self);
}

/// In-memory store: the default for WASM shells (which bridge to their
/// own persistence) and for tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self { token: None }
    }

    /// Start with a token already present.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.clone()
    }

    fn save(&mut self, token: &str) -> Result<(), CoreError> {
        self.token = Some(token.to_string());
        Ok(())
    }

    fn clear(&mut self) {
        self.token = None;
    }
}

/// File-backed store for native shells (native only, not WASM).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FileTokenStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileTokenStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if !contents.trim().is_empty() => Some(contents),
            _ => None,
        }
    }

    fn save(&mut self, token: &str) -> Result<(), CoreError> {
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to clear token file: {e}");
            }
        }
    }
}

/// Read the store once and normalize into a session.
///
/// `None` means "not signed in" — the caller shows the login surface
/// and nothing is rendered.
#[must_use]
pub fn resume_session(store: &dyn TokenStore) -> Option<Session> {
    let raw = store.load()?;
    let session = Session::from_token(raw);
    if session.is_empty() {
        None
    } else {
        Some(session)
    }
}
