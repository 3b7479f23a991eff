pub mod charts;
pub mod errors;
pub mod models;
pub mod providers;
pub mod render;
pub mod services;
pub mod storage;

use errors::CoreError;
use models::session::Session;
use models::user::ProfileData;
use providers::graphql::GraphqlClient;
use providers::signin::SigninClient;
use providers::traits::{AuthProvider, ProfileProvider};
use render::mount::MountRegistry;
use services::dashboard_service::{keys, DashboardService};
use services::skill_catalog::SkillCatalog;
use storage::token::{self, TokenStore};

/// Main entry point for the Progress Board core library.
///
/// Holds the backend collaborators and the rendering pipeline. The flow
/// is strictly sequential: credentials are exchanged for a session,
/// the session fetches the record in one query, and the record is
/// rendered into the caller's mount registry. No retries — a failure
/// is terminal for the current pass and only the error panel renders.
#[must_use]
pub struct ProgressBoard {
    auth: Box<dyn AuthProvider>,
    profile: Box<dyn ProfileProvider>,
    dashboard: DashboardService,
    catalog: SkillCatalog,
}

impl std::fmt::Debug for ProgressBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressBoard")
            .field("auth", &self.auth.name())
            .field("profile", &self.profile.name())
            .field("strict_catalog", &self.catalog.is_strict())
            .finish()
    }
}

impl Default for ProgressBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBoard {
    /// Board wired to the fixed backend at its default host.
    pub fn new() -> Self {
        Self::build(Box::new(SigninClient::new()), Box::new(GraphqlClient::new()))
    }

    /// Board wired to a different host (tests, mirrors).
    pub fn with_base_url(base_url: &str) -> Self {
        Self::build(
            Box::new(SigninClient::with_base_url(base_url)),
            Box::new(GraphqlClient::with_base_url(base_url)),
        )
    }

    /// Board with injected collaborators — the test seam.
    pub fn with_providers(
        auth: Box<dyn AuthProvider>,
        profile: Box<dyn ProfileProvider>,
    ) -> Self {
        Self::build(auth, profile)
    }

    /// Replace the skill catalog (e.g., force strict in a deploy check).
    pub fn with_catalog(mut self, catalog: SkillCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    // ── Session lifecycle ───────────────────────────────────────────

    /// Exchange credentials for a session.
    ///
    /// Empty fields fail locally with [`CoreError::MissingCredentials`]
    /// — no network call is issued.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, CoreError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(CoreError::MissingCredentials);
        }
        self.auth.signin(username.trim(), password).await
    }

    /// Login and persist the token on success.
    pub async fn login_and_store(
        &self,
        username: &str,
        password: &str,
        store: &mut dyn TokenStore,
    ) -> Result<Session, CoreError> {
        let session = self.login(username, password).await?;
        store.save(session.token())?;
        Ok(session)
    }

    /// Read the store once and resume a session, if one is persisted.
    /// `None` means the caller must show the login surface.
    #[must_use]
    pub fn resume(&self, store: &dyn TokenStore) -> Option<Session> {
        token::resume_session(store)
    }

    /// Drop the persisted token.
    pub fn logout(&self, store: &mut dyn TokenStore) {
        store.clear();
        log::debug!("session token cleared");
    }

    // ── Fetch & render ──────────────────────────────────────────────

    /// Fetch the user's full activity record in one query.
    pub async fn load_profile(&self, session: &Session) -> Result<ProfileData, CoreError> {
        self.profile.fetch_profile(session).await
    }

    /// Render a fetched record into the given mount registry.
    pub fn render_dashboard(
        &self,
        profile: &ProfileData,
        frame: &mut MountRegistry,
    ) -> Result<(), CoreError> {
        self.dashboard.render_all(profile, &self.catalog, frame)
    }

    /// One full pass: fetch, then render. On any failure the pass is
    /// discarded and only the error panel is mounted.
    pub async fn refresh(
        &self,
        session: &Session,
        frame: &mut MountRegistry,
    ) -> Result<(), CoreError> {
        let result = match self.load_profile(session).await {
            Ok(profile) => self.render_dashboard(&profile, frame),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            log::error!("render pass failed: {e}");
            self.dashboard.render_error(&e.to_string(), frame);
        }
        result
    }

    /// A registry pre-registered with every dashboard mount key.
    #[must_use]
    pub fn default_frame() -> MountRegistry {
        MountRegistry::with_keys(keys::ALL.iter().copied())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(auth: Box<dyn AuthProvider>, profile: Box<dyn ProfileProvider>) -> Self {
        // Unmapped skill categories error in debug builds; release
        // falls back to the generic normalization.
        let catalog = if cfg!(debug_assertions) {
            SkillCatalog::strict()
        } else {
            SkillCatalog::with_known_categories()
        };
        Self {
            auth,
            profile,
            dashboard: DashboardService::new(),
            catalog,
        }
    }
}
