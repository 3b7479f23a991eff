// ═══════════════════════════════════════════════════════════════════
// Integration Tests — ProgressBoard facade: login, resume, refresh,
// error panels, token stores (mock providers, no network)
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use progress_board_core::errors::CoreError;
use progress_board_core::models::session::Session;
use progress_board_core::models::transaction::Transaction;
use progress_board_core::models::user::{ProfileData, UserProfile};
use progress_board_core::providers::traits::{AuthProvider, ProfileProvider};
use progress_board_core::services::dashboard_service::keys;
use progress_board_core::services::skill_catalog::SkillCatalog;
use progress_board_core::storage::token::{FileTokenStore, MemoryTokenStore, TokenStore};
use progress_board_core::ProgressBoard;

fn dt(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

fn profile_data() -> ProfileData {
    ProfileData {
        user: UserProfile {
            id: 1771,
            login: "jdoe".to_string(),
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            campus: Some("bahrain".to_string()),
            github_id: Some(99),
            audit_ratio: 1.37,
            total_up: 1_200_000,
            total_down: 900_000,
        },
        level: Some(12),
        skills: vec![
            Transaction::new("go_skill", 10, dt(2025, 1, 3)).unwrap(),
            Transaction::new("algo_skill", 8, dt(2025, 1, 1)).unwrap(),
        ],
        transactions: vec![
            Transaction::with_subject("xp", 1024, dt(2025, 1, 1), "/m/graphql", "graphql")
                .unwrap(),
            Transaction::new("up", 700_000, dt(2025, 1, 2)).unwrap(),
            Transaction::new("down", 900_000, dt(2025, 1, 3)).unwrap(),
            Transaction::with_subject("xp", 2048, dt(2025, 1, 4), "/m/groupie", "groupie")
                .unwrap(),
        ],
    }
}

// ═══════════════════════════════════════════════════════════════════
// Mock Providers
// ═══════════════════════════════════════════════════════════════════

/// Accepts exactly one credential pair; everything else fails the way
/// the real endpoint does.
struct MockAuth;

#[async_trait]
impl AuthProvider for MockAuth {
    fn name(&self) -> &str {
        "MockAuth"
    }

    async fn signin(&self, username: &str, password: &str) -> Result<Session, CoreError> {
        if username == "jdoe" && password == "secret" {
            // The endpoint body is a JSON string literal.
            Ok(Session::from_token("\"mock-token\""))
        } else {
            Err(CoreError::AuthenticationFailed(
                "User does not exist or password incorrect".to_string(),
            ))
        }
    }
}

/// Serves a canned record, or a canned failure.
struct MockProfile {
    data: Option<ProfileData>,
    error: Option<String>,
}

impl MockProfile {
    fn ok(data: ProfileData) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            data: None,
            error: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl ProfileProvider for MockProfile {
    fn name(&self) -> &str {
        "MockProfile"
    }

    async fn fetch_profile(&self, session: &Session) -> Result<ProfileData, CoreError> {
        assert_eq!(session.token(), "mock-token", "query issued without the token");
        match (&self.data, &self.error) {
            (Some(data), _) => Ok(data.clone()),
            (None, Some(message)) => Err(CoreError::GraphQl(message.clone())),
            (None, None) => unreachable!(),
        }
    }
}

fn board() -> ProgressBoard {
    ProgressBoard::with_providers(Box::new(MockAuth), Box::new(MockProfile::ok(profile_data())))
        .with_catalog(SkillCatalog::with_known_categories())
}

fn failing_board(message: &str) -> ProgressBoard {
    ProgressBoard::with_providers(Box::new(MockAuth), Box::new(MockProfile::failing(message)))
        .with_catalog(SkillCatalog::with_known_categories())
}

// ═══════════════════════════════════════════════════════════════════
//  Login
// ═══════════════════════════════════════════════════════════════════

mod login {
    use super::*;

    #[tokio::test]
    async fn empty_fields_fail_locally() {
        let board = board();
        for (user, pass) in [("", "secret"), ("jdoe", ""), ("", ""), ("   ", "secret")] {
            let err = board.login(user, pass).await.unwrap_err();
            assert!(matches!(err, CoreError::MissingCredentials));
        }
    }

    #[tokio::test]
    async fn valid_credentials_yield_a_normalized_session() {
        let session = board().login("jdoe", "secret").await.unwrap();
        // Quotes around the endpoint body are stripped.
        assert_eq!(session.token(), "mock-token");
    }

    #[tokio::test]
    async fn username_whitespace_is_trimmed() {
        let session = board().login("  jdoe  ", "secret").await.unwrap();
        assert_eq!(session.token(), "mock-token");
    }

    #[tokio::test]
    async fn bad_credentials_surface_the_backend_message() {
        let err = board().login("jdoe", "wrong").await.unwrap_err();
        assert!(matches!(
            &err,
            CoreError::AuthenticationFailed(m) if m == "User does not exist or password incorrect"
        ));
    }

    #[tokio::test]
    async fn login_and_store_persists_the_token() {
        let mut store = MemoryTokenStore::new();
        let board = board();
        board
            .login_and_store("jdoe", "secret", &mut store)
            .await
            .unwrap();
        assert_eq!(store.load().as_deref(), Some("mock-token"));
    }

    #[tokio::test]
    async fn failed_login_stores_nothing() {
        let mut store = MemoryTokenStore::new();
        let board = board();
        assert!(board
            .login_and_store("jdoe", "wrong", &mut store)
            .await
            .is_err());
        assert_eq!(store.load(), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Resume / logout
// ═══════════════════════════════════════════════════════════════════

mod session_lifecycle {
    use super::*;

    #[test]
    fn resume_reads_and_normalizes_the_stored_token() {
        let store = MemoryTokenStore::with_token("\"mock-token\"");
        let session = board().resume(&store).unwrap();
        assert_eq!(session.token(), "mock-token");
    }

    #[test]
    fn empty_store_means_login_surface() {
        let store = MemoryTokenStore::new();
        assert!(board().resume(&store).is_none());
    }

    #[test]
    fn blank_token_means_login_surface() {
        let store = MemoryTokenStore::with_token("  \"\"  ");
        assert!(board().resume(&store).is_none());
    }

    #[test]
    fn logout_clears_the_store() {
        let mut store = MemoryTokenStore::with_token("mock-token");
        let board = board();
        board.logout(&mut store);
        assert!(store.load().is_none());
        assert!(board.resume(&store).is_none());
    }

    #[test]
    fn file_store_round_trips() {
        let path = std::env::temp_dir().join(format!(
            "progress-board-token-{}.txt",
            std::process::id()
        ));
        let mut store = FileTokenStore::new(&path);
        store.clear();

        assert!(store.load().is_none());
        store.save("mock-token").unwrap();
        assert_eq!(store.load().as_deref(), Some("mock-token"));
        store.clear();
        assert!(store.load().is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Refresh (fetch → aggregate → render)
// ═══════════════════════════════════════════════════════════════════

mod refresh {
    use super::*;

    #[tokio::test]
    async fn full_pass_populates_every_mount() {
        let board = board();
        let session = board.login("jdoe", "secret").await.unwrap();
        let mut frame = ProgressBoard::default_frame();

        board.refresh(&session, &mut frame).await.unwrap();

        for key in keys::ALL {
            assert!(
                !frame.content(key).unwrap().is_empty(),
                "mount '{key}' left empty"
            );
        }
        assert!(frame.content(keys::USER).unwrap().contains("Jane Doe"));
        assert!(frame.content(keys::XP_CHART).unwrap().starts_with("<svg "));
    }

    #[tokio::test]
    async fn fetch_failure_renders_only_the_error_panel() {
        let board = failing_board("field 'transaction' not found");
        let session = board.login("jdoe", "secret").await.unwrap();
        let mut frame = ProgressBoard::default_frame();

        let err = board.refresh(&session, &mut frame).await.unwrap_err();
        assert!(matches!(err, CoreError::GraphQl(_)));

        let panel = frame.content(keys::USER).unwrap();
        assert!(panel.contains("Failed to load data"));
        assert!(panel.contains("field &apos;transaction&apos; not found"));

        for key in keys::ALL.iter().filter(|k| **k != keys::USER) {
            assert_eq!(frame.content(key), Some(""), "mount '{key}' was touched");
        }
    }

    #[tokio::test]
    async fn strict_catalog_discards_the_whole_pass() {
        let mut data = profile_data();
        data.skills
            .push(Transaction::new("mystery_skill", 1, dt(2025, 1, 5)).unwrap());
        let board =
            ProgressBoard::with_providers(Box::new(MockAuth), Box::new(MockProfile::ok(data)))
                .with_catalog(SkillCatalog::strict());
        let session = board.login("jdoe", "secret").await.unwrap();
        let mut frame = ProgressBoard::default_frame();

        let err = board.refresh(&session, &mut frame).await.unwrap_err();
        assert!(matches!(err, CoreError::UnknownSkillCategory(_)));

        // Only the error panel is visible; partial data is discarded.
        assert!(frame
            .content(keys::USER)
            .unwrap()
            .contains("Failed to load data"));
        assert_eq!(frame.content(keys::SKILLS), Some(""));
        assert_eq!(frame.content(keys::XP_CHART), Some(""));
    }

    #[tokio::test]
    async fn refreshing_twice_is_indistinguishable_from_once() {
        let board = board();
        let session = board.login("jdoe", "secret").await.unwrap();
        let mut frame = ProgressBoard::default_frame();

        board.refresh(&session, &mut frame).await.unwrap();
        let first: Vec<String> = keys::ALL
            .iter()
            .map(|k| frame.content(k).unwrap().to_string())
            .collect();

        board.refresh(&session, &mut frame).await.unwrap();
        let second: Vec<String> = keys::ALL
            .iter()
            .map(|k| frame.content(k).unwrap().to_string())
            .collect();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn render_dashboard_works_without_a_network_step() {
        let board = board();
        let mut frame = ProgressBoard::default_frame();
        board
            .render_dashboard(&profile_data(), &mut frame)
            .unwrap();
        assert!(frame
            .content(keys::AUDIT_BYTES_CHART)
            .unwrap()
            .starts_with("<svg "));
    }

    #[tokio::test]
    async fn missing_mounts_are_silently_skipped() {
        use progress_board_core::render::mount::MountRegistry;

        let board = board();
        let session = board.login("jdoe", "secret").await.unwrap();
        // Page only has the two audit regions.
        let mut frame =
            MountRegistry::with_keys([keys::AUDIT_RATIO_CHART, keys::AUDIT_BYTES_CHART]);

        board.refresh(&session, &mut frame).await.unwrap();

        assert!(!frame.content(keys::AUDIT_RATIO_CHART).unwrap().is_empty());
        assert_eq!(frame.content(keys::USER), None);
    }
}
