use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// The current user's profile fields, as returned by the data query.
///
/// Optional fields may be missing on older accounts; panels render
/// them as "N/A" rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user id
    pub id: u64,

    /// Login / username
    pub login: String,

    /// First name, when the campus records one
    #[serde(default)]
    pub first_name: Option<String>,

    /// Last name, when the campus records one
    #[serde(default)]
    pub last_name: Option<String>,

    /// Contact email
    #[serde(default)]
    pub email: Option<String>,

    /// Campus identifier (e.g., "bahrain")
    #[serde(default)]
    pub campus: Option<String>,

    /// Linked GitHub account id
    #[serde(default)]
    pub github_id: Option<u64>,

    /// Audit ratio as computed by the backend (given / received)
    #[serde(default)]
    pub audit_ratio: f64,

    /// Total audit bytes given
    #[serde(default)]
    pub total_up: u64,

    /// Total audit bytes received
    #[serde(default)]
    pub total_down: u64,
}

impl UserProfile {
    /// "First Last" when either name is known, falling back to the login.
    #[must_use]
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        let full = format!("{first} {last}");
        let full = full.trim();
        if full.is_empty() {
            self.login.clone()
        } else {
            full.to_string()
        }
    }
}

/// One complete query response: everything the dashboard renders.
///
/// Assembled by the profile provider from a single round-trip — either
/// the whole record is present or the fetch failed. No partial state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    /// The current user's profile fields
    pub user: UserProfile,

    /// Amount of the most-recent level-type transaction, when any exists
    #[serde(default)]
    pub level: Option<u64>,

    /// All skill-category transactions, amount descending
    pub skills: Vec<Transaction>,

    /// The full transaction list, chronological (ascending `occurred_at`)
    pub transactions: Vec<Transaction>,
}
