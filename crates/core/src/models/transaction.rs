use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The category of an activity transaction.
/// Classified from the backend's raw `type` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Experience points earned on a project or exercise
    Xp,
    /// Audit bytes given (auditing someone else's project)
    Up,
    /// Audit bytes received (being audited)
    Down,
    /// Skill points, raw type carries the category (e.g., "algo_skill")
    Skill,
    /// Level progression marker
    Level,
}

impl TransactionKind {
    /// Classify a raw backend `type` string.
    ///
    /// Skill transactions use a `skill` marker embedded in the type
    /// (`algo_skill`, `skill_go`, ...); everything else is an exact match.
    /// Unrecognized strings return `None` — the caller decides whether
    /// that is worth surfacing.
    pub fn classify(raw: &str) -> Option<Self> {
        match raw {
            "xp" => Some(TransactionKind::Xp),
            "up" => Some(TransactionKind::Up),
            "down" => Some(TransactionKind::Down),
            "level" => Some(TransactionKind::Level),
            other if other.contains("skill") => Some(TransactionKind::Skill),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Xp => write!(f, "xp"),
            TransactionKind::Up => write!(f, "up"),
            TransactionKind::Down => write!(f, "down"),
            TransactionKind::Skill => write!(f, "skill"),
            TransactionKind::Level => write!(f, "level"),
        }
    }
}

/// A single activity transaction from the backend.
///
/// Sourced verbatim from the query result — never mutated, only
/// filtered and aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Classified category
    pub kind: TransactionKind,

    /// The backend's raw `type` string (kept for skill category mapping)
    pub raw_type: String,

    /// XP points or audit bytes — always non-negative
    pub amount: u64,

    /// When the transaction occurred
    pub occurred_at: DateTime<Utc>,

    /// Path of the subject object (e.g., "/bahrain/bh-module/graphql")
    #[serde(default)]
    pub subject_path: String,

    /// Display name of the subject object (e.g., "graphql")
    #[serde(default)]
    pub subject_name: String,
}

impl Transaction {
    pub fn new(
        raw_type: impl Into<String>,
        amount: u64,
        occurred_at: DateTime<Utc>,
    ) -> Option<Self> {
        let raw_type = raw_type.into();
        let kind = TransactionKind::classify(&raw_type)?;
        Some(Self {
            kind,
            raw_type,
            amount,
            occurred_at,
            subject_path: String::new(),
            subject_name: String::new(),
        })
    }

    /// Create a transaction with its subject attached.
    pub fn with_subject(
        raw_type: impl Into<String>,
        amount: u64,
        occurred_at: DateTime<Utc>,
        subject_path: impl Into<String>,
        subject_name: impl Into<String>,
    ) -> Option<Self> {
        let mut tx = Self::new(raw_type, amount, occurred_at)?;
        tx.subject_path = subject_path.into();
        tx.subject_name = subject_name.into();
        Some(tx)
    }
}
