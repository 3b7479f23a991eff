use std::collections::HashMap;

use crate::errors::CoreError;

/// Category stems the backend is known to emit, in either the
/// `skill_<stem>` or `<stem>_skill` form.
const KNOWN_STEMS: &[&str] = &[
    "go",
    "js",
    "html",
    "css",
    "sql",
    "unix",
    "docker",
    "algo",
    "prog",
    "stats",
    "game",
    "tcp",
    "sys-admin",
    "back-end",
    "front-end",
];

/// Declarative mapping from raw backend skill categories to display
/// labels.
///
/// Replaces ad-hoc suffix stripping: the same raw string always maps to
/// the same label, and in strict mode an identifier outside the known
/// set fails loudly instead of silently mis-grouping.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    labels: HashMap<String, String>,
    strict: bool,
}

impl SkillCatalog {
    /// Lenient catalog seeded with the known identifier set. Unknown
    /// categories fall back to [`normalize_category`].
    pub fn with_known_categories() -> Self {
        let mut catalog = Self {
            labels: HashMap::new(),
            strict: false,
        };
        for stem in KNOWN_STEMS {
            let label = stem.replace('_', " ");
            catalog.insert(format!("skill_{stem}"), label.clone());
            catalog.insert(format!("{stem}_skill"), label);
        }
        catalog
    }

    /// Strict catalog: unknown categories are an error.
    pub fn strict() -> Self {
        let mut catalog = Self::with_known_categories();
        catalog.strict = true;
        catalog
    }

    /// Register (or override) one raw → label mapping.
    pub fn insert(&mut self, raw: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(raw.into(), label.into());
    }

    /// True when unknown categories are rejected.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Display label for a raw category string.
    pub fn label_for(&self, raw: &str) -> Result<String, CoreError> {
        if let Some(label) = self.labels.get(raw) {
            return Ok(label.clone());
        }
        if self.strict {
            log::warn!("unrecognized skill category '{raw}'");
            return Err(CoreError::UnknownSkillCategory(raw.to_string()));
        }
        Ok(normalize_category(raw))
    }

    /// Validate a batch of raw categories up front, so a bad deploy
    /// fails at startup rather than mid-render.
    pub fn validate<'a, I>(&self, raw_categories: I) -> Result<(), CoreError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for raw in raw_categories {
            self.label_for(raw)?;
        }
        Ok(())
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::with_known_categories()
    }
}

/// Fallback normalization for categories outside the catalog: strip one
/// `skill_` prefix or `_skill` suffix, then map separators to spaces.
#[must_use]
pub fn normalize_category(raw: &str) -> String {
    let stem = raw
        .strip_prefix("skill_")
        .or_else(|| raw.strip_suffix("_skill"))
        .unwrap_or(raw);
    stem.replace('_', " ")
}
