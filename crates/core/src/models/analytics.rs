use serde::{Deserialize, Serialize};

/// Quality band of an audit ratio. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioBand {
    /// ratio >= 1.5
    Excellent,
    /// 1.2 <= ratio < 1.5
    Good,
    /// 1.0 <= ratio < 1.2
    Fair,
    /// ratio < 1.0
    NeedsImprovement,
}

impl RatioBand {
    /// Classify a ratio into its band.
    #[must_use]
    pub fn classify(ratio: f64) -> Self {
        if ratio >= 1.5 {
            RatioBand::Excellent
        } else if ratio >= 1.2 {
            RatioBand::Good
        } else if ratio >= 1.0 {
            RatioBand::Fair
        } else {
            RatioBand::NeedsImprovement
        }
    }

    /// CSS class suffix used by the audit panel.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            RatioBand::Excellent => "excellent",
            RatioBand::Good => "good",
            RatioBand::Fair => "fair",
            RatioBand::NeedsImprovement => "poor",
        }
    }

    /// Human-readable comment shown next to the ratio.
    #[must_use]
    pub fn comment(&self) -> &'static str {
        match self {
            RatioBand::Excellent => "(Excellent)",
            RatioBand::Good => "(Good)",
            RatioBand::Fair => "(Fair)",
            RatioBand::NeedsImprovement => "(Needs improvement)",
        }
    }
}

impl std::fmt::Display for RatioBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_class())
    }
}
