use serde::{Deserialize, Serialize};

/// One (label, value) pair of an aggregated series.
///
/// Produced by grouping transactions by a key and summing amounts;
/// consumed directly by the chart renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Display label (project name, skill category, ...)
    pub label: String,

    /// Summed amount
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
