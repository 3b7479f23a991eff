use std::collections::HashMap;

use crate::charts::area;
use crate::errors::CoreError;
use crate::models::series::SeriesPoint;
use crate::models::transaction::{Transaction, TransactionKind};

use super::skill_catalog::SkillCatalog;

/// Groups and sums the raw transaction record into chart-ready series.
///
/// Transactions are never mutated — every method filters and
/// accumulates into fresh values.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// XP summed per project, in first-seen (chronological) order.
    ///
    /// The subject name labels the column; transactions without one
    /// fall back to the last segment of their subject path.
    #[must_use]
    pub fn xp_by_project(&self, transactions: &[Transaction]) -> Vec<SeriesPoint> {
        let mut series: Vec<SeriesPoint> = Vec::new();
        let mut index_of: HashMap<String, usize> = HashMap::new();

        for tx in transactions {
            if tx.kind != TransactionKind::Xp {
                continue;
            }
            let label = project_label(tx);
            match index_of.get(&label).copied() {
                Some(i) => series[i].value += tx.amount as f64,
                None => {
                    index_of.insert(label.clone(), series.len());
                    series.push(SeriesPoint::new(label, tx.amount as f64));
                }
            }
        }

        series
    }

    /// Skill amounts summed per catalog label, sorted descending by
    /// sum. Ties keep their first-seen order (stable sort).
    pub fn group_skills(
        &self,
        skills: &[Transaction],
        catalog: &SkillCatalog,
    ) -> Result<Vec<SeriesPoint>, CoreError> {
        let mut series: Vec<SeriesPoint> = Vec::new();
        let mut index_of: HashMap<String, usize> = HashMap::new();

        for tx in skills {
            if tx.kind != TransactionKind::Skill {
                continue;
            }
            let label = catalog.label_for(&tx.raw_type)?;
            match index_of.get(&label).copied() {
                Some(i) => series[i].value += tx.amount as f64,
                None => {
                    index_of.insert(label.clone(), series.len());
                    series.push(SeriesPoint::new(label, tx.amount as f64));
                }
            }
        }

        series.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(series)
    }

    /// Total bytes of the `up` and `down` kinds, summed independently.
    #[must_use]
    pub fn audit_totals(&self, transactions: &[Transaction]) -> (u64, u64) {
        let mut up = 0;
        let mut down = 0;
        for tx in transactions {
            match tx.kind {
                TransactionKind::Up => up += tx.amount,
                TransactionKind::Down => down += tx.amount,
                _ => {}
            }
        }
        (up, down)
    }

    /// Number of `up` and `down` transactions — the success/fail pair
    /// the donut chart consumes.
    #[must_use]
    pub fn audit_counts(&self, transactions: &[Transaction]) -> (u64, u64) {
        let mut up = 0;
        let mut down = 0;
        for tx in transactions {
            match tx.kind {
                TransactionKind::Up => up += 1,
                TransactionKind::Down => down += 1,
                _ => {}
            }
        }
        (up, down)
    }

    /// Running cumulative XP in KB — the area chart's data step.
    #[must_use]
    pub fn cumulative_xp_kb(&self, transactions: &[Transaction]) -> Vec<f64> {
        area::cumulative_xp_kb(transactions)
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}

fn project_label(tx: &Transaction) -> String {
    if !tx.subject_name.is_empty() {
        return tx.subject_name.clone();
    }
    tx.subject_path
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("unknown")
        .to_string()
}
