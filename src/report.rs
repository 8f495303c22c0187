// Aggregate report — combines per-column tallies for the final display.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::tally::ColumnTally;
use crate::taxonomy::Taxonomy;

/// Grand totals across every analyzed column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub total: usize,
    pub emotion: usize,
    pub concrete: usize,
    pub other: usize,
}

impl CategoryTotals {
    /// Percentage of all clusters in a category; 0.0 when nothing was found.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }
}

/// Everything the combined view of a run needs, computed once from the
/// per-column tallies. Plain data — rendering and export live elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateReport {
    pub totals: CategoryTotals,
    /// Every distinct base emoji seen across all columns.
    pub distinct_bases: BTreeSet<String>,
    /// The subset of `distinct_bases` absent from both reference sets.
    pub not_in_taxonomy: BTreeSet<String>,
    /// Occurrence counts of not-in-taxonomy bases across all columns,
    /// sorted by descending count, then ascending code point.
    pub unmatched_frequency: Vec<(String, usize)>,
}

impl AggregateReport {
    pub fn build(taxonomy: &Taxonomy, tallies: &[ColumnTally]) -> Self {
        let mut totals = CategoryTotals::default();
        let mut distinct_bases = BTreeSet::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for tally in tallies {
            totals.total += tally.total;
            totals.emotion += tally.emotion;
            totals.concrete += tally.concrete;
            totals.other += tally.other;
            distinct_bases.extend(tally.seen_bases.iter().cloned());
            for unmatched in &tally.unmatched {
                // A lone modifier cluster normalizes to an empty base;
                // it cannot be ranked or looked up, so it is skipped here.
                if !unmatched.base.is_empty() {
                    *counts.entry(unmatched.base.as_str()).or_default() += 1;
                }
            }
        }

        let not_in_taxonomy: BTreeSet<String> = distinct_bases
            .iter()
            .filter(|base| !base.is_empty() && !taxonomy.contains(base))
            .cloned()
            .collect();

        let mut unmatched_frequency: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(base, count)| (base.to_string(), count))
            .collect();
        // String order is code-point order, so the secondary key is the
        // deterministic ascending-code-point tie-break.
        unmatched_frequency.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            totals,
            distinct_bases,
            not_in_taxonomy,
            unmatched_frequency,
        }
    }
}
