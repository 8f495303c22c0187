// Per-column tally — the accumulator threaded through a response scan.
//
// One ColumnTally per analyzed source column, created fresh per run and
// owned by the caller. Nothing here is global: concurrent analyses over
// disjoint data stay safe because each gets its own accumulator.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::emoji::normalize::base_emoji;
use crate::emoji::tokenizer::tokenize;
use crate::taxonomy::{Category, Taxonomy};

/// One out-of-taxonomy emoji occurrence, kept for later inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnmatchedEmoji {
    /// The cluster exactly as authored (tones, joiners, selectors intact).
    pub cluster: String,
    /// Its normalized base — the key that failed the category lookup.
    pub base: String,
    /// Zero-based row index in the source column.
    pub row: usize,
}

/// Category counts and unmatched records for one response column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnTally {
    pub column: String,
    pub total: usize,
    pub emotion: usize,
    pub concrete: usize,
    pub other: usize,
    /// Every distinct base emoji seen in this column, in or out of taxonomy.
    pub seen_bases: BTreeSet<String>,
    pub unmatched: Vec<UnmatchedEmoji>,
}

impl ColumnTally {
    pub fn new(column: &str) -> Self {
        Self {
            column: column.to_string(),
            total: 0,
            emotion: 0,
            concrete: 0,
            other: 0,
            seen_bases: BTreeSet::new(),
            unmatched: Vec::new(),
        }
    }

    /// Tokenize one response and fold its clusters into the tally.
    ///
    /// A missing cell contributes nothing — absent data is empty text,
    /// not an error.
    pub fn scan_response(&mut self, taxonomy: &Taxonomy, row: usize, response: Option<&str>) {
        let Some(text) = response else { return };

        for cluster in tokenize(text) {
            let base = base_emoji(&cluster);
            self.total += 1;
            match taxonomy.classify(&base) {
                Category::Emotion => self.emotion += 1,
                Category::Concrete => self.concrete += 1,
                Category::Other => {
                    self.other += 1;
                    self.unmatched.push(UnmatchedEmoji {
                        cluster,
                        base: base.clone(),
                        row,
                    });
                }
            }
            // A lone modifier cluster normalizes to an empty base; it has
            // no lookup identity, so it never enters the distinct-base set.
            if !base.is_empty() {
                self.seen_bases.insert(base);
            }
        }
    }
}

/// Scan a whole response column and return its tally.
pub fn tally_column(taxonomy: &Taxonomy, column: &str, responses: &[Option<String>]) -> ColumnTally {
    let mut tally = ColumnTally::new(column);
    for (row, response) in responses.iter().enumerate() {
        tally.scan_response(taxonomy, row, response.as_deref());
    }
    debug!(
        column = tally.column,
        total = tally.total,
        emotion = tally.emotion,
        concrete = tally.concrete,
        other = tally.other,
        "Column tallied"
    );
    tally
}
