// Category taxonomy — the reference sets a base emoji is classified against.
//
// The seed data is a two-column table (Emotion, Concrete) whose cells are
// strings of reference glyphs. Both cells are run through the same
// tokenizer + normalizer as the responses, so the sets are keyed by base
// emoji and every composed variant in a response matches its base entry.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::emoji::normalize::base_emoji;
use crate::emoji::tokenizer::tokenize;

/// Classification outcome for one base emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Emotion,
    Concrete,
    /// Not present in either reference set.
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Emotion => "Emotion",
            Category::Concrete => "Concrete",
            Category::Other => "Other",
        }
    }
}

/// The pair of reference category sets, keyed by base emoji.
///
/// Built once per run and read-only afterwards. BTreeSet keeps iteration
/// in code-point order, which makes reports deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxonomy {
    pub emotion: BTreeSet<String>,
    pub concrete: BTreeSet<String>,
}

impl Taxonomy {
    /// Build the taxonomy from the raw cell text of the category table.
    pub fn from_cells(emotion_cell: &str, concrete_cell: &str) -> Self {
        let taxonomy = Self {
            emotion: base_set(emotion_cell),
            concrete: base_set(concrete_cell),
        };
        info!(
            emotion = taxonomy.emotion.len(),
            concrete = taxonomy.concrete.len(),
            "Category sets built"
        );
        taxonomy
    }

    /// Classify a base emoji. Emotion is checked before Concrete, so an
    /// emoji present in both sets always counts as Emotion.
    pub fn classify(&self, base: &str) -> Category {
        if self.emotion.contains(base) {
            Category::Emotion
        } else if self.concrete.contains(base) {
            Category::Concrete
        } else {
            Category::Other
        }
    }

    /// Whether a base emoji appears in either reference set.
    pub fn contains(&self, base: &str) -> bool {
        self.emotion.contains(base) || self.concrete.contains(base)
    }

    /// Base emojis present in both sets. These classify as Emotion; the
    /// `categories` subcommand surfaces them so the overlap is visible
    /// rather than silent.
    pub fn overlap(&self) -> Vec<&str> {
        self.emotion
            .intersection(&self.concrete)
            .map(String::as_str)
            .collect()
    }
}

/// Tokenize a category cell and collect the non-empty base emojis.
fn base_set(cell: &str) -> BTreeSet<String> {
    tokenize(cell)
        .iter()
        .map(|cluster| base_emoji(cluster))
        .filter(|base| !base.is_empty())
        .collect()
}
