// Unit tests for the taxonomy and the per-column tally.
//
// The taxonomy is built from raw category-cell text through the same
// tokenizer + normalizer as the responses; these tests pin the
// classification tie-break and the accumulator behavior.

use emotally::tally::{tally_column, ColumnTally};
use emotally::taxonomy::{Category, Taxonomy};

fn taxonomy() -> Taxonomy {
    // Emotion: grinning, crying. Concrete: car, house.
    Taxonomy::from_cells("😀😢", "🚗🏠")
}

// ============================================================
// Taxonomy — construction and classification
// ============================================================

#[test]
fn sets_are_keyed_by_base_emoji() {
    // Category cells may carry composed variants; the sets hold bases
    let t = Taxonomy::from_cells("👍🏽", "🙇🏻\u{200D}♀\u{FE0F}");
    assert!(t.emotion.contains("👍"));
    assert!(t.concrete.contains("🙇"));
    assert_eq!(t.classify("👍"), Category::Emotion);
}

#[test]
fn non_emoji_text_in_cells_is_ignored() {
    let t = Taxonomy::from_cells("joy: 😀, sadness: 😢", "");
    assert_eq!(t.emotion.len(), 2);
    assert!(t.concrete.is_empty());
}

#[test]
fn classify_falls_through_to_other() {
    let t = taxonomy();
    assert_eq!(t.classify("😀"), Category::Emotion);
    assert_eq!(t.classify("🚗"), Category::Concrete);
    assert_eq!(t.classify("🎉"), Category::Other);
    assert_eq!(t.classify(""), Category::Other);
}

#[test]
fn emotion_wins_on_category_overlap() {
    // An emoji present in both sets always counts as Emotion
    let t = Taxonomy::from_cells("😀🚗", "🚗🏠");
    assert_eq!(t.classify("🚗"), Category::Emotion);
    assert_eq!(t.overlap(), vec!["🚗"]);
}

#[test]
fn skin_toned_response_matches_base_entry() {
    let t = Taxonomy::from_cells("👍", "");
    // classify takes the normalized base, as the tally produces it
    assert_eq!(t.classify("👍"), Category::Emotion);
    assert!(t.contains("👍"));
    assert!(!t.contains("👍🏽"));
}

// ============================================================
// ColumnTally — scanning responses
// ============================================================

#[test]
fn counts_split_across_categories() {
    let t = taxonomy();
    let responses = vec![
        Some("😀🚗".to_string()),
        Some("feeling 😢 today".to_string()),
        Some("🎉 party".to_string()),
    ];
    let tally = tally_column(&t, "model-a", &responses);

    assert_eq!(tally.column, "model-a");
    assert_eq!(tally.total, 4);
    assert_eq!(tally.emotion, 2);
    assert_eq!(tally.concrete, 1);
    assert_eq!(tally.other, 1);
}

#[test]
fn skin_tone_variants_count_against_base_entries() {
    let t = Taxonomy::from_cells("👍", "");
    let responses = vec![Some("👍🏽👍🏿".to_string())];
    let tally = tally_column(&t, "col", &responses);
    assert_eq!(tally.emotion, 2);
    assert_eq!(tally.other, 0);
}

#[test]
fn unmatched_records_cluster_base_and_row() {
    let t = taxonomy();
    let responses = vec![
        Some("😀".to_string()),
        None,
        Some("ok 🙇🏻\u{200D}♀\u{FE0F}".to_string()),
    ];
    let tally = tally_column(&t, "col", &responses);

    assert_eq!(tally.other, 1);
    assert_eq!(tally.unmatched.len(), 1);
    let unmatched = &tally.unmatched[0];
    assert_eq!(unmatched.cluster, "🙇🏻\u{200D}♀\u{FE0F}");
    assert_eq!(unmatched.base, "🙇");
    assert_eq!(unmatched.row, 2);
}

#[test]
fn missing_and_plain_text_responses_contribute_nothing() {
    let t = taxonomy();
    let responses = vec![Some("hello".to_string()), None, Some(String::new())];
    let tally = tally_column(&t, "col", &responses);

    assert_eq!(tally.total, 0);
    assert_eq!(tally.emotion, 0);
    assert_eq!(tally.concrete, 0);
    assert_eq!(tally.other, 0);
    assert!(tally.unmatched.is_empty());
    assert!(tally.seen_bases.is_empty());
}

#[test]
fn seen_bases_collects_all_categories() {
    let t = taxonomy();
    let responses = vec![Some("😀😀🚗🎉".to_string())];
    let tally = tally_column(&t, "col", &responses);

    assert_eq!(tally.total, 4);
    // distinct bases, matched or not
    assert_eq!(tally.seen_bases.len(), 3);
    assert!(tally.seen_bases.contains("🎉"));
}

#[test]
fn lone_modifier_cluster_adds_no_distinct_base() {
    // A bare skin tone starts a cluster of its own but normalizes to an
    // empty base: it still counts as other and keeps its unmatched
    // record, but it must not enter the distinct-base set.
    let t = taxonomy();
    let responses = vec![Some("😀 \u{1F3FD} done".to_string())];
    let tally = tally_column(&t, "col", &responses);

    assert_eq!(tally.total, 2);
    assert_eq!(tally.emotion, 1);
    assert_eq!(tally.other, 1);
    assert_eq!(tally.unmatched.len(), 1);
    assert_eq!(tally.unmatched[0].cluster, "\u{1F3FD}");
    assert_eq!(tally.unmatched[0].base, "");
    assert_eq!(tally.seen_bases.len(), 1);
    assert!(!tally.seen_bases.contains(""));
}

#[test]
fn fresh_tally_starts_at_zero() {
    let tally = ColumnTally::new("col");
    assert_eq!(tally.total, 0);
    assert!(tally.seen_bases.is_empty());
}
