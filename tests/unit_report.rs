// Unit tests for the aggregate report: grand totals, the distinct-base
// and not-in-taxonomy sets, and the frequency ordering.

use emotally::report::AggregateReport;
use emotally::tally::tally_column;
use emotally::taxonomy::Taxonomy;

fn taxonomy() -> Taxonomy {
    Taxonomy::from_cells("😀😢", "🚗🏠")
}

#[test]
fn totals_sum_across_columns() {
    let t = taxonomy();
    let tallies = vec![
        tally_column(&t, "a", &[Some("😀🚗".to_string())]),
        tally_column(&t, "b", &[Some("😢😢🎉".to_string())]),
    ];
    let report = AggregateReport::build(&t, &tallies);

    assert_eq!(report.totals.total, 5);
    assert_eq!(report.totals.emotion, 3);
    assert_eq!(report.totals.concrete, 1);
    assert_eq!(report.totals.other, 1);
}

#[test]
fn distinct_bases_union_across_columns() {
    let t = taxonomy();
    let tallies = vec![
        tally_column(&t, "a", &[Some("😀😀🎉".to_string())]),
        tally_column(&t, "b", &[Some("😀🚗".to_string())]),
    ];
    let report = AggregateReport::build(&t, &tallies);

    assert_eq!(report.distinct_bases.len(), 3);
    assert!(report.distinct_bases.contains("😀"));
    assert!(report.distinct_bases.contains("🚗"));
    assert!(report.distinct_bases.contains("🎉"));
}

#[test]
fn not_in_taxonomy_is_the_unmatched_subset() {
    let t = taxonomy();
    let tallies = vec![tally_column(
        &t,
        "a",
        &[Some("😀🎉🤝".to_string()), Some("🎉".to_string())],
    )];
    let report = AggregateReport::build(&t, &tallies);

    assert_eq!(report.not_in_taxonomy.len(), 2);
    assert!(report.not_in_taxonomy.contains("🎉"));
    assert!(report.not_in_taxonomy.contains("🤝"));
    assert!(!report.not_in_taxonomy.contains("😀"));
}

#[test]
fn frequency_sorts_by_count_then_code_point() {
    let t = taxonomy();
    // 🎉 three times, 🤝 and 🥳 once each; 🤝 (U+1F91D) < 🥳 (U+1F973)
    let tallies = vec![
        tally_column(&t, "a", &[Some("🎉🎉🥳".to_string())]),
        tally_column(&t, "b", &[Some("🎉🤝".to_string())]),
    ];
    let report = AggregateReport::build(&t, &tallies);

    let ranked: Vec<(&str, usize)> = report
        .unmatched_frequency
        .iter()
        .map(|(base, count)| (base.as_str(), *count))
        .collect();
    assert_eq!(ranked, vec![("🎉", 3), ("🤝", 1), ("🥳", 1)]);
}

#[test]
fn lone_modifier_cluster_stays_out_of_distinct_bases() {
    let t = taxonomy();
    let tallies = vec![tally_column(&t, "a", &[Some("😀 \u{1F3FD}".to_string())])];
    let report = AggregateReport::build(&t, &tallies);

    assert_eq!(report.totals.other, 1);
    assert_eq!(report.distinct_bases.len(), 1);
    assert!(!report.distinct_bases.contains(""));
    assert!(report.unmatched_frequency.is_empty());
}

#[test]
fn empty_run_produces_an_empty_report() {
    let t = taxonomy();
    let tallies = vec![tally_column(&t, "a", &[None, Some("no emoji".to_string())])];
    let report = AggregateReport::build(&t, &tallies);

    assert_eq!(report.totals.total, 0);
    assert!(report.distinct_bases.is_empty());
    assert!(report.not_in_taxonomy.is_empty());
    assert!(report.unmatched_frequency.is_empty());
    assert_eq!(report.totals.percent(0), 0.0);
}

#[test]
fn percent_is_relative_to_all_clusters() {
    let t = taxonomy();
    let tallies = vec![tally_column(&t, "a", &[Some("😀😀🚗🎉".to_string())])];
    let report = AggregateReport::build(&t, &tallies);

    assert!((report.totals.percent(report.totals.emotion) - 50.0).abs() < 1e-9);
    assert!((report.totals.percent(report.totals.concrete) - 25.0).abs() < 1e-9);
}
