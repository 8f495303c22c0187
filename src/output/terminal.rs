// Colored terminal output for tallies, the aggregate report, and the
// category bar chart. The main.rs display logic delegates here.

use colored::Colorize;

use crate::emoji::codepoint_label;
use crate::report::AggregateReport;
use crate::tally::ColumnTally;
use crate::taxonomy::Taxonomy;

/// Display the category sets and any overlap between them.
pub fn display_taxonomy(taxonomy: &Taxonomy) {
    println!("\n{}", "=== Category Reference ===".bold());
    println!("  Emotion emojis:  {}", taxonomy.emotion.len());
    println!("  Concrete emojis: {}", taxonomy.concrete.len());

    let overlap = taxonomy.overlap();
    if overlap.is_empty() {
        println!("  Overlap: none");
    } else {
        println!(
            "  {} {} emoji(s) appear in both sets and will count as Emotion:",
            "!".yellow(),
            overlap.len()
        );
        for base in overlap {
            println!("    {} ({})", base, codepoint_label(base).dimmed());
        }
    }
}

/// Display one column's tally, LLM-report style.
pub fn display_column_tally(tally: &ColumnTally) {
    println!("\n{}", format!("Column '{}'", tally.column).bold());
    println!("  Total emojis found: {}", tally.total);
    println!("  Emotion matches:    {}", tally.emotion);
    println!("  Concrete matches:   {}", tally.concrete);
    println!("  Other emojis:       {}", tally.other);
}

/// Display the combined report: totals, chart, and the not-in-taxonomy
/// frequency ranking.
pub fn display_report(report: &AggregateReport) {
    println!("\n{}", "=== Combined Results (All Columns) ===".bold());
    println!("  Total emoji sequences found: {}", report.totals.total);
    println!("  Emotion matches:  {}", report.totals.emotion);
    println!("  Concrete matches: {}", report.totals.concrete);
    println!("  Other emojis:     {}", report.totals.other);

    render_bar_chart(report);

    if report.not_in_taxonomy.is_empty() {
        println!(
            "\n{}",
            "All emojis found are in the Emotion or Concrete categories.".green()
        );
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== {} unique emojis not in either category ===",
            report.not_in_taxonomy.len()
        )
        .bold()
    );
    for (i, base) in report.not_in_taxonomy.iter().enumerate() {
        println!("  {:>3}. {} ({})", i + 1, base, codepoint_label(base).dimmed());
    }

    println!("\n  Frequency across all columns:");
    for (base, count) in &report.unmatched_frequency {
        println!(
            "    {}: {} time(s) ({})",
            base,
            count,
            codepoint_label(base).dimmed()
        );
    }
}

const CHART_WIDTH: usize = 36;

/// Horizontal bar chart of the category distribution, with count and
/// percentage labels and a total-analyzed annotation.
fn render_bar_chart(report: &AggregateReport) {
    let totals = &report.totals;
    let rows = [
        ("Emotion", totals.emotion),
        ("Concrete", totals.concrete),
        ("Other", totals.other),
    ];
    let max = rows.iter().map(|&(_, n)| n).max().unwrap_or(0);
    if max == 0 {
        return;
    }

    println!("\n{}", "=== Category Distribution ===".bold());
    for (label, count) in rows {
        let width = count * CHART_WIDTH / max;
        let bar = "█".repeat(width);
        let colored_bar = match label {
            "Emotion" => bar.red(),
            "Concrete" => bar.cyan(),
            _ => bar.dimmed(),
        };
        println!(
            "  {:<9} {} {} ({:.1}%)",
            label,
            colored_bar,
            count,
            totals.percent(count)
        );
    }
    println!("  {}", format!("Total emojis analyzed: {}", totals.total).dimmed());
}
