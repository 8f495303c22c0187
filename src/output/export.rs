// File exports: not-in-taxonomy CSVs and the JSON report dump.
//
// The CSVs are written with a UTF-8 BOM so spreadsheet tools open the
// emoji columns correctly (the same utf-8-sig convention the source
// tables use).

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::emoji::codepoint_label;
use crate::output::truncate_chars;
use crate::report::AggregateReport;
use crate::table::Table;
use crate::tally::ColumnTally;
use crate::taxonomy::Taxonomy;

const PREVIEW_CHARS: usize = 100;

fn bom_writer(path: &Path) -> Result<csv::Writer<File>> {
    let mut file =
        File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    file.write_all("\u{FEFF}".as_bytes())?;
    Ok(csv::Writer::from_writer(file))
}

/// One row per out-of-taxonomy occurrence: which column, the cluster as
/// authored, its base, and a preview of the response it came from.
pub fn write_unmatched_detail(
    path: &Path,
    taxonomy: &Taxonomy,
    tallies: &[ColumnTally],
    responses: &Table,
) -> Result<()> {
    let mut writer = bom_writer(path)?;
    writer.write_record([
        "Column",
        "Emoji_Sequence",
        "Base_Emoji",
        "Base_Unicode",
        "In_Emotion_Category",
        "In_Concrete_Category",
        "Response_Text",
    ])?;

    let mut rows = 0usize;
    for tally in tallies {
        for unmatched in &tally.unmatched {
            let preview = responses
                .cell(&tally.column, unmatched.row)?
                .map(|text| truncate_chars(text, PREVIEW_CHARS))
                .unwrap_or_default();
            writer.write_record([
                tally.column.as_str(),
                unmatched.cluster.as_str(),
                unmatched.base.as_str(),
                codepoint_label(&unmatched.base).as_str(),
                if taxonomy.emotion.contains(&unmatched.base) { "true" } else { "false" },
                if taxonomy.concrete.contains(&unmatched.base) { "true" } else { "false" },
                preview.as_str(),
            ])?;
            rows += 1;
        }
    }
    writer.flush()?;
    info!(path = %path.display(), rows, "Detailed not-in-category export written");
    Ok(())
}

/// One row per out-of-taxonomy base emoji: which columns it appeared in
/// and how often, most frequent first.
pub fn write_unmatched_summary(
    path: &Path,
    report: &AggregateReport,
    tallies: &[ColumnTally],
) -> Result<()> {
    // Which columns each base appeared in
    let mut columns_by_base: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for tally in tallies {
        for unmatched in &tally.unmatched {
            columns_by_base
                .entry(unmatched.base.as_str())
                .or_default()
                .insert(tally.column.as_str());
        }
    }

    let mut writer = bom_writer(path)?;
    writer.write_record(["Base_Emoji", "Base_Unicode", "Columns", "Occurrence_Count"])?;
    for (base, count) in &report.unmatched_frequency {
        let columns = columns_by_base
            .get(base.as_str())
            .map(|set| set.iter().copied().collect::<Vec<_>>().join(", "))
            .unwrap_or_default();
        writer.write_record([
            base.as_str(),
            codepoint_label(base).as_str(),
            columns.as_str(),
            count.to_string().as_str(),
        ])?;
    }
    writer.flush()?;
    info!(path = %path.display(), "Summary not-in-category export written");
    Ok(())
}

#[derive(Serialize)]
struct RunExport<'a> {
    tallies: &'a [ColumnTally],
    report: &'a AggregateReport,
}

/// Dump the whole run (per-column tallies plus the aggregate report) as JSON.
pub fn write_json_report(
    path: &Path,
    tallies: &[ColumnTally],
    report: &AggregateReport,
) -> Result<()> {
    let export = RunExport { tallies, report };
    let json = serde_json::to_string_pretty(&export)?;
    std::fs::write(path, json)
        .with_context(|| format!("Cannot write {}", path.display()))?;
    info!(path = %path.display(), "JSON report written");
    Ok(())
}
