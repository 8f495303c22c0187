// Analysis orchestration: load the taxonomy, tally every requested
// column, and aggregate. File loading and display stay in main.rs and
// output/ — this module only wires the core pieces together.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::extract::{emojis_only, emojis_with_description};
use crate::report::AggregateReport;
use crate::table::Table;
use crate::tally::{tally_column, ColumnTally};
use crate::taxonomy::Taxonomy;

/// The outcome of one analysis run: per-column tallies plus the combined
/// report. Owned by the caller; nothing is cached between runs.
#[derive(Debug)]
pub struct AnalysisRun {
    pub tallies: Vec<ColumnTally>,
    pub report: AggregateReport,
}

/// Build the taxonomy from the category reference table.
///
/// The table must carry `Emotion` and `Concrete` columns; the reference
/// glyphs live in the first row, one string of glyphs per cell.
pub fn load_taxonomy(path: &Path) -> Result<Taxonomy> {
    let table = Table::from_path(path)?;
    let emotion = table.cell("Emotion", 0)?.unwrap_or_default().to_string();
    let concrete = table.cell("Concrete", 0)?.unwrap_or_default().to_string();
    if emotion.is_empty() && concrete.is_empty() {
        anyhow::bail!(
            "Category table {} has no reference glyphs in its first row",
            path.display()
        );
    }
    Ok(Taxonomy::from_cells(&emotion, &concrete))
}

/// Tally every requested column and build the aggregate report.
///
/// All columns are validated up front — a missing column fails the whole
/// run with the available-column list before anything is counted.
pub fn analyze(taxonomy: &Taxonomy, table: &Table, columns: &[String]) -> Result<AnalysisRun> {
    table.require_columns(columns)?;

    let mut tallies = Vec::with_capacity(columns.len());
    for column in columns {
        let responses = table.column(column)?;
        tallies.push(tally_column(taxonomy, column, &responses));
    }

    let report = AggregateReport::build(taxonomy, &tallies);
    info!(
        columns = tallies.len(),
        clusters = report.totals.total,
        "Analysis complete"
    );
    Ok(AnalysisRun { tallies, report })
}

/// Combine a base response table with model response files (extraction
/// step). Each model file contributes one column, named after the file,
/// holding `"<emojis> - <description>"` cells; the leading
/// `emoji_only_rows` rows are then reduced to emoji-only cells.
pub fn combine(
    mut base: Table,
    model_paths: &[PathBuf],
    response_column: &str,
    emoji_only_rows: usize,
) -> Result<Table> {
    for path in model_paths {
        let model = Table::from_path(path)?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("model")
            .to_string();

        let cells: Vec<String> = model
            .column(response_column)?
            .iter()
            .map(|cell| emojis_with_description(cell.as_deref().unwrap_or("")))
            .collect();
        base.add_column(&name, cells);

        for row in 0..emoji_only_rows.min(base.row_count()) {
            if let Some(cell) = base.cell(&name, row)?.map(str::to_string) {
                base.set_cell(&name, row, emojis_only(&cell))?;
            }
        }
        info!(column = name, source = %path.display(), "Model column added");
    }
    Ok(base)
}
