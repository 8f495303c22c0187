// Flat tabular input — CSV files fully materialized in memory.
//
// Inputs are small (hundreds of rows), so a table is just headers plus
// rows of strings. Records are read as bytes and lossily decoded: a
// malformed byte sequence mangles one cell, it never aborts the run.

use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// An in-memory table loaded from CSV.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Cannot open table file: {}", path.display()))?;
        let table = Self::from_reader(file)
            .with_context(|| format!("Cannot parse CSV: {}", path.display()))?;
        info!(
            path = %path.display(),
            rows = table.rows.len(),
            columns = table.headers.len(),
            "Table loaded"
        );
        Ok(table)
    }

    /// Parse CSV from any reader. Rows may be ragged; short rows read as
    /// missing cells. A UTF-8 BOM on the first header is stripped — the
    /// source files are commonly saved as utf-8-sig by spreadsheet tools.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .byte_headers()?
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                let header = String::from_utf8_lossy(raw).into_owned();
                if i == 0 {
                    header.trim_start_matches('\u{FEFF}').to_string()
                } else {
                    header
                }
            })
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.byte_records() {
            let record = record?;
            rows.push(
                record
                    .iter()
                    .map(|raw| String::from_utf8_lossy(raw).into_owned())
                    .collect(),
            );
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a header, or a configuration error naming the missing
    /// column and everything that is available. Never guesses a column.
    fn column_index(&self, name: &str) -> Result<usize> {
        self.headers.iter().position(|h| h == name).ok_or_else(|| {
            anyhow::anyhow!(
                "Column '{}' not found. Available columns: {}",
                name,
                self.headers.join(", ")
            )
        })
    }

    /// All cells of a named column, top to bottom. Absent or empty cells
    /// come back as `None` — missing data is empty text, not an error.
    pub fn column(&self, name: &str) -> Result<Vec<Option<String>>> {
        let index = self.column_index(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| {
                row.get(index)
                    .filter(|cell| !cell.is_empty())
                    .cloned()
            })
            .collect())
    }

    /// One cell by column name and row index; `None` when absent or empty.
    pub fn cell(&self, name: &str, row: usize) -> Result<Option<&str>> {
        let index = self.column_index(name)?;
        Ok(self
            .rows
            .get(row)
            .and_then(|r| r.get(index))
            .map(String::as_str)
            .filter(|cell| !cell.is_empty()))
    }

    /// Verify that every requested column exists before any analysis runs.
    pub fn require_columns(&self, names: &[String]) -> Result<()> {
        for name in names {
            self.column_index(name)?;
        }
        Ok(())
    }

    /// Append a column. Cells beyond the table's row count are dropped,
    /// rows without a cell are left empty — the combined table keeps the
    /// base table's shape.
    pub fn add_column(&mut self, name: &str, cells: Vec<String>) {
        self.headers.push(name.to_string());
        let width = self.headers.len();
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.resize(width, String::new());
            if let Some(cell) = cells.get(i) {
                row[width - 1] = cell.clone();
            }
        }
    }

    /// Overwrite one cell; out-of-range rows are ignored.
    pub fn set_cell(&mut self, name: &str, row: usize, value: String) -> Result<()> {
        let index = self.column_index(name)?;
        if let Some(r) = self.rows.get_mut(row) {
            if index >= r.len() {
                r.resize(index + 1, String::new());
            }
            r[index] = value;
        }
        Ok(())
    }

    /// Write the table as CSV with a UTF-8 BOM (utf-8-sig, matching the
    /// convention of the source files).
    pub fn write_path(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path)
            .with_context(|| format!("Cannot create {}", path.display()))?;
        io::Write::write_all(&mut file, "\u{FEFF}".as_bytes())?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(&self.headers)?;
        let width = self.headers.len();
        for row in &self.rows {
            let mut record = row.clone();
            record.resize(width, String::new());
            writer.write_record(&record)?;
        }
        writer.flush()?;
        info!(path = %path.display(), rows = self.rows.len(), "Table written");
        Ok(())
    }
}
