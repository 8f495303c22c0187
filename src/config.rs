use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Everything can be overridden per run on the command line; the env vars
/// (and an optional .env file, loaded at startup via dotenvy) just set
/// the defaults for a project directory.
pub struct Config {
    /// Path to the category reference table (EMOTALLY_CATEGORIES).
    pub categories_path: PathBuf,
    /// Default response columns to analyze (EMOTALLY_COLUMNS, comma-separated).
    pub columns: Vec<String>,
    /// Directory the CSV exports are written into (EMOTALLY_EXPORT_DIR).
    pub export_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let columns = env::var("EMOTALLY_COLUMNS")
            .map(|raw| {
                raw.split(',')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            categories_path: env::var("EMOTALLY_CATEGORIES")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("emoji_categories.csv")),
            columns,
            export_dir: env::var("EMOTALLY_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        })
    }

    /// Check that the category table exists before an analysis run.
    pub fn require_categories(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        let path = override_path.unwrap_or(&self.categories_path);
        if !path.exists() {
            anyhow::bail!(
                "Category table not found: {}\n\
                 Pass --categories <file> or set EMOTALLY_CATEGORIES in your .env file.",
                path.display()
            );
        }
        Ok(path.to_path_buf())
    }

    /// Resolve the column list for a run: an explicit --columns list wins,
    /// otherwise the configured default. An empty result is a hard error —
    /// the tool never guesses which column holds the responses.
    pub fn resolve_columns(&self, override_columns: &[String]) -> Result<Vec<String>> {
        let columns = if override_columns.is_empty() {
            self.columns.clone()
        } else {
            override_columns.to_vec()
        };
        if columns.is_empty() {
            anyhow::bail!(
                "No response columns specified.\n\
                 Pass --columns <name>... or set EMOTALLY_COLUMNS in your .env file."
            );
        }
        Ok(columns)
    }
}
