use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use emotally::config::Config;
use emotally::output::{export, terminal};
use emotally::pipeline;
use emotally::table::Table;

/// Emotally: emoji category analysis for survey and LLM responses.
///
/// Extracts emoji sequences from free-text response columns, classifies
/// each against the Emotion/Concrete reference taxonomy, and reports
/// counts per column and combined.
#[derive(Parser)]
#[command(name = "emotally", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze response columns against the category taxonomy
    Analyze {
        /// Response table (CSV) to analyze
        responses: PathBuf,

        /// Category reference table (default: EMOTALLY_CATEGORIES)
        #[arg(long)]
        categories: Option<PathBuf>,

        /// Response columns to analyze (default: EMOTALLY_COLUMNS)
        #[arg(long, num_args = 1..)]
        columns: Vec<String>,

        /// Write the not-in-category CSV exports
        #[arg(long)]
        export: bool,

        /// Write the full run (tallies + report) as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Inspect the category reference table
    Categories {
        /// Category reference table (default: EMOTALLY_CATEGORIES)
        #[arg(long)]
        categories: Option<PathBuf>,

        /// Also list every emoji in each set
        #[arg(long)]
        full: bool,
    },

    /// Combine a base response table with model response files
    Extract {
        /// Base table (e.g. the human responses)
        base: PathBuf,

        /// Model response tables; each adds a column named after the file
        #[arg(long, num_args = 1.., required = true)]
        models: Vec<PathBuf>,

        /// Column holding the raw responses in each model file
        #[arg(long, default_value = "response")]
        response_column: String,

        /// Leading rows reduced to emoji-only cells (the selection questions)
        #[arg(long, default_value = "10")]
        emoji_only_rows: usize,

        /// Output path for the combined table
        #[arg(long, short, default_value = "combined.csv")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("emotally=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            responses,
            categories,
            columns,
            export: write_exports,
            json,
        } => {
            let config = Config::load()?;
            let categories_path = config.require_categories(categories.as_deref())?;
            let columns = config.resolve_columns(&columns)?;

            let taxonomy = pipeline::load_taxonomy(&categories_path)?;
            terminal::display_taxonomy(&taxonomy);

            println!(
                "\nAnalyzing {} column(s): {}",
                columns.len(),
                columns.join(", ")
            );

            let table = Table::from_path(&responses)?;
            let run = pipeline::analyze(&taxonomy, &table, &columns)?;

            for tally in &run.tallies {
                terminal::display_column_tally(tally);
            }
            terminal::display_report(&run.report);

            if write_exports {
                let detail = config.export_dir.join("emojis_not_in_categories_detailed.csv");
                let summary = config.export_dir.join("emojis_not_in_categories_summary.csv");
                export::write_unmatched_detail(&detail, &taxonomy, &run.tallies, &table)?;
                export::write_unmatched_summary(&summary, &run.report, &run.tallies)?;
                println!("\nExports written:");
                println!("  {}", detail.display());
                println!("  {}", summary.display());
            }

            if let Some(path) = json {
                export::write_json_report(&path, &run.tallies, &run.report)?;
                println!("JSON report written to {}", path.display());
            }
        }

        Commands::Categories { categories, full } => {
            let config = Config::load()?;
            let categories_path = config.require_categories(categories.as_deref())?;
            let taxonomy = pipeline::load_taxonomy(&categories_path)?;

            terminal::display_taxonomy(&taxonomy);

            if full {
                println!("\n{}", "Emotion set:".bold());
                println!("  {}", taxonomy.emotion.iter().cloned().collect::<Vec<_>>().join(" "));
                println!("\n{}", "Concrete set:".bold());
                println!("  {}", taxonomy.concrete.iter().cloned().collect::<Vec<_>>().join(" "));
            }
        }

        Commands::Extract {
            base,
            models,
            response_column,
            emoji_only_rows,
            output,
        } => {
            let base_table = Table::from_path(&base)?;
            println!(
                "Combining {} model file(s) into {}...",
                models.len(),
                output.display()
            );

            let combined =
                pipeline::combine(base_table, &models, &response_column, emoji_only_rows)?;
            combined.write_path(&output)?;

            println!(
                "{}",
                format!(
                    "Combined table written: {} rows, {} columns.",
                    combined.row_count(),
                    combined.headers().len()
                )
                .bold()
            );
            println!(
                "First {emoji_only_rows} row(s) of each model column are emoji-only; \
                 the rest keep their descriptions."
            );
        }
    }

    Ok(())
}
