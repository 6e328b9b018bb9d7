// src/cli.rs

use crate::docs::Method;
use clap::Parser;

/// Replace light/dark Tailwind class pairs with semantic color tokens.
///
/// migrate-colors walks a file or directory, applies the migration pattern
/// table to every source file, and rewrites files in place. A summary of
/// replacements per pattern category is printed at the end. The exit code is
/// non-zero if any file could not be processed.
#[derive(Parser, Debug)]
#[command(name = "migrate-colors", author, version, about, long_about = None)]
pub struct MigrateCli {
    /// File or directory to migrate.
    pub input_path: String,

    /// Report what would change without writing any file.
    #[arg(short = 'd', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,

    /// Print one line per processed file and enable debug logging.
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    /// Only apply patterns of this category (e.g. surface, border, text).
    #[arg(short = 'p', long = "pattern", value_name = "CATEGORY")]
    pub pattern: Option<String>,

    /// Write the per-file results as a JSON array to this path.
    #[arg(short = 'e', long, value_name = "PATH")]
    pub export: Option<String>,

    /// Load patterns and walker settings from a TOML file.
    #[arg(short = 'c', long, value_name = "TOML")]
    pub config: Option<String>,

    /// Skip files larger than this (e.g., "1M", "512k").
    #[arg(short = 'm', long, value_name = "BYTES")]
    pub max_size: Option<String>,
}

/// Classify components by dark-mode migration complexity, risk and readiness.
///
/// analyze-components scans every source file under a directory without
/// modifying anything and prints a report: totals, per-category counts,
/// complexity and risk histograms, the easiest automation candidates and the
/// files that need manual attention.
#[derive(Parser, Debug)]
#[command(name = "analyze-components", author, version, about, long_about = None)]
pub struct AnalyzeCli {
    /// Directory (or single file) to analyze.
    pub input_path: String,

    /// Write the summary and per-file analysis as JSON to this path.
    #[arg(short = 'e', long, value_name = "PATH")]
    pub export: Option<String>,

    /// Number of automation candidates to list.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Load heuristics, weights and thresholds from a TOML file.
    #[arg(short = 'c', long, value_name = "TOML")]
    pub config: Option<String>,

    /// Skip files larger than this (e.g., "1M", "512k").
    #[arg(short = 'm', long, value_name = "BYTES")]
    pub max_size: Option<String>,

    /// Enable debug logging.
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}

/// Render a markdown report describing a color migration.
///
/// For a single component, the report combines an analysis of the file with
/// an optional migration result. With --batch, the input is a JSON results
/// file produced by `migrate-colors --export` and the report summarizes the
/// whole run.
#[derive(Parser, Debug)]
#[command(name = "generate-docs", author, version, about, long_about = None)]
pub struct DocsCli {
    /// Component file, or with --batch, a JSON results file.
    pub input_path: String,

    /// Write the report here instead of the default documentation directory.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<String>,

    /// Minutes spent on the migration.
    #[arg(short = 't', long, value_name = "MINUTES")]
    pub time: Option<f64>,

    /// How the migration was performed.
    #[arg(short = 'm', long, value_enum, default_value_t = Method::Script)]
    pub method: Method,

    /// Extra notes to include (repeatable).
    #[arg(short = 'n', long = "notes", value_name = "TEXT")]
    pub notes: Vec<String>,

    /// Treat the input as a results file and write a batch summary.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub batch: bool,

    /// Migration results JSON to take this component's result from.
    #[arg(long, value_name = "JSON")]
    pub results: Option<String>,

    /// Analyzer export JSON to take this component's analysis from.
    #[arg(long, value_name = "JSON")]
    pub analysis: Option<String>,

    /// Load documentation and analyzer settings from a TOML file.
    #[arg(short = 'c', long, value_name = "TOML")]
    pub config: Option<String>,

    /// Enable debug logging.
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}
