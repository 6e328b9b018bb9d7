//! The `tokenshift` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `tokenshift` library.
//!
//! # Example
//!
//! ```
//! use tokenshift::prelude::*;
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!
//! let table = PatternTable::builtin()?;
//! let migrator = ColorMigrator::new(&table, &[], MigrationMode::DryRun, None)?;
//! let out = migrator.migrate_content("text-gray-900 dark:text-white");
//! assert_eq!(out.content, "text-foreground");
//!
//! # Ok(())
//! # }
//! ```

pub use crate::analyze::{summarize, ComponentAnalyzer};
pub use crate::config::{
    resolve_input, AnalyzeConfig, AnalyzerSettings, DocsConfig, DocsSettings, MigrateConfig,
    ResolvedInput, ToolConfig,
};
pub use crate::core_types::{
    AnalysisReport, AnalysisSummary, Complexity, ComponentAnalysis, MigrationResult,
    MigrationSummary, Risk,
};
pub use crate::discovery::{discover_files, DiscoveryOptions};
pub use crate::docs::{DocGenerator, DocOptions, Method};
pub use crate::errors::{Error, Result};
pub use crate::migrate::{ColorMigrator, ContentMigration, ImportRule, MigrationMode};
pub use crate::patterns::{PatternSpec, PatternTable};
pub use crate::progress::{NoOpProgress, ProgressReporter};
pub use crate::{run_analyze, run_docs, run_migrate};
