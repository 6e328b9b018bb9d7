//! `tokenshift` is a library and a set of command-line tools for moving a
//! Tailwind code base off hard-coded `dark:` class pairs and onto semantic
//! color tokens.
//!
//! It ships three binaries built on the same pipeline pieces:
//! 1.  **`migrate-colors`**: rewrite light/dark class pairs such as
//!     `bg-white dark:bg-gray-800` into tokens such as `bg-surface`.
//! 2.  **`analyze-components`**: profile components by migration complexity,
//!     risk and automation readiness, without modifying them.
//! 3.  **`generate-docs`**: render markdown reports of a migration.
//!
//! The building blocks (pattern table, file walker, migrator, analyzer and
//! documentation generator) can also be used on their own.
//!
//! # Example: Library Usage
//!
//! ```
//! use tokenshift::config::{resolve_input, AnalyzerSettings};
//! use tokenshift::discovery::DiscoveryOptions;
//! use tokenshift::migrate::{ColorMigrator, MigrationMode};
//! use tokenshift::analyze::ComponentAnalyzer;
//! use tokenshift::patterns::PatternTable;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempdir()?;
//! fs::write(
//!     temp.path().join("Card.tsx"),
//!     r#"<div className="bg-white dark:bg-gray-900 text-gray-900 dark:text-white" />"#,
//! )?;
//! let root = resolve_input(temp.path().to_str().unwrap())?;
//! let table = PatternTable::builtin()?;
//!
//! // Profile first: the card only uses safe surface and text pairs.
//! let settings = AnalyzerSettings::default();
//! let analyzer = ComponentAnalyzer::new(&table, &settings)?;
//! let report = analyzer.analyze_path(&root, &DiscoveryOptions::default(), None)?;
//! assert_eq!(report.summary.automation_ready, 1);
//!
//! // Then migrate in place.
//! let migrator = ColorMigrator::new(&table, &[], MigrationMode::Apply, None)?;
//! let results = migrator.migrate_path(&root, &DiscoveryOptions::default(), None)?;
//! assert_eq!(results[0].replacements, 2);
//! assert_eq!(
//!     fs::read_to_string(temp.path().join("Card.tsx"))?,
//!     r#"<div className="bg-surface text-foreground" />"#
//! );
//! # Ok(())
//! # }
//! ```

pub mod analyze;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod docs;
pub mod errors;
pub mod filtering;
pub mod logging;
pub mod migrate;
pub mod output;
pub mod patterns;
pub mod prelude;
pub mod processing;
pub mod progress;

use crate::analyze::ComponentAnalyzer;
use crate::config::{resolve_input, AnalyzeConfig, DocsConfig, MigrateConfig};
use crate::core_types::{AnalysisReport, MigrationSummary};
use crate::docs::{find_analysis, find_result, load_analysis, load_results, DocGenerator};
use crate::migrate::{ColorMigrator, MigrationMode};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use log::warn;
use std::io::Write;
use std::path::PathBuf;

/// Runs a complete `migrate-colors` invocation: migrate every file, print the
/// summary to `writer`, and export the results if requested.
///
/// Per-file failures do not stop the run; they are listed in the returned
/// summary (and make the binary exit non-zero).
pub fn run_migrate(
    config: &MigrateConfig,
    progress: Option<&dyn ProgressReporter>,
    writer: &mut dyn Write,
) -> Result<MigrationSummary> {
    let migrator = ColorMigrator::new(
        &config.table,
        &config.tool.imports,
        config.mode,
        config.category.as_deref(),
    )?;
    let results = migrator.migrate_path(&config.input, &config.discovery, progress)?;
    let base = config.input.base_dir();

    if config.verbose {
        for result in &results {
            output::write_file_line(writer, result, &base)?;
        }
    }
    let summary = MigrationSummary::from_results(&results, config.mode == MigrationMode::DryRun);
    output::write_migration_summary(writer, &summary, &base)?;

    if let Some(path) = &config.export {
        output::write_json_export(path, &results)
            .with_context(|| format!("Failed to export results to '{}'", path.display()))?;
        writeln!(writer, "Results exported to {}", path.display())?;
    }
    writer.flush()?;
    Ok(summary)
}

/// Runs a complete `analyze-components` invocation: analyze every file, print
/// the report to `writer`, and export it as JSON if requested.
pub fn run_analyze(
    config: &AnalyzeConfig,
    progress: Option<&dyn ProgressReporter>,
    writer: &mut dyn Write,
) -> Result<AnalysisReport> {
    let analyzer = ComponentAnalyzer::new(&config.table, &config.tool.analyzer)?;
    let report = analyzer.analyze_path(&config.input, &config.discovery, progress)?;
    output::write_analysis_report(writer, &report.summary)?;

    if let Some(path) = &config.export {
        output::write_json_export(path, &report)
            .with_context(|| format!("Failed to export analysis to '{}'", path.display()))?;
        writeln!(writer)?;
        writeln!(writer, "Analysis exported to {}", path.display())?;
    }
    writer.flush()?;
    Ok(report)
}

/// Runs a complete `generate-docs` invocation and returns the written path.
///
/// In batch mode the input is a results file. Otherwise the input is a
/// component: its migration result comes from `--results` when given, and its
/// analysis from `--analysis` or, failing that, from analyzing the file now.
pub fn run_docs(config: &DocsConfig) -> Result<PathBuf> {
    let generator = DocGenerator::new(config.tool.docs.clone());

    let content = if config.batch {
        let results = load_results(&config.input)?;
        generator.render_batch(&config.input, &results, &config.options)
    } else {
        let results = config.results.as_deref().map(load_results).transpose()?;
        let migration = results
            .as_deref()
            .and_then(|all| find_result(all, &config.input));
        if results.is_some() && migration.is_none() {
            warn!("No migration result for {} in the results file", config.input.display());
        }

        let analysis = match config.analysis.as_deref() {
            Some(path) => {
                let report = load_analysis(path)?;
                let found = find_analysis(&report, &config.input).cloned();
                if found.is_none() {
                    warn!("No analysis for {} in {}", config.input.display(), path.display());
                }
                found
            }
            None => {
                let resolved = resolve_input(&config.input.to_string_lossy())?;
                let base = std::env::current_dir()
                    .and_then(|d| d.canonicalize())
                    .unwrap_or_else(|_| resolved.base_dir());
                let analyzer = ComponentAnalyzer::new(&config.table, &config.tool.analyzer)?;
                Some(analyzer.analyze_file(&resolved.path, &base)?)
            }
        };
        generator.render_component(&config.input, migration, analysis.as_ref(), &config.options)
    };

    generator.write(&config.output, &content)?;
    Ok(config.output.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{AnalyzeCli, DocsCli, MigrateCli};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_migrate_and_export() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let src = temp.path().join("src");
        fs::create_dir_all(&src)?;
        fs::write(src.join("a.tsx"), "border-gray-200 dark:border-gray-800")?;
        fs::write(src.join("b.tsx"), "plain")?;
        let export = temp.path().join("out/results.json");

        let config = MigrateConfig::try_from(MigrateCli::parse_from([
            "migrate-colors",
            "-v",
            "-e",
            export.to_str().unwrap(),
            src.to_str().unwrap(),
        ]))?;
        let mut out = Vec::new();
        let summary = run_migrate(&config, None, &mut out)?;

        assert_eq!(summary.migrated_files, 1);
        assert_eq!(summary.total_replacements, 1);
        assert_eq!(fs::read_to_string(src.join("a.tsx"))?, "border-border");
        let printed = String::from_utf8(out)?;
        assert!(printed.contains("  migrated a.tsx: 1 replacement(s) [border]\n"));
        assert!(printed.contains("Total replacements: 1\n"));

        let exported = load_results(&export)?;
        assert_eq!(exported.len(), 2);
        assert!(exported[0].written);
        Ok(())
    }

    #[test]
    fn test_run_migrate_unknown_category_touches_nothing() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("a.tsx");
        fs::write(&file, "bg-white dark:bg-gray-800")?;

        let config = MigrateConfig::try_from(MigrateCli::parse_from([
            "migrate-colors",
            "--pattern",
            "gradient",
            file.to_str().unwrap(),
        ]))?;
        let mut out = Vec::new();
        let err = run_migrate(&config, None, &mut out).unwrap_err();

        assert!(err.to_string().contains("Unknown pattern category 'gradient'"));
        assert!(out.is_empty());
        assert_eq!(fs::read_to_string(&file)?, "bg-white dark:bg-gray-800");
        Ok(())
    }

    #[test]
    fn test_run_analyze_export_matches_totals() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let ui = temp.path().join("components/ui");
        fs::create_dir_all(&ui)?;
        fs::write(ui.join("Card.tsx"), "bg-white dark:bg-gray-800")?;
        fs::write(ui.join("Hero.tsx"), "dark:from-gray-900 #123456")?;
        let export = temp.path().join("analysis.json");

        let config = AnalyzeConfig::try_from(AnalyzeCli::parse_from([
            "analyze-components",
            "--export",
            export.to_str().unwrap(),
            temp.path().to_str().unwrap(),
        ]))?;
        let mut out = Vec::new();
        let report = run_analyze(&config, None, &mut out)?;

        let reloaded = load_analysis(&export)?;
        assert_eq!(reloaded, report);
        let printed = String::from_utf8(out)?;
        assert!(printed.contains(&format!(
            "Total dark: classes: {}\n",
            reloaded.summary.total_dark_classes
        )));
        Ok(())
    }

    #[test]
    fn test_run_docs_single_with_results() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let component = temp.path().join("Card.tsx");
        fs::write(&component, "bg-surface")?;
        let results = temp.path().join("results.json");
        fs::write(
            &results,
            format!(
                r#"[{{"file": {}, "success": true, "replacements": 2, "patterns": ["surface"], "patternCounts": {{"surface": 2}}}}]"#,
                serde_json::to_string(&component)?
            ),
        )?;
        let output = temp.path().join("docs/Card.md");

        let config = DocsConfig::try_from(DocsCli::parse_from([
            "generate-docs",
            "--results",
            results.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-t",
            "5",
            component.to_str().unwrap(),
        ]))?;
        let written = run_docs(&config)?;

        assert_eq!(written, output);
        let md = fs::read_to_string(&output)?;
        assert!(md.starts_with("# Card Migration"));
        assert!(md.contains("- **Replacements:** 2"));
        assert!(md.contains("| surface | 2 |"));
        assert!(md.contains("- **Dark classes found:** 0"));
        Ok(())
    }
}
