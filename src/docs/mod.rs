//! The documentation generator.
//!
//! Renders fixed-structure markdown reports for one migrated component or for
//! a whole batch run, and writes them to disk.

use crate::config::DocsSettings;
use crate::core_types::{ComponentAnalysis, MigrationResult, MigrationSummary};
use crate::errors::{io_error_with_path, Result};
use chrono::NaiveDate;
use heck::ToTitleCase;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

mod inputs;
mod templates;

pub use inputs::{find_analysis, find_result, load_analysis, load_results};

/// How a migration was carried out.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    #[default]
    Script,
    Manual,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Script => "script",
            Method::Manual => "manual",
        })
    }
}

/// Free-form report inputs supplied on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct DocOptions {
    /// Minutes spent; `None` when not recorded.
    pub time_minutes: Option<f64>,
    pub method: Method,
    pub notes: Vec<String>,
    /// Date printed in the report header.
    pub date: NaiveDate,
}

impl DocOptions {
    /// Options dated today (local time).
    pub fn today(time_minutes: Option<f64>, method: Method, notes: Vec<String>) -> Self {
        Self {
            time_minutes,
            method,
            notes,
            date: chrono::Local::now().date_naive(),
        }
    }
}

/// Renders and writes migration reports.
#[derive(Debug, Clone)]
pub struct DocGenerator {
    settings: DocsSettings,
}

impl DocGenerator {
    pub fn new(settings: DocsSettings) -> Self {
        Self { settings }
    }

    /// Renders the report for a single component.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokenshift::config::DocsSettings;
    /// use tokenshift::docs::{DocGenerator, DocOptions, Method};
    /// use std::path::Path;
    ///
    /// let generator = DocGenerator::new(DocsSettings::default());
    /// let options = DocOptions {
    ///     time_minutes: Some(10.0),
    ///     method: Method::Script,
    ///     notes: vec![],
    ///     date: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    /// };
    /// let md = generator.render_component(Path::new("components/user-card.tsx"), None, None, &options);
    /// assert!(md.starts_with("# User Card Migration"));
    /// assert!(md.contains("**Date:** 2024-05-01"));
    /// assert!(md.contains("20 min (66.7%)"));
    /// ```
    pub fn render_component(
        &self,
        path: &Path,
        migration: Option<&MigrationResult>,
        analysis: Option<&ComponentAnalysis>,
        options: &DocOptions,
    ) -> String {
        let title = format!("{} Migration", title_from_path(path));
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = (|| -> fmt::Result {
            templates::header(&mut out, &title, path, options)?;
            templates::analysis_section(&mut out, analysis)?;
            templates::implementation_section(&mut out, migration)?;
            templates::patterns_section(&mut out, migration)?;
            templates::validation_section(&mut out)?;
            templates::efficiency_section(
                &mut out,
                "Time & Efficiency",
                self.settings.manual_baseline_minutes,
                options.time_minutes,
                1,
            )?;
            templates::knowledge_section(&mut out)?;
            templates::notes_section(&mut out, &options.notes)?;
            templates::footer(&mut out)
        })();
        out
    }

    /// Renders the summary of a batch run from its per-file results.
    ///
    /// `source` is the results file; its stem gives the report title.
    pub fn render_batch(
        &self,
        source: &Path,
        results: &[MigrationResult],
        options: &DocOptions,
    ) -> String {
        let summary = MigrationSummary::from_results(results, false);
        let title = format!("{} Summary", title_from_path(source));
        let baseline = self.settings.manual_baseline_minutes * results.len() as f64;
        let mut out = String::new();
        let _ = (|| -> fmt::Result {
            templates::header(&mut out, &title, source, options)?;
            templates::batch_overview(&mut out, &summary)?;
            templates::batch_table(&mut out, results)?;
            templates::batch_categories(&mut out, &summary)?;
            templates::efficiency_section(
                &mut out,
                "Efficiency",
                baseline,
                options.time_minutes,
                results.len(),
            )?;
            templates::notes_section(&mut out, &options.notes)?;
            templates::footer(&mut out)
        })();
        out
    }

    /// Writes `content` to `path`, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns `Error::Io` if a directory or the file cannot be written.
    pub fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error_with_path(e, parent))?;
        }
        fs::write(path, content).map_err(|e| io_error_with_path(e, path))?;
        debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}

/// Human-readable title from a file stem: `user-profile_card.tsx` gives "User Profile Card".
pub fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_title_case())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Untitled".to_string())
}
