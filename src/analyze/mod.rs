//! The component analyzer.
//!
//! Profiles source files by their `dark:` class usage and a handful of
//! keyword heuristics (animations, variants, state, literal colors). The
//! profile decides whether a file is a safe target for the color migrator
//! or needs a human. Nothing here writes to the filesystem.

use crate::config::{AnalyzerSettings, ResolvedInput};
use crate::constants::FALLBACK_CATEGORY;
use crate::core_types::{AnalysisReport, ComponentAnalysis};
use crate::discovery::{discover_files, DiscoveryOptions};
use crate::errors::{Error, Result};
use crate::patterns::PatternTable;
use crate::processing::{process_sequentially, read_source};
use crate::progress::ProgressReporter;
use log::{debug, warn};
use regex::Regex;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use tracing::instrument;

mod scoring;
mod summary;

use scoring::{ReadinessInput, Signals};
pub use summary::summarize;

/// Heuristic classifier for component files.
#[derive(Debug)]
pub struct ComponentAnalyzer<'a> {
    table: &'a PatternTable,
    settings: &'a AnalyzerSettings,
    dark_class: Regex,
    animation: Regex,
    variant: Regex,
    state: Regex,
    custom_color: Regex,
}

impl<'a> ComponentAnalyzer<'a> {
    /// Compiles the analyzer's regexes.
    ///
    /// # Errors
    /// Returns `Error::Regex` naming the offending setting if one fails to compile.
    pub fn new(table: &'a PatternTable, settings: &'a AnalyzerSettings) -> Result<Self> {
        Ok(Self {
            table,
            settings,
            dark_class: compile("dark_class_regex", &settings.dark_class_regex)?,
            animation: compile("animation_regex", &settings.animation_regex)?,
            variant: compile("variant_regex", &settings.variant_regex)?,
            state: compile("state_regex", &settings.state_regex)?,
            custom_color: compile("custom_color_regex", &settings.custom_color_regex)?,
        })
    }

    /// Profiles `text` as the content of `path`, with paths made relative to `base`.
    ///
    /// This is a pure function of its arguments and the analyzer's configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokenshift::analyze::ComponentAnalyzer;
    /// use tokenshift::config::AnalyzerSettings;
    /// use tokenshift::core_types::{Complexity, Risk};
    /// use tokenshift::patterns::PatternTable;
    /// use std::path::Path;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let table = PatternTable::builtin()?;
    /// let settings = AnalyzerSettings::default();
    /// let analyzer = ComponentAnalyzer::new(&table, &settings)?;
    ///
    /// let text = r#"<div className="bg-white dark:bg-gray-800 text-gray-900 dark:text-white" />"#;
    /// let analysis = analyzer.analyze_content(
    ///     Path::new("/repo/components/ui/Card.tsx"),
    ///     Path::new("/repo"),
    ///     text,
    /// );
    /// assert_eq!(analysis.category, "ui");
    /// assert_eq!(analysis.complexity, Complexity::Simple);
    /// assert_eq!(analysis.risk, Risk::Low);
    /// assert!(analysis.automation_ready);
    /// # Ok(())
    /// # }
    /// ```
    pub fn analyze_content(&self, path: &Path, base: &Path, text: &str) -> ComponentAnalysis {
        let relative_path = relative_to(path, base);
        let category = self.category_for(&relative_path);

        let matched_patterns: Vec<String> = self
            .dark_class
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        let distinct = matched_patterns.iter().collect::<HashSet<_>>().len();

        let signals = Signals {
            animations: self.animation.is_match(text),
            variants: self.variant.is_match(text),
            state: self.state.is_match(text),
            custom_colors: self.custom_color.is_match(text),
        };

        let hit: HashSet<&str> = matched_patterns
            .iter()
            .map(|occ| self.table.classify_occurrence(occ))
            .collect();
        let estimated_patterns: Vec<String> = self
            .table
            .heuristic_categories()
            .into_iter()
            .filter(|c| hit.contains(c))
            .map(str::to_string)
            .collect();
        let unsafe_patterns: Vec<&str> = estimated_patterns
            .iter()
            .map(String::as_str)
            .filter(|p| !self.settings.safe_categories.iter().any(|s| s == p))
            .collect();

        let high_risk_category = self
            .settings
            .high_risk_categories
            .iter()
            .any(|c| *c == category);
        let complexity = scoring::complexity(distinct, signals, &self.settings.scoring);
        let risk = scoring::risk(high_risk_category, complexity, signals);
        let (automation_ready, mut notes) = scoring::readiness(&ReadinessInput {
            occurrences: matched_patterns.len(),
            signals,
            complexity,
            unsafe_patterns: &unsafe_patterns,
            manual_review_threshold: self.settings.manual_review_match_threshold,
        });
        if high_risk_category && !matched_patterns.is_empty() {
            notes.push(format!("High-risk area ({})", category));
        }

        ComponentAnalysis {
            file_path: path.to_path_buf(),
            relative_path,
            category,
            complexity,
            matched_patterns,
            has_animations: signals.animations,
            has_variants: signals.variants,
            has_state: signals.state,
            has_custom_colors: signals.custom_colors,
            estimated_patterns,
            automation_ready,
            notes,
            risk,
        }
    }

    /// Reads and profiles one file.
    ///
    /// # Errors
    /// `Error::Io` or `Error::NonUtf8` if the file cannot be read as text.
    #[instrument(level = "debug", skip(self), fields(file = %path.display()))]
    pub fn analyze_file(&self, path: &Path, base: &Path) -> Result<ComponentAnalysis> {
        let text = read_source(path)?;
        let analysis = self.analyze_content(path, base, &text);
        debug!(
            "{}: {} occurrence(s), {} / {} risk, ready={}",
            analysis.relative_path.display(),
            analysis.match_count(),
            analysis.complexity,
            analysis.risk,
            analysis.automation_ready
        );
        Ok(analysis)
    }

    /// Profiles every file under `resolved` and summarizes the run.
    ///
    /// Files that cannot be read are logged and left out of the report.
    ///
    /// # Errors
    /// Only discovery errors are returned.
    pub fn analyze_path(
        &self,
        resolved: &ResolvedInput,
        opts: &DiscoveryOptions,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<AnalysisReport> {
        let base = resolved.base_dir();
        let files = discover_files(resolved, opts)?;
        let components: Vec<ComponentAnalysis> =
            process_sequentially(&files, progress, |path| self.analyze_file(path, &base))
                .into_iter()
                .filter_map(|result| match result {
                    Ok(analysis) => Some(analysis),
                    Err(e) => {
                        warn!("Skipping unreadable file: {}", e);
                        None
                    }
                })
                .collect();
        let summary = summarize(&components, self.settings.top_candidates);
        Ok(AnalysisReport {
            summary,
            components,
        })
    }

    /// First configured category that names a directory of `relative_path`.
    fn category_for(&self, relative_path: &Path) -> String {
        let dirs: Vec<&str> = relative_path
            .parent()
            .map(|parent| {
                parent
                    .components()
                    .filter_map(|c| match c {
                        Component::Normal(name) => name.to_str(),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default();
        self.settings
            .categories
            .iter()
            .find(|c| dirs.contains(&c.as_str()))
            .cloned()
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string())
    }
}

fn compile(kind: &str, source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|e| Error::Regex {
        kind: kind.to_string(),
        pattern: source.to_string(),
        source: e,
    })
}

/// `path` relative to `base`, or just its file name when it lies elsewhere.
fn relative_to(path: &Path, base: &Path) -> PathBuf {
    match path.strip_prefix(base) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
        _ => path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| path.to_path_buf()),
    }
}
