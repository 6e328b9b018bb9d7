//! Defines core data structures produced by the migrator and the analyzer.
//!
//! These records are created once per processed file, never mutated afterwards,
//! and serialized (camelCase) for the JSON hand-off between the tools.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Outcome of running the color migrator over a single file.
///
/// # Examples
///
/// ```
/// use tokenshift::core_types::MigrationResult;
/// use std::path::PathBuf;
///
/// let result = MigrationResult::failure(PathBuf::from("app/page.tsx"), "Permission denied");
/// assert!(!result.success);
/// assert_eq!(result.replacements, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationResult {
    /// Path of the processed file.
    #[serde(alias = "filePath")]
    pub file: PathBuf,
    /// `false` when the file could not be read or written.
    pub success: bool,
    /// Total number of replacements made. Always the sum of `pattern_counts`.
    #[serde(default)]
    pub replacements: usize,
    /// Categories that contributed at least one replacement, in table order.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Replacements per category.
    #[serde(default)]
    pub pattern_counts: BTreeMap<String, usize>,
    /// Whether a support import line was inserted.
    #[serde(default)]
    pub import_added: bool,
    /// Whether the file was rewritten on disk.
    #[serde(default)]
    pub written: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MigrationResult {
    /// A failed result carrying only the path and an error message.
    pub fn failure(file: PathBuf, message: impl Into<String>) -> Self {
        Self {
            file,
            success: false,
            error: Some(message.into()),
            ..Default::default()
        }
    }

    /// A successful result that made at least one replacement.
    pub fn is_migration(&self) -> bool {
        self.success && self.replacements > 0
    }
}

/// Aggregate of a migrator run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationSummary {
    pub total_files: usize,
    /// Files that succeeded with at least one replacement.
    pub migrated_files: usize,
    /// Files that succeeded with no replacement.
    pub unchanged_files: usize,
    pub failures: Vec<FailedFile>,
    pub total_replacements: usize,
    pub category_counts: BTreeMap<String, usize>,
    pub dry_run: bool,
}

/// A file that failed to migrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedFile {
    pub file: PathBuf,
    pub error: String,
}

impl MigrationSummary {
    /// Folds a list of per-file results into a run summary.
    pub fn from_results(results: &[MigrationResult], dry_run: bool) -> Self {
        let mut summary = MigrationSummary {
            total_files: results.len(),
            dry_run,
            ..Default::default()
        };
        for result in results {
            if !result.success {
                summary.failures.push(FailedFile {
                    file: result.file.clone(),
                    error: result
                        .error
                        .clone()
                        .unwrap_or_else(|| "unknown error".to_string()),
                });
                continue;
            }
            if result.replacements > 0 {
                summary.migrated_files += 1;
            } else {
                summary.unchanged_files += 1;
            }
            summary.total_replacements += result.replacements;
            for (category, count) in &result.pattern_counts {
                *summary.category_counts.entry(category.clone()).or_insert(0) += count;
            }
        }
        summary
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Complexity tier assigned by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        })
    }
}

/// Risk tier assigned by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Low,
    Medium,
    High,
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Risk::Low => "low",
            Risk::Medium => "medium",
            Risk::High => "high",
        })
    }
}

/// Heuristic profile of a single component file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentAnalysis {
    pub file_path: PathBuf,
    pub relative_path: PathBuf,
    /// Directory-derived label such as "ui" or "auth"; "other" when none applies.
    pub category: String,
    pub complexity: Complexity,
    /// Every `dark:` class occurrence, in text order.
    pub matched_patterns: Vec<String>,
    pub has_animations: bool,
    pub has_variants: bool,
    pub has_state: bool,
    pub has_custom_colors: bool,
    /// Pattern categories estimated to apply, in table order.
    pub estimated_patterns: Vec<String>,
    pub automation_ready: bool,
    pub notes: Vec<String>,
    pub risk: Risk,
}

impl ComponentAnalysis {
    pub fn match_count(&self) -> usize {
        self.matched_patterns.len()
    }
}

/// Number of files per complexity tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityCounts {
    pub simple: usize,
    pub medium: usize,
    pub complex: usize,
}

impl ComplexityCounts {
    pub fn record(&mut self, complexity: Complexity) {
        match complexity {
            Complexity::Simple => self.simple += 1,
            Complexity::Medium => self.medium += 1,
            Complexity::Complex => self.complex += 1,
        }
    }
}

/// Number of files per risk tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskCounts {
    pub fn record(&mut self, risk: Risk) {
        match risk {
            Risk::Low => self.low += 1,
            Risk::Medium => self.medium += 1,
            Risk::High => self.high += 1,
        }
    }
}

/// An easy automation candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub relative_path: PathBuf,
    pub category: String,
    pub match_count: usize,
}

/// A file flagged for manual handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualItem {
    pub relative_path: PathBuf,
    pub complexity: Complexity,
    pub risk: Risk,
    pub match_count: usize,
    pub notes: Vec<String>,
}

/// Run-level aggregate of component analyses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total_files: usize,
    pub files_with_dark_classes: usize,
    pub total_dark_classes: usize,
    pub automation_ready: usize,
    pub categories: BTreeMap<String, usize>,
    pub complexity: ComplexityCounts,
    pub risk: RiskCounts,
    pub pattern_usage: BTreeMap<String, usize>,
    pub top_candidates: Vec<Candidate>,
    pub manual_review: Vec<ManualItem>,
}

/// The analyzer export document: summary plus every per-file record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: AnalysisSummary,
    pub components: Vec<ComponentAnalysis>,
}
