//! Defines the configuration structs for the three tools.
//!
//! [`ToolConfig`] holds every tunable (walker exclusions, pattern table,
//! import rules, analyzer weights and thresholds, documentation defaults) with
//! compiled-in defaults. A TOML file passed with `--config` overrides any
//! section it names; sections it omits keep their defaults. Command-line flags
//! are applied on top by the builders in this module.

use crate::migrate::ImportRule;
use crate::patterns::{defaults, HeuristicSpec, PatternSpec, PatternTable};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use builder::{AnalyzeConfig, DocsConfig, MigrateConfig};
pub use path_resolve::{resolve_input, ResolvedInput};
mod builder;
mod parsing;
pub mod path_resolve;
mod validation;

pub use parsing::parse_max_size;

/// All tunables, as loaded from defaults and an optional TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    pub walker: WalkerSettings,
    /// Replaces the whole default pattern table when present.
    pub patterns: Vec<PatternSpec>,
    /// Replaces the default analyzer heuristics when present.
    pub heuristics: Vec<HeuristicSpec>,
    pub imports: Vec<ImportRule>,
    pub analyzer: AnalyzerSettings,
    pub docs: DocsSettings,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            walker: WalkerSettings::default(),
            patterns: defaults::default_patterns(),
            heuristics: defaults::default_heuristics(),
            imports: vec![ImportRule::default()],
            analyzer: AnalyzerSettings::default(),
            docs: DocsSettings::default(),
        }
    }
}

impl ToolConfig {
    /// Loads the defaults, overridden by the TOML file at `path` if given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => parsing::read_config_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Compiles and validates the pattern table.
    pub fn pattern_table(&self) -> Result<PatternTable> {
        PatternTable::compile(&self.patterns, &self.heuristics)
            .context("Failed to build the pattern table")
    }
}

/// File walker settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalkerSettings {
    /// File extensions (without dot, case-insensitive) considered source files.
    pub extensions: Vec<String>,
    /// Directory names never descended into.
    pub exclude_dirs: Vec<String>,
    /// File-name globs that are skipped (tests, stories, declarations).
    pub exclude_globs: Vec<String>,
    /// Optional maximum file size, e.g. "512KiB". Larger files are skipped.
    pub max_size: Option<String>,
}

impl Default for WalkerSettings {
    fn default() -> Self {
        Self {
            extensions: to_strings(crate::constants::DEFAULT_EXTENSIONS),
            exclude_dirs: to_strings(crate::constants::DEFAULT_EXCLUDE_DIRS),
            exclude_globs: to_strings(crate::constants::DEFAULT_EXCLUDE_GLOBS),
            max_size: None,
        }
    }
}

/// Component analyzer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerSettings {
    /// Directory names that give a file its category, checked in order.
    pub categories: Vec<String>,
    /// Categories whose files are always high risk.
    pub high_risk_categories: Vec<String>,
    /// Pattern categories judged safe for unattended substitution.
    pub safe_categories: Vec<String>,
    /// Regex locating a single `dark:` class occurrence.
    pub dark_class_regex: String,
    pub animation_regex: String,
    pub variant_regex: String,
    pub state_regex: String,
    pub custom_color_regex: String,
    pub scoring: ScoringSettings,
    /// Above this many occurrences, a file that also uses variants needs manual review.
    pub manual_review_match_threshold: usize,
    /// Length of the "top candidates" list.
    pub top_candidates: usize,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        use crate::constants as c;
        Self {
            categories: to_strings(c::DEFAULT_COMPONENT_CATEGORIES),
            high_risk_categories: to_strings(c::DEFAULT_HIGH_RISK_CATEGORIES),
            safe_categories: to_strings(defaults::SAFE_CATEGORIES),
            dark_class_regex: c::DARK_CLASS_REGEX.to_string(),
            animation_regex: c::ANIMATION_REGEX.to_string(),
            variant_regex: c::VARIANT_REGEX.to_string(),
            state_regex: c::STATE_REGEX.to_string(),
            custom_color_regex: c::CUSTOM_COLOR_REGEX.to_string(),
            scoring: ScoringSettings::default(),
            manual_review_match_threshold: 10,
            top_candidates: 10,
        }
    }
}

/// Complexity scoring weights and thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringSettings {
    /// Up to this many distinct occurrences scores `small_tier_points`.
    pub small_tier_max: usize,
    /// Up to this many distinct occurrences scores `medium_tier_points`; more scores `large_tier_points`.
    pub medium_tier_max: usize,
    pub small_tier_points: u32,
    pub medium_tier_points: u32,
    pub large_tier_points: u32,
    pub animation_points: u32,
    pub variant_points: u32,
    pub state_points: u32,
    pub custom_color_points: u32,
    /// Highest score still classified "simple".
    pub simple_max: u32,
    /// Highest score still classified "medium".
    pub medium_max: u32,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            small_tier_max: 5,
            medium_tier_max: 15,
            small_tier_points: 1,
            medium_tier_points: 2,
            large_tier_points: 3,
            animation_points: 2,
            variant_points: 1,
            state_points: 1,
            custom_color_points: 2,
            simple_max: 2,
            medium_max: 5,
        }
    }
}

/// Documentation generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsSettings {
    /// Directory receiving generated reports when `--output` is not given.
    pub output_dir: PathBuf,
    /// Minutes a manual migration of one component is assumed to take.
    pub manual_baseline_minutes: f64,
}

impl Default for DocsSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(crate::constants::DEFAULT_DOCS_DIR),
            manual_baseline_minutes: crate::constants::MANUAL_BASELINE_MINUTES,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_table() -> Result<()> {
        let config = ToolConfig::load(None)?;
        let table = config.pattern_table()?;
        assert!(table.has_category("surface"));
        assert!(config.walker.extensions.contains(&"tsx".to_string()));
        assert_eq!(config.analyzer.top_candidates, 10);
        assert_eq!(config.docs.manual_baseline_minutes, 30.0);
        Ok(())
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() -> Result<()> {
        let config: ToolConfig = toml::from_str(
            r#"
            [analyzer]
            top_candidates = 3

            [analyzer.scoring]
            simple_max = 1
            "#,
        )?;
        assert_eq!(config.analyzer.top_candidates, 3);
        assert_eq!(config.analyzer.scoring.simple_max, 1);
        assert_eq!(config.analyzer.scoring.medium_max, 5);
        assert_eq!(config.patterns, defaults::default_patterns());
        assert_eq!(config.walker, WalkerSettings::default());
        Ok(())
    }

    #[test]
    fn test_toml_patterns_replace_table() -> Result<()> {
        let config: ToolConfig = toml::from_str(
            r#"
            [[patterns]]
            category = "accent"
            matcher = '\bdark:text-blue-400\b'
            replacement = "text-accent"
            "#,
        )?;
        let table = config.pattern_table()?;
        assert_eq!(table.categories(), vec!["accent"]);
        Ok(())
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: std::result::Result<ToolConfig, _> = toml::from_str("[walker]\nbogus = 1\n");
        assert!(result.is_err());
    }
}
