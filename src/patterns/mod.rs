//! The migration pattern table.
//!
//! A table holds two ordered lists:
//! - **entries**: `(category, matcher, replacement)` rules applied by the color migrator;
//! - **heuristics**: `(category, matcher)` rules the component analyzer uses to label
//!   each `dark:` class occurrence it finds, without rewriting anything.
//!
//! Both lists are compiled once at startup from plain [`PatternSpec`] / [`HeuristicSpec`]
//! records (compiled-in defaults or a TOML config file) and never mutated afterwards.
//!
//! Entries are applied in declaration order. When two matchers can both match
//! overlapping text, the earlier entry wins because it rewrites the text before
//! the later one runs.

use crate::errors::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod defaults;

/// Label given to a `dark:` occurrence that no heuristic recognizes.
pub const UNCLASSIFIED_CATEGORY: &str = "other";

/// Uncompiled form of a replacement rule, as written in config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Category label, e.g. "surface".
    pub category: String,
    /// Regex source. Case and whitespace sensitive.
    pub matcher: String,
    /// Literal replacement text. `$` has no special meaning.
    pub replacement: String,
}

/// Uncompiled form of an analyzer heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicSpec {
    /// Category label the heuristic estimates.
    pub category: String,
    /// Regex source tested against a single `dark:` class occurrence.
    pub matcher: String,
}

/// A compiled replacement rule.
#[derive(Debug, Clone)]
pub struct PatternEntry {
    pub category: String,
    pub matcher: Regex,
    pub replacement: String,
}

/// A compiled analyzer heuristic.
#[derive(Debug, Clone)]
pub struct HeuristicEntry {
    pub category: String,
    pub matcher: Regex,
}

/// The compiled, validated pattern table.
#[derive(Debug, Clone)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
    heuristics: Vec<HeuristicEntry>,
}

impl PatternTable {
    /// Compiles and validates a table.
    ///
    /// # Errors
    /// - `Error::Regex` if any matcher fails to compile.
    /// - `Error::Config` if two entries share the same matcher source, or if an
    ///   entry's replacement on its own is matched by some entry.
    ///
    /// The replacement check catches the obvious ways a second run could
    /// rewrite migrated text, but it is not a proof of idempotence: a matcher
    /// can still match a replacement together with the text around it (for
    /// example `dark:bg-x\s+foo` replaced by `foo` in `dark:bg-x dark:bg-x foo`).
    /// The built-in table is idempotent because every matcher requires a
    /// `dark:` class and no replacement contains one.
    pub fn compile(patterns: &[PatternSpec], heuristics: &[HeuristicSpec]) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(patterns.len());
        for spec in patterns {
            if spec.category.trim().is_empty() {
                return Err(Error::Config(format!(
                    "pattern '{}' has an empty category",
                    spec.matcher
                )));
            }
            if !seen.insert(spec.matcher.as_str()) {
                return Err(Error::Config(format!(
                    "duplicate pattern matcher '{}'",
                    spec.matcher
                )));
            }
            entries.push(PatternEntry {
                category: spec.category.clone(),
                matcher: compile_matcher(&spec.matcher, "pattern")?,
                replacement: spec.replacement.clone(),
            });
        }

        for entry in &entries {
            if let Some(other) = entries
                .iter()
                .find(|other| other.matcher.is_match(&entry.replacement))
            {
                return Err(Error::Config(format!(
                    "replacement '{}' ({}) is matched by pattern '{}' ({}); migrated text would be rewritten again",
                    entry.replacement,
                    entry.category,
                    other.matcher.as_str(),
                    other.category
                )));
            }
        }

        let heuristics = heuristics
            .iter()
            .map(|spec| {
                Ok(HeuristicEntry {
                    category: spec.category.clone(),
                    matcher: compile_matcher(&spec.matcher, "heuristic")?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Compiled pattern table: {} entries, {} heuristics",
            entries.len(),
            heuristics.len()
        );
        Ok(Self {
            entries,
            heuristics,
        })
    }

    /// The compiled-in default table.
    pub fn builtin() -> Result<Self> {
        Self::compile(&defaults::default_patterns(), &defaults::default_heuristics())
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn heuristics(&self) -> &[HeuristicEntry] {
        &self.heuristics
    }

    /// Distinct entry categories in declaration order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !out.contains(&entry.category.as_str()) {
                out.push(&entry.category);
            }
        }
        out
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.entries.iter().any(|e| e.category == category)
    }

    /// Entries whose category passes the optional filter, in declaration order.
    pub fn active_entries<'a>(
        &'a self,
        filter: Option<&'a str>,
    ) -> impl Iterator<Item = &'a PatternEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| filter.map_or(true, |f| e.category == f))
    }

    /// Distinct heuristic categories in declaration order, followed by
    /// [`UNCLASSIFIED_CATEGORY`].
    pub fn heuristic_categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for h in &self.heuristics {
            if !out.contains(&h.category.as_str()) {
                out.push(&h.category);
            }
        }
        out.push(UNCLASSIFIED_CATEGORY);
        out
    }

    /// Labels one `dark:` class occurrence with the first heuristic that matches it.
    pub fn classify_occurrence(&self, occurrence: &str) -> &str {
        self.heuristics
            .iter()
            .find(|h| h.matcher.is_match(occurrence))
            .map(|h| h.category.as_str())
            .unwrap_or(UNCLASSIFIED_CATEGORY)
    }
}

fn compile_matcher(source: &str, kind: &str) -> Result<Regex> {
    Regex::new(source).map_err(|source_err| Error::Regex {
        kind: kind.to_string(),
        pattern: source.to_string(),
        source: source_err,
    })
}
