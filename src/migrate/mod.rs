//! The color migrator.
//!
//! Applies the pattern table to file text, counts replacements per category,
//! optionally inserts a support import, and writes the result back unless the
//! run is a dry run.

use crate::config::ResolvedInput;
use crate::core_types::MigrationResult;
use crate::discovery::{discover_files, DiscoveryOptions};
use crate::errors::{io_error_with_path, Error, Result};
use crate::patterns::PatternTable;
use crate::processing::{process_sequentially, read_source};
use crate::progress::ProgressReporter;
use log::{debug, trace};
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::instrument;

mod imports;

pub use imports::{insert_import, ImportRule};

/// Whether migrated text is written back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MigrationMode {
    #[default]
    Apply,
    DryRun,
}

/// The outcome of migrating a piece of text in memory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentMigration {
    /// The migrated text.
    pub content: String,
    pub replacements: usize,
    pub pattern_counts: BTreeMap<String, usize>,
    /// Categories that fired, in table order.
    pub patterns: Vec<String>,
    pub import_added: bool,
}

impl ContentMigration {
    pub fn changed(&self) -> bool {
        self.replacements > 0 || self.import_added
    }
}

/// Applies a [`PatternTable`] to files.
///
/// # Examples
///
/// ```
/// use tokenshift::migrate::{ColorMigrator, ImportRule, MigrationMode};
/// use tokenshift::patterns::PatternTable;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = PatternTable::builtin()?;
/// let migrator = ColorMigrator::new(&table, &[], MigrationMode::DryRun, Some("surface"))?;
///
/// let out = migrator.migrate_content(r#"<div className="dark:bg-gray-800 bg-white p-4">"#);
/// assert_eq!(out.content, r#"<div className="bg-surface p-4">"#);
/// assert_eq!(out.replacements, 1);
/// assert_eq!(out.patterns, vec!["surface"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ColorMigrator<'a> {
    table: &'a PatternTable,
    import_rules: &'a [ImportRule],
    mode: MigrationMode,
    category: Option<&'a str>,
}

impl<'a> ColorMigrator<'a> {
    /// Creates a migrator restricted to `category` when given.
    ///
    /// # Errors
    /// Returns `Error::Config` if `category` names no category of the table.
    pub fn new(
        table: &'a PatternTable,
        import_rules: &'a [ImportRule],
        mode: MigrationMode,
        category: Option<&'a str>,
    ) -> Result<Self> {
        if let Some(c) = category {
            if !table.has_category(c) {
                return Err(Error::Config(format!(
                    "Unknown pattern category '{}'. Available: {}",
                    c,
                    table.categories().join(", ")
                )));
            }
        }
        Ok(Self {
            table,
            import_rules,
            mode,
            category,
        })
    }

    pub fn mode(&self) -> MigrationMode {
        self.mode
    }

    /// Migrates `text` in memory. Never touches the filesystem.
    ///
    /// Entries run one after another in table order, each over the output of
    /// the previous one, so an earlier entry consumes text before a later one
    /// can see it.
    pub fn migrate_content(&self, text: &str) -> ContentMigration {
        let mut content = text.to_string();
        let mut pattern_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut patterns: Vec<String> = Vec::new();
        let mut replacements = 0;

        for entry in self.table.active_entries(self.category) {
            let (next, count) = replace_standalone(&entry.matcher, &content, &entry.replacement);
            if count == 0 {
                continue;
            }
            trace!(
                "Pattern '{}' ({}) matched {} time(s)",
                entry.matcher.as_str(),
                entry.category,
                count
            );
            content = next;
            replacements += count;
            *pattern_counts.entry(entry.category.clone()).or_insert(0) += count;
            if !patterns.contains(&entry.category) {
                patterns.push(entry.category.clone());
            }
        }

        let mut import_added = false;
        if replacements > 0 {
            for rule in self.import_rules {
                if rule.is_needed(&content) {
                    content = insert_import(&content, &rule.line);
                    import_added = true;
                }
            }
        }

        ContentMigration {
            content,
            replacements,
            pattern_counts,
            patterns,
            import_added,
        }
    }

    /// Migrates one file. Read and write failures are recorded in the result.
    #[instrument(level = "debug", skip(self), fields(file = %path.display()))]
    pub fn migrate_file(&self, path: &Path) -> MigrationResult {
        let text = match read_source(path) {
            Ok(text) => text,
            Err(e) => {
                debug!("Skipping {}: {}", path.display(), e);
                return MigrationResult::failure(path.to_path_buf(), e.to_string());
            }
        };

        let migration = self.migrate_content(&text);
        let mut written = false;
        if self.mode == MigrationMode::Apply && migration.replacements > 0 {
            if let Err(e) = fs::write(path, &migration.content) {
                let err = io_error_with_path(e, path);
                return MigrationResult::failure(path.to_path_buf(), err.to_string());
            }
            written = true;
        }
        debug!(
            "{}: {} replacement(s){}",
            path.display(),
            migration.replacements,
            if written { ", written" } else { "" }
        );

        MigrationResult {
            file: path.to_path_buf(),
            success: true,
            replacements: migration.replacements,
            patterns: migration.patterns,
            pattern_counts: migration.pattern_counts,
            import_added: migration.import_added,
            written,
            error: None,
        }
    }

    /// Migrates every file under `resolved`, one at a time in walker order.
    ///
    /// # Errors
    /// Only discovery errors are returned; per-file failures end up in the results.
    pub fn migrate_path(
        &self,
        resolved: &ResolvedInput,
        opts: &DiscoveryOptions,
        progress: Option<&dyn ProgressReporter>,
    ) -> Result<Vec<MigrationResult>> {
        let files = discover_files(resolved, opts)?;
        Ok(process_sequentially(&files, progress, |path| {
            self.migrate_file(path)
        }))
    }
}

/// Replaces, literally, every match of `matcher` that covers whole class tokens.
///
/// A match glued to a variant prefix (`md:bg-white ...`), to a longer class
/// name, or to an opacity modifier (`... dark:bg-gray-800/50`) is not the
/// plain light/dark pair and is left alone. Returns the new text and the
/// number of replacements.
fn replace_standalone(matcher: &Regex, text: &str, replacement: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut count = 0;
    let mut pos = 0;

    while pos <= text.len() {
        let Some(m) = matcher.find_at(text, pos) else {
            break;
        };
        if m.start() < m.end() && is_standalone(text, m.start(), m.end()) {
            out.push_str(&text[last..m.start()]);
            out.push_str(replacement);
            last = m.end();
            pos = m.end();
            count += 1;
        } else {
            // Retry one character later: a shorter match may start inside this one.
            pos = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
        }
    }
    out.push_str(&text[last..]);
    (out, count)
}

fn is_standalone(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !matches!(before, Some(':' | '-' | '/')) && !matches!(after, Some('/' | '-' | ':'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve_input;
    use crate::patterns::PatternSpec;
    use proptest::prelude::*;
    use tempfile::tempdir;

    fn builtin() -> PatternTable {
        PatternTable::builtin().unwrap()
    }

    #[test]
    fn test_reversed_pair_with_category_filter() {
        let table = builtin();
        let migrator = ColorMigrator::new(&table, &[], MigrationMode::DryRun, Some("surface")).unwrap();
        let out = migrator.migrate_content("dark:bg-gray-800 bg-white");
        assert_eq!(out.content, "bg-surface");
        assert_eq!(out.replacements, 1);
        assert_eq!(out.patterns, vec!["surface".to_string()]);
    }

    #[test]
    fn test_counts_per_category() {
        let table = builtin();
        let migrator = ColorMigrator::new(&table, &[], MigrationMode::DryRun, None).unwrap();
        let text = r#"<div className="bg-white dark:bg-gray-900 border-gray-200 dark:border-gray-700">
  <p className="text-gray-900 dark:text-white">a</p>
  <p className="text-gray-500 dark:text-gray-400">b</p>
</div>"#;
        let out = migrator.migrate_content(text);
        assert_eq!(out.replacements, 4);
        assert_eq!(out.pattern_counts.get("surface"), Some(&1));
        assert_eq!(out.pattern_counts.get("border"), Some(&1));
        assert_eq!(out.pattern_counts.get("text"), Some(&2));
        assert_eq!(out.patterns, vec!["surface", "border", "text"]);
        assert!(out.content.contains("bg-surface border-border"));
        assert!(out.content.contains("text-muted-foreground"));
    }

    #[test]
    fn test_filter_skips_other_categories() {
        let table = builtin();
        let migrator = ColorMigrator::new(&table, &[], MigrationMode::DryRun, Some("border")).unwrap();
        let text = "bg-white dark:bg-gray-800 text-gray-900 dark:text-white";
        let out = migrator.migrate_content(text);
        assert_eq!(out.replacements, 0);
        assert_eq!(out.content, text);
        assert!(!out.changed());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let table = builtin();
        let err = ColorMigrator::new(&table, &[], MigrationMode::Apply, Some("shadow")).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("shadow")));
    }

    #[test]
    fn test_earlier_entry_wins_on_overlap() {
        let specs = vec![
            PatternSpec {
                category: "first".into(),
                matcher: r"\bbg-white\s+dark:bg-black\b".into(),
                replacement: "bg-a".into(),
            },
            PatternSpec {
                category: "second".into(),
                matcher: r"\bdark:bg-black\s+shadow\b".into(),
                replacement: "bg-b".into(),
            },
        ];
        let table = PatternTable::compile(&specs, &[]).unwrap();
        let migrator = ColorMigrator::new(&table, &[], MigrationMode::DryRun, None).unwrap();
        let out = migrator.migrate_content("bg-white dark:bg-black shadow");
        assert_eq!(out.content, "bg-a shadow");
        assert_eq!(out.patterns, vec!["first"]);
    }

    #[test]
    fn test_replacement_is_literal() {
        let specs = vec![PatternSpec {
            category: "x".into(),
            matcher: r"\b(bg)-red\s+dark:bg-blue\b".into(),
            replacement: "$1-token".into(),
        }];
        let table = PatternTable::compile(&specs, &[]).unwrap();
        let migrator = ColorMigrator::new(&table, &[], MigrationMode::DryRun, None).unwrap();
        assert_eq!(migrator.migrate_content("bg-red dark:bg-blue").content, "$1-token");
    }

    #[test]
    fn test_prefixed_or_modified_pairs_are_left_alone() {
        let table = builtin();
        let migrator = ColorMigrator::new(&table, &[], MigrationMode::DryRun, None).unwrap();
        for text in [
            "md:bg-white dark:bg-gray-800",
            "bg-white dark:bg-gray-800/50",
            "text-gray-900 dark:text-white/70",
            "hover:bg-gray-100 dark:bg-gray-700",
            "md:dark:bg-gray-900 bg-white",
        ] {
            let out = migrator.migrate_content(text);
            assert_eq!(out.replacements, 0, "rewrote {text:?} to {:?}", out.content);
            assert_eq!(out.content, text);
        }
    }

    #[test]
    fn test_rejected_match_does_not_hide_a_later_pair() {
        let table = builtin();
        let migrator = ColorMigrator::new(&table, &[], MigrationMode::DryRun, None).unwrap();
        let out = migrator.migrate_content(
            r#"<a className="md:bg-white dark:bg-gray-800 bg-white dark:bg-gray-900 p-2">"#,
        );
        assert_eq!(
            out.content,
            r#"<a className="md:bg-white dark:bg-gray-800 bg-surface p-2">"#
        );
        assert_eq!(out.replacements, 1);
    }

    #[test]
    fn test_existing_import_styles_are_not_duplicated() {
        let table = builtin();
        let rules = vec![ImportRule::default()];
        let migrator = ColorMigrator::new(&table, &rules, MigrationMode::DryRun, None).unwrap();
        for import in [
            "import { cn } from '@/lib/utils';",
            "import { cn, foo } from \"@/lib/utils\";",
            "import {cn} from \"@/lib/utils\";",
        ] {
            let src = format!("{}\nconst c = cn('bg-white dark:bg-gray-800');\n", import);
            let out = migrator.migrate_content(&src);
            assert_eq!(out.replacements, 1);
            assert!(!out.import_added, "import duplicated for {import}");
            assert_eq!(out.content, format!("{}\nconst c = cn('bg-surface');\n", import));
        }
    }

    #[test]
    fn test_import_added_only_with_replacements() {
        let table = builtin();
        let rules = vec![ImportRule::default()];
        let migrator = ColorMigrator::new(&table, &rules, MigrationMode::DryRun, None).unwrap();

        let src = "import React from 'react';\nconst c = cn('bg-white dark:bg-gray-800');\n";
        let out = migrator.migrate_content(src);
        assert!(out.import_added);
        assert_eq!(out.replacements, 1);
        assert_eq!(
            out.content,
            "import React from 'react';\nimport { cn } from \"@/lib/utils\";\nconst c = cn('bg-surface');\n"
        );

        let untouched = migrator.migrate_content("const c = cn('p-4');\n");
        assert!(!untouched.import_added);
        assert_eq!(untouched.content, "const c = cn('p-4');\n");
    }

    #[test]
    fn test_migrate_file_dry_run_does_not_write() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("Card.tsx");
        fs::write(&path, "bg-white dark:bg-gray-800")?;
        let table = builtin();
        let migrator = ColorMigrator::new(&table, &[], MigrationMode::DryRun, None)?;
        let result = migrator.migrate_file(&path);
        assert!(result.success);
        assert_eq!(result.replacements, 1);
        assert!(!result.written);
        assert_eq!(fs::read_to_string(&path)?, "bg-white dark:bg-gray-800");
        Ok(())
    }

    #[test]
    fn test_migrate_file_apply_writes() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("Card.tsx");
        fs::write(&path, "x border-gray-300 dark:border-gray-600 y")?;
        let table = builtin();
        let migrator = ColorMigrator::new(&table, &[], MigrationMode::Apply, None)?;
        let result = migrator.migrate_file(&path);
        assert!(result.written);
        assert_eq!(fs::read_to_string(&path)?, "x border-border-strong y");
        Ok(())
    }

    #[test]
    fn test_migrate_file_records_non_utf8_failure() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("bad.tsx");
        fs::write(&path, [0xff, 0xfe, 0x00])?;
        let table = builtin();
        let migrator = ColorMigrator::new(&table, &[], MigrationMode::Apply, None)?;
        let result = migrator.migrate_file(&path);
        assert!(!result.success);
        assert!(result.error.unwrap().contains("UTF-8"));
        Ok(())
    }

    #[test]
    fn test_migrate_path_processes_in_walker_order() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("b.tsx"), "text-gray-700 dark:text-gray-300")?;
        fs::write(temp.path().join("a.tsx"), "nothing here")?;
        let resolved = resolve_input(temp.path().to_str().unwrap())?;
        let table = builtin();
        let migrator = ColorMigrator::new(&table, &[], MigrationMode::DryRun, None)?;
        let results = migrator.migrate_path(&resolved, &DiscoveryOptions::default(), None)?;
        assert_eq!(results.len(), 2);
        assert!(results[0].file.ends_with("a.tsx"));
        assert_eq!(results[0].replacements, 0);
        assert_eq!(results[1].replacements, 1);
        Ok(())
    }

    const VOCAB: &[&str] = &[
        "bg-white",
        "dark:bg-gray-800",
        "dark:bg-gray-900",
        "bg-gray-50",
        "bg-gray-100",
        "dark:bg-gray-700",
        "hover:bg-gray-100",
        "dark:hover:bg-gray-700",
        "border-gray-200",
        "dark:border-gray-700",
        "border-gray-300",
        "dark:border-gray-600",
        "text-gray-900",
        "dark:text-white",
        "text-gray-500",
        "dark:text-gray-400",
        "p-4",
        "rounded",
        "\n",
    ];

    #[test]
    fn test_migration_is_idempotent() {
        let table = builtin();
        let migrator = ColorMigrator::new(&table, &[], MigrationMode::DryRun, None).unwrap();
        proptest!(|(words in prop::collection::vec(prop::sample::select(VOCAB), 0..40))| {
            let text = words.join(" ");
            let first = migrator.migrate_content(&text);
            prop_assert_eq!(first.replacements, first.pattern_counts.values().sum::<usize>());
            let second = migrator.migrate_content(&first.content);
            prop_assert_eq!(second.replacements, 0);
            prop_assert_eq!(second.content, first.content);
        });
    }
}
