// src/docs/templates.rs

//! Fixed markdown sections of the migration reports.

use super::{DocOptions, Method};
use crate::constants::SUMMARY_SEPARATOR;
use crate::core_types::{ComponentAnalysis, MigrationResult, MigrationSummary};
use std::fmt::{self, Write};
use std::path::Path;

const VALIDATION_CHECKLIST: &[&str] = &[
    "Light mode renders as before",
    "Dark mode renders as before",
    "Hover and focus states keep their contrast",
    "No hard-coded light/dark pairs remain for the migrated categories",
    "Type check and lint pass",
];

const NEXT_STEPS: &[&str] = &[
    "Prefer semantic tokens (`bg-surface`, `border-border`, `text-foreground`) in new code.",
    "Add a token to the theme instead of introducing a new `dark:` pair.",
    "Run `analyze-components` again to find the next automation candidates.",
];

pub(super) fn header(
    out: &mut String,
    title: &str,
    file: &Path,
    options: &DocOptions,
) -> fmt::Result {
    writeln!(out, "# {}", title)?;
    writeln!(out)?;
    writeln!(out, "**Date:** {}", options.date.format("%Y-%m-%d"))?;
    writeln!(out, "**File:** `{}`", file.display())?;
    writeln!(out, "**Method:** {}", method_label(options.method))?;
    writeln!(out, "**Time Taken:** {}", minutes_label(options.time_minutes))?;
    writeln!(out)
}

pub(super) fn analysis_section(out: &mut String, analysis: Option<&ComponentAnalysis>) -> fmt::Result {
    writeln!(out, "## Discovery & Analysis")?;
    writeln!(out)?;
    let Some(a) = analysis else {
        writeln!(out, "_No analysis available._")?;
        return writeln!(out);
    };
    writeln!(out, "- **Category:** {}", a.category)?;
    writeln!(out, "- **Complexity:** {}", a.complexity)?;
    writeln!(out, "- **Risk:** {}", a.risk)?;
    writeln!(out, "- **Dark classes found:** {}", a.match_count())?;
    writeln!(out, "- **Automation ready:** {}", yes_no(a.automation_ready))?;
    writeln!(out, "- **Estimated patterns:** {}", list_or_none(&a.estimated_patterns))?;

    let signals: Vec<String> = [
        (a.has_animations, "animations"),
        (a.has_variants, "variants"),
        (a.has_state, "state or event handlers"),
        (a.has_custom_colors, "inline literal colors"),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, name)| name.to_string())
    .collect();
    writeln!(out, "- **Signals:** {}", list_or_none(&signals))?;
    for note in &a.notes {
        writeln!(out, "- _{}_", note)?;
    }
    writeln!(out)
}

pub(super) fn implementation_section(
    out: &mut String,
    migration: Option<&MigrationResult>,
) -> fmt::Result {
    writeln!(out, "## Implementation")?;
    writeln!(out)?;
    let Some(m) = migration else {
        writeln!(out, "_No migration result recorded._")?;
        return writeln!(out);
    };
    if !m.success {
        writeln!(
            out,
            "- **Status:** failed ({})",
            m.error.as_deref().unwrap_or("unknown error")
        )?;
        return writeln!(out);
    }
    writeln!(out, "- **Replacements:** {}", m.replacements)?;
    writeln!(out, "- **File written:** {}", yes_no(m.written))?;
    writeln!(out, "- **Support import added:** {}", yes_no(m.import_added))?;
    writeln!(out)
}

pub(super) fn patterns_section(out: &mut String, migration: Option<&MigrationResult>) -> fmt::Result {
    writeln!(out, "## Patterns Applied")?;
    writeln!(out)?;
    match migration {
        Some(m) if !m.pattern_counts.is_empty() => {
            writeln!(out, "| Category | Replacements |")?;
            writeln!(out, "|---|---|")?;
            for category in &m.patterns {
                let count = m.pattern_counts.get(category).copied().unwrap_or(0);
                writeln!(out, "| {} | {} |", category, count)?;
            }
        }
        Some(m) if !m.patterns.is_empty() => {
            writeln!(out, "{}", m.patterns.join(", "))?;
        }
        _ => writeln!(out, "_No patterns applied._")?,
    }
    writeln!(out)
}

pub(super) fn validation_section(out: &mut String) -> fmt::Result {
    writeln!(out, "## Validation")?;
    writeln!(out)?;
    for item in VALIDATION_CHECKLIST {
        writeln!(out, "- [x] {}", item)?;
    }
    writeln!(out)
}

pub(super) fn efficiency_section(
    out: &mut String,
    heading: &str,
    baseline_minutes: f64,
    time_minutes: Option<f64>,
    files: usize,
) -> fmt::Result {
    writeln!(out, "## {}", heading)?;
    writeln!(out)?;
    if files > 1 {
        writeln!(
            out,
            "- **Manual baseline:** {} min x {} files = {} min",
            fmt_minutes(baseline_minutes / files as f64),
            files,
            fmt_minutes(baseline_minutes)
        )?;
    } else {
        writeln!(out, "- **Manual baseline:** {} min", fmt_minutes(baseline_minutes))?;
    }
    writeln!(out, "- **Time taken:** {}", minutes_label(time_minutes))?;
    match time_minutes {
        Some(taken) => {
            let saved = baseline_minutes - taken;
            if baseline_minutes > 0.0 {
                writeln!(
                    out,
                    "- **Time saved:** {} min ({:.1}%)",
                    fmt_minutes(saved),
                    saved / baseline_minutes * 100.0
                )?;
            } else {
                writeln!(out, "- **Time saved:** {} min", fmt_minutes(saved))?;
            }
            if files > 1 {
                writeln!(
                    out,
                    "- **Average per file:** {} min",
                    fmt_minutes(taken / files as f64)
                )?;
            }
        }
        None => writeln!(out, "- **Time saved:** not recorded")?,
    }
    writeln!(out)
}

pub(super) fn knowledge_section(out: &mut String) -> fmt::Result {
    writeln!(out, "## Knowledge & Next Steps")?;
    writeln!(out)?;
    for step in NEXT_STEPS {
        writeln!(out, "- {}", step)?;
    }
    writeln!(out)
}

pub(super) fn notes_section(out: &mut String, notes: &[String]) -> fmt::Result {
    writeln!(out, "## Notes")?;
    writeln!(out)?;
    if notes.is_empty() {
        writeln!(out, "_None._")?;
    }
    for note in notes {
        writeln!(out, "- {}", note)?;
    }
    Ok(())
}

pub(super) fn batch_overview(out: &mut String, summary: &MigrationSummary) -> fmt::Result {
    writeln!(out, "## Overview")?;
    writeln!(out)?;
    writeln!(out, "- Files Processed: {}", summary.total_files)?;
    writeln!(out, "- Successful Migrations: {}", summary.migrated_files)?;
    writeln!(out, "- Unchanged Files: {}", summary.unchanged_files)?;
    writeln!(out, "- Failed Files: {}", summary.failures.len())?;
    writeln!(out, "- Total Replacements: {}", summary.total_replacements)?;
    writeln!(out)
}

pub(super) fn batch_table(out: &mut String, results: &[MigrationResult]) -> fmt::Result {
    writeln!(out, "## Results")?;
    writeln!(out)?;
    writeln!(out, "| File | Status | Replacements | Patterns |")?;
    writeln!(out, "|---|---|---|---|")?;
    for r in results {
        let status = if !r.success {
            "failed"
        } else if r.replacements > 0 {
            "migrated"
        } else {
            "unchanged"
        };
        writeln!(
            out,
            "| `{}` | {} | {} | {} |",
            r.file.display(),
            status,
            r.replacements,
            if r.patterns.is_empty() {
                "-".to_string()
            } else {
                r.patterns.join(", ")
            }
        )?;
    }
    writeln!(out)
}

pub(super) fn batch_categories(out: &mut String, summary: &MigrationSummary) -> fmt::Result {
    writeln!(out, "## Patterns Applied")?;
    writeln!(out)?;
    if summary.category_counts.is_empty() {
        writeln!(out, "_No patterns applied._")?;
        return writeln!(out);
    }
    writeln!(out, "| Category | Replacements |")?;
    writeln!(out, "|---|---|")?;
    for (category, count) in &summary.category_counts {
        writeln!(out, "| {} | {} |", category, count)?;
    }
    writeln!(out)
}

pub(super) fn footer(out: &mut String) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", SUMMARY_SEPARATOR)?;
    writeln!(out, "_Generated by generate-docs v{}_", env!("CARGO_PKG_VERSION"))
}

fn method_label(method: Method) -> &'static str {
    match method {
        Method::Script => "Automated script",
        Method::Manual => "Manual",
    }
}

fn minutes_label(minutes: Option<f64>) -> String {
    match minutes {
        Some(m) => format!("{} min", fmt_minutes(m)),
        None => "not recorded".to_string(),
    }
}

/// Whole minutes print without a fraction, anything else with one decimal.
pub(super) fn fmt_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{:.0}", minutes)
    } else {
        format!("{:.1}", minutes)
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
