// src/output/summary.rs

use crate::constants;
use crate::core_types::{MigrationResult, MigrationSummary};
use crate::output::formatter::format_path_for_display;
use anyhow::Result;
use log::debug;
use std::io::Write;
use std::path::Path;

/// Writes one line describing a processed file (used in verbose mode).
pub fn write_file_line(writer: &mut dyn Write, result: &MigrationResult, base: &Path) -> Result<()> {
    let path_str = format_path_for_display(&result.file, base);
    if !result.success {
        writeln!(
            writer,
            "  FAILED {}: {}",
            path_str,
            result.error.as_deref().unwrap_or("unknown error")
        )?;
    } else if result.replacements > 0 {
        writeln!(
            writer,
            "  {} {}: {} replacement(s) [{}]{}",
            if result.written { "migrated" } else { "would migrate" },
            path_str,
            result.replacements,
            result.patterns.join(", "),
            if result.import_added { " +import" } else { "" }
        )?;
    } else {
        writeln!(writer, "  unchanged {}", path_str)?;
    }
    Ok(())
}

/// Writes the end-of-run summary of a migration.
pub fn write_migration_summary(
    writer: &mut dyn Write,
    summary: &MigrationSummary,
    base: &Path,
) -> Result<()> {
    debug!("Writing migration summary for {} files...", summary.total_files);
    writeln!(writer, "{}", constants::SUMMARY_SEPARATOR)?;
    if summary.dry_run {
        writeln!(writer, "Color migration summary (dry run, no files written)")?;
    } else {
        writeln!(writer, "Color migration summary")?;
    }
    writeln!(writer, "Files processed: {}", summary.total_files)?;
    writeln!(writer, "Successful migrations: {}", summary.migrated_files)?;
    writeln!(writer, "Unchanged files: {}", summary.unchanged_files)?;
    writeln!(writer, "Failed files: {}", summary.failures.len())?;
    writeln!(writer, "Total replacements: {}", summary.total_replacements)?;

    if !summary.category_counts.is_empty() {
        writeln!(writer, "Replacements by category:")?;
        for (category, count) in &summary.category_counts {
            writeln!(writer, "  {}: {}", category, count)?;
        }
    }
    if summary.has_failures() {
        writeln!(writer, "Failures:")?;
        for failure in &summary.failures {
            writeln!(
                writer,
                "  {}: {}",
                format_path_for_display(&failure.file, base),
                failure.error
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn migrated(path: &str, category: &str, n: usize, written: bool) -> MigrationResult {
        MigrationResult {
            file: PathBuf::from("/base").join(path),
            success: true,
            replacements: n,
            patterns: vec![category.to_string()],
            pattern_counts: BTreeMap::from([(category.to_string(), n)]),
            written,
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_dry_run() -> Result<()> {
        let results = vec![
            migrated("a.tsx", "surface", 2, false),
            MigrationResult {
                file: PathBuf::from("/base/b.tsx"),
                success: true,
                ..Default::default()
            },
            migrated("c.tsx", "text", 1, false),
        ];
        let summary = MigrationSummary::from_results(&results, true);
        let mut writer = Cursor::new(Vec::new());
        write_migration_summary(&mut writer, &summary, Path::new("/base"))?;

        let output = String::from_utf8(writer.into_inner())?;
        let expected = "---\nColor migration summary (dry run, no files written)\n\
Files processed: 3\nSuccessful migrations: 2\nUnchanged files: 1\nFailed files: 0\n\
Total replacements: 3\nReplacements by category:\n  surface: 2\n  text: 1\n";
        assert_eq!(output, expected);
        Ok(())
    }

    #[test]
    fn test_summary_lists_failures() -> Result<()> {
        let results = vec![MigrationResult::failure(
            PathBuf::from("/base/src/Locked.tsx"),
            "Permission denied",
        )];
        let summary = MigrationSummary::from_results(&results, false);
        let mut writer = Cursor::new(Vec::new());
        write_migration_summary(&mut writer, &summary, Path::new("/base"))?;

        let output = String::from_utf8(writer.into_inner())?;
        assert!(output.starts_with("---\nColor migration summary\n"));
        assert!(output.contains("Failed files: 1\n"));
        assert!(output.ends_with("Failures:\n  src/Locked.tsx: Permission denied\n"));
        Ok(())
    }

    #[test]
    fn test_file_lines() -> Result<()> {
        let base = Path::new("/base");
        let mut writer = Cursor::new(Vec::new());
        write_file_line(&mut writer, &migrated("a.tsx", "border", 2, true), base)?;
        write_file_line(&mut writer, &migrated("b.tsx", "text", 1, false), base)?;
        write_file_line(
            &mut writer,
            &MigrationResult::failure(PathBuf::from("/base/c.tsx"), "boom"),
            base,
        )?;

        let output = String::from_utf8(writer.into_inner())?;
        assert_eq!(
            output,
            "  migrated a.tsx: 2 replacement(s) [border]\n  would migrate b.tsx: 1 replacement(s) [text]\n  FAILED c.tsx: boom\n"
        );
        Ok(())
    }
}
