// src/output/report.rs

use crate::constants;
use crate::core_types::AnalysisSummary;
use anyhow::Result;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// Writes the human-readable component analysis report.
pub fn write_analysis_report(writer: &mut dyn Write, summary: &AnalysisSummary) -> Result<()> {
    writeln!(writer, "Component analysis")?;
    writeln!(writer, "{}", constants::SUMMARY_SEPARATOR)?;
    writeln!(writer, "Files analyzed: {}", summary.total_files)?;
    writeln!(writer, "Files with dark: classes: {}", summary.files_with_dark_classes)?;
    writeln!(writer, "Total dark: classes: {}", summary.total_dark_classes)?;
    writeln!(writer, "Automation ready: {}", summary.automation_ready)?;

    write_counts(writer, "By category", &summary.categories)?;

    writeln!(writer)?;
    writeln!(writer, "Complexity:")?;
    writeln!(writer, "  simple: {}", summary.complexity.simple)?;
    writeln!(writer, "  medium: {}", summary.complexity.medium)?;
    writeln!(writer, "  complex: {}", summary.complexity.complex)?;

    writeln!(writer)?;
    writeln!(writer, "Risk:")?;
    writeln!(writer, "  low: {}", summary.risk.low)?;
    writeln!(writer, "  medium: {}", summary.risk.medium)?;
    writeln!(writer, "  high: {}", summary.risk.high)?;

    write_counts(writer, "Estimated patterns", &summary.pattern_usage)?;

    writeln!(writer)?;
    writeln!(writer, "Top automation candidates ({}):", summary.top_candidates.len())?;
    if summary.top_candidates.is_empty() {
        writeln!(writer, "  none")?;
    }
    for (i, c) in summary.top_candidates.iter().enumerate() {
        writeln!(
            writer,
            "  {}. {} ({}, {} dark: classes)",
            i + 1,
            display(&c.relative_path),
            c.category,
            c.match_count
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "Needs manual review ({}):", summary.manual_review.len())?;
    if summary.manual_review.is_empty() {
        writeln!(writer, "  none")?;
    }
    for item in &summary.manual_review {
        writeln!(
            writer,
            "  - {} [{}, {} risk, {} dark: classes]",
            display(&item.relative_path),
            item.complexity,
            item.risk,
            item.match_count
        )?;
        for note in &item.notes {
            writeln!(writer, "      {}", note)?;
        }
    }
    Ok(())
}

fn write_counts(writer: &mut dyn Write, title: &str, counts: &BTreeMap<String, usize>) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}:", title)?;
    if counts.is_empty() {
        writeln!(writer, "  none")?;
    }
    for (name, count) in counts {
        writeln!(writer, "  {}: {}", name, count)?;
    }
    Ok(())
}

fn display(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{Candidate, Complexity, ManualItem, Risk};
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn test_report_sections() -> Result<()> {
        let mut summary = AnalysisSummary {
            total_files: 3,
            files_with_dark_classes: 2,
            total_dark_classes: 14,
            automation_ready: 1,
            ..Default::default()
        };
        summary.categories.insert("ui".to_string(), 3);
        summary.complexity.record(Complexity::Simple);
        summary.risk.record(Risk::High);
        summary.top_candidates.push(Candidate {
            relative_path: PathBuf::from("components/ui/Card.tsx"),
            category: "ui".to_string(),
            match_count: 2,
        });
        summary.manual_review.push(ManualItem {
            relative_path: PathBuf::from("components/ui/Modal.tsx"),
            complexity: Complexity::Complex,
            risk: Risk::High,
            match_count: 12,
            notes: vec!["Inline literal colors found; needs manual review".to_string()],
        });

        let mut writer = Cursor::new(Vec::new());
        write_analysis_report(&mut writer, &summary)?;
        let output = String::from_utf8(writer.into_inner())?;

        assert!(output.starts_with("Component analysis\n---\nFiles analyzed: 3\n"));
        assert!(output.contains("Total dark: classes: 14\n"));
        assert!(output.contains("By category:\n  ui: 3\n"));
        assert!(output.contains("Estimated patterns:\n  none\n"));
        assert!(output.contains("  1. components/ui/Card.tsx (ui, 2 dark: classes)\n"));
        assert!(output.contains("  - components/ui/Modal.tsx [complex, high risk, 12 dark: classes]\n"));
        assert!(output.ends_with("      Inline literal colors found; needs manual review\n"));
        Ok(())
    }
}
