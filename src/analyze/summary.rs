// src/analyze/summary.rs

use crate::core_types::{
    AnalysisSummary, Candidate, Complexity, ComponentAnalysis, ManualItem, Risk,
};

/// Aggregates per-file analyses into a run summary.
///
/// Candidates are ready, simple and low-risk files, easiest first (fewest
/// occurrences, then path). Files with at least one occurrence that are not
/// ready or are high risk go to the manual list, in walker order.
pub fn summarize(components: &[ComponentAnalysis], top: usize) -> AnalysisSummary {
    let mut summary = AnalysisSummary {
        total_files: components.len(),
        ..Default::default()
    };

    for c in components {
        let matches = c.match_count();
        if matches > 0 {
            summary.files_with_dark_classes += 1;
        }
        summary.total_dark_classes += matches;
        if c.automation_ready {
            summary.automation_ready += 1;
        }
        *summary.categories.entry(c.category.clone()).or_insert(0) += 1;
        summary.complexity.record(c.complexity);
        summary.risk.record(c.risk);
        for pattern in &c.estimated_patterns {
            *summary.pattern_usage.entry(pattern.clone()).or_insert(0) += 1;
        }

        if matches > 0 && (!c.automation_ready || c.risk == Risk::High) {
            summary.manual_review.push(ManualItem {
                relative_path: c.relative_path.clone(),
                complexity: c.complexity,
                risk: c.risk,
                match_count: matches,
                notes: c.notes.clone(),
            });
        }
    }

    let mut candidates: Vec<&ComponentAnalysis> = components
        .iter()
        .filter(|c| c.automation_ready && c.complexity == Complexity::Simple && c.risk == Risk::Low)
        .collect();
    candidates.sort_by(|a, b| {
        a.match_count()
            .cmp(&b.match_count())
            .then_with(|| a.relative_path.cmp(&b.relative_path))
    });
    summary.top_candidates = candidates
        .into_iter()
        .take(top)
        .map(|c| Candidate {
            relative_path: c.relative_path.clone(),
            category: c.category.clone(),
            match_count: c.match_count(),
        })
        .collect();

    summary
}
