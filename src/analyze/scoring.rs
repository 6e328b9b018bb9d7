// src/analyze/scoring.rs

use crate::config::ScoringSettings;
use crate::core_types::{Complexity, Risk};

/// Secondary heuristics detected in a file's text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Signals {
    pub animations: bool,
    pub variants: bool,
    pub state: bool,
    pub custom_colors: bool,
}

/// Scores a file and maps the score to a tier.
///
/// A file without any distinct `dark:` occurrence is always simple.
pub(crate) fn complexity(distinct: usize, signals: Signals, s: &ScoringSettings) -> Complexity {
    if distinct == 0 {
        return Complexity::Simple;
    }
    let mut score = if distinct <= s.small_tier_max {
        s.small_tier_points
    } else if distinct <= s.medium_tier_max {
        s.medium_tier_points
    } else {
        s.large_tier_points
    };
    if signals.animations {
        score += s.animation_points;
    }
    if signals.variants {
        score += s.variant_points;
    }
    if signals.state {
        score += s.state_points;
    }
    if signals.custom_colors {
        score += s.custom_color_points;
    }

    if score <= s.simple_max {
        Complexity::Simple
    } else if score <= s.medium_max {
        Complexity::Medium
    } else {
        Complexity::Complex
    }
}

pub(crate) fn risk(high_risk_category: bool, complexity: Complexity, signals: Signals) -> Risk {
    if high_risk_category {
        return Risk::High;
    }
    match complexity {
        Complexity::Complex => Risk::High,
        _ if signals.animations && signals.state => Risk::High,
        Complexity::Medium => Risk::Medium,
        _ if signals.animations || signals.state => Risk::Medium,
        _ => Risk::Low,
    }
}

/// Inputs of the automation-readiness rule chain.
pub(crate) struct ReadinessInput<'a> {
    pub occurrences: usize,
    pub signals: Signals,
    pub complexity: Complexity,
    /// Estimated pattern categories that are not considered safe.
    pub unsafe_patterns: &'a [&'a str],
    pub manual_review_threshold: usize,
}

/// Evaluates the readiness rules top to bottom; the first disqualifying rule wins.
pub(crate) fn readiness(input: &ReadinessInput<'_>) -> (bool, Vec<String>) {
    if input.occurrences == 0 {
        return (
            false,
            vec!["No dark: classes found; nothing to migrate or already migrated".to_string()],
        );
    }
    if input.signals.custom_colors {
        return (
            false,
            vec!["Inline literal colors found; needs manual review".to_string()],
        );
    }
    if input.occurrences > input.manual_review_threshold && input.signals.variants {
        return (
            false,
            vec![format!(
                "{} dark: classes combined with variants; needs manual review",
                input.occurrences
            )],
        );
    }
    if !input.unsafe_patterns.is_empty() {
        return (
            false,
            vec![format!(
                "Uses {} dark: classes without a safe token mapping; needs manual review",
                input.unsafe_patterns.join(", ")
            )],
        );
    }
    let notes = match input.complexity {
        Complexity::Simple => Vec::new(),
        Complexity::Medium => vec!["Medium complexity; verify carefully after migration".to_string()],
        Complexity::Complex => vec!["Complex component; review the diff before committing".to_string()],
    };
    (true, notes)
}
