//! Compiled-in default pattern table.
//!
//! Every matcher requires a `dark:` class, and no replacement contains one, so
//! migrated text is never matched again.

use super::{HeuristicSpec, PatternSpec};

pub const SURFACE: &str = "surface";
pub const BORDER: &str = "border";
pub const TEXT: &str = "text";

/// (category, matcher, replacement), in application order.
const PATTERNS: &[(&str, &str, &str)] = &[
    // --- surface ---
    (SURFACE, r"\bbg-white\s+dark:bg-gray-(?:800|900)\b", "bg-surface"),
    (SURFACE, r"\bdark:bg-gray-(?:800|900)\s+bg-white\b", "bg-surface"),
    (SURFACE, r"\bbg-gray-50\s+dark:bg-gray-(?:800|900|950)\b", "bg-surface-muted"),
    (SURFACE, r"\bdark:bg-gray-(?:800|900|950)\s+bg-gray-50\b", "bg-surface-muted"),
    (SURFACE, r"\bbg-gray-100\s+dark:bg-gray-(?:700|800)\b", "bg-surface-subtle"),
    (SURFACE, r"\bdark:bg-gray-(?:700|800)\s+bg-gray-100\b", "bg-surface-subtle"),
    (
        SURFACE,
        r"\bhover:bg-gray-100\s+dark:hover:bg-gray-(?:700|800)\b",
        "hover:bg-surface-hover",
    ),
    (
        SURFACE,
        r"\bdark:hover:bg-gray-(?:700|800)\s+hover:bg-gray-100\b",
        "hover:bg-surface-hover",
    ),
    // --- border ---
    (BORDER, r"\bborder-gray-200\s+dark:border-gray-(?:700|800)\b", "border-border"),
    (BORDER, r"\bdark:border-gray-(?:700|800)\s+border-gray-200\b", "border-border"),
    (BORDER, r"\bborder-gray-300\s+dark:border-gray-600\b", "border-border-strong"),
    (BORDER, r"\bdark:border-gray-600\s+border-gray-300\b", "border-border-strong"),
    (BORDER, r"\bdivide-gray-200\s+dark:divide-gray-700\b", "divide-border"),
    (BORDER, r"\bdark:divide-gray-700\s+divide-gray-200\b", "divide-border"),
    // --- text ---
    (TEXT, r"\btext-gray-900\s+dark:text-(?:white|gray-100)\b", "text-foreground"),
    (TEXT, r"\bdark:text-(?:white|gray-100)\s+text-gray-900\b", "text-foreground"),
    (TEXT, r"\btext-gray-700\s+dark:text-gray-300\b", "text-foreground-secondary"),
    (TEXT, r"\bdark:text-gray-300\s+text-gray-700\b", "text-foreground-secondary"),
    (TEXT, r"\btext-gray-(?:500|600)\s+dark:text-gray-400\b", "text-muted-foreground"),
    (TEXT, r"\bdark:text-gray-400\s+text-gray-(?:500|600)\b", "text-muted-foreground"),
];

/// (category, matcher) tested against a single `dark:` occurrence.
const HEURISTICS: &[(&str, &str)] = &[
    (SURFACE, r"^dark:(?:[a-z-]+:)*bg-"),
    (BORDER, r"^dark:(?:[a-z-]+:)*(?:border|divide|ring)(?:-|$)"),
    (TEXT, r"^dark:(?:[a-z-]+:)*text-"),
    ("gradient", r"^dark:(?:[a-z-]+:)*(?:from|via|to)-"),
    ("shadow", r"^dark:(?:[a-z-]+:)*shadow"),
    ("fill", r"^dark:(?:[a-z-]+:)*(?:fill|stroke)-"),
    ("placeholder", r"^dark:(?:[a-z-]+:)*placeholder-"),
];

/// Categories whose replacements are considered safe for unattended migration.
pub const SAFE_CATEGORIES: &[&str] = &[SURFACE, BORDER, TEXT];

pub fn default_patterns() -> Vec<PatternSpec> {
    PATTERNS
        .iter()
        .map(|&(category, matcher, replacement)| PatternSpec {
            category: category.to_string(),
            matcher: matcher.to_string(),
            replacement: replacement.to_string(),
        })
        .collect()
}

pub fn default_heuristics() -> Vec<HeuristicSpec> {
    HEURISTICS
        .iter()
        .map(|&(category, matcher)| HeuristicSpec {
            category: category.to_string(),
            matcher: matcher.to_string(),
        })
        .collect()
}
