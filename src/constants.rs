// src/constants.rs

/// Source file extensions walked by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

/// Directory names never descended into (build output, dependencies, tests).
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    "node_modules",
    ".next",
    ".git",
    "dist",
    "build",
    "out",
    "coverage",
    "__tests__",
    "__mocks__",
];

/// File-name globs skipped by default.
pub const DEFAULT_EXCLUDE_GLOBS: &[&str] = &["*.test.*", "*.spec.*", "*.stories.*", "*.d.ts"];

/// Directory names used to derive a component's category, checked in order.
pub const DEFAULT_COMPONENT_CATEGORIES: &[&str] = &[
    "ui",
    "layout",
    "forms",
    "sections",
    "templates",
    "editor",
    "preview",
    "dashboard",
    "auth",
    "data",
    "resume",
    "shared",
];

/// Component categories that are always treated as high risk.
pub const DEFAULT_HIGH_RISK_CATEGORIES: &[&str] = &["auth", "data", "resume"];

/// Category given to files outside every known directory.
pub const FALLBACK_CATEGORY: &str = "other";

// --- Analyzer heuristics ---

pub const DARK_CLASS_REGEX: &str = r"\bdark:[\w:/.\[\]#%-]+";
pub const ANIMATION_REGEX: &str =
    r"framer-motion|\bmotion\.\w+|\bAnimatePresence\b|\banimate-\w+|@keyframes|\buseSpring\b";
pub const VARIANT_REGEX: &str = r"\bvariants?\s*[=:]|\bcva\(";
pub const STATE_REGEX: &str = r"\buse(?:State|Reducer|Effect|Context)\s*\(|\bon[A-Z]\w*\s*=";
pub const CUSTOM_COLOR_REGEX: &str =
    r"#(?:[0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b|\brgba?\(|\bhsla?\(";

// --- Documentation ---

/// Directory receiving generated reports by default.
pub const DEFAULT_DOCS_DIR: &str = "docs/migrations";

/// Minutes a manual migration of one component is assumed to take.
pub const MANUAL_BASELINE_MINUTES: f64 = 30.0;

/// Separator used before summary sections.
pub const SUMMARY_SEPARATOR: &str = "---";
