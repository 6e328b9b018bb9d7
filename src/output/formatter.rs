// src/output/formatter.rs

//! Provides helper functions for formatting parts of the console reports.

use std::path::Path;

/// Formats a path for display, relative to `base` when it lies below it.
///
/// Path separators are always shown as `/`.
///
/// # Examples
/// ```
/// use tokenshift::output::formatter::format_path_for_display;
/// use std::path::Path;
///
/// let base = Path::new("/repo");
/// assert_eq!(
///     format_path_for_display(Path::new("/repo/components/ui/Card.tsx"), base),
///     "components/ui/Card.tsx"
/// );
/// assert_eq!(format_path_for_display(Path::new("/elsewhere/x.tsx"), base), "/elsewhere/x.tsx");
/// ```
pub fn format_path_for_display(path: &Path, base: &Path) -> String {
    let shown = match path.strip_prefix(base) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel,
        _ => path,
    };
    shown.to_string_lossy().replace('\\', "/")
}
