// src/filtering/extension.rs

use std::path::Path;

/// Checks if a path's extension is one of the allowed source extensions.
///
/// The comparison is case-insensitive; `allowed` is expected in lowercase.
/// An empty `allowed` list accepts every file.
///
/// # Examples
///
/// ```
/// use tokenshift::filtering::passes_extension_filter;
/// use std::path::Path;
///
/// let allowed = vec!["tsx".to_string(), "ts".to_string()];
/// assert!(passes_extension_filter(Path::new("components/Card.tsx"), &allowed));
/// assert!(passes_extension_filter(Path::new("lib/UTILS.TS"), &allowed));
/// assert!(!passes_extension_filter(Path::new("styles/globals.css"), &allowed));
/// assert!(!passes_extension_filter(Path::new("Makefile"), &allowed));
/// ```
pub fn passes_extension_filter(path: &Path, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|os_str| os_str.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            allowed.iter().any(|a| *a == ext)
        })
        .unwrap_or(false)
}
