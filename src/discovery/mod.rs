//! Discovers candidate source files under a file or directory root.
use crate::config::ResolvedInput;
use crate::errors::Result;
use glob::Pattern;
use log::debug;
use std::path::PathBuf;

mod entry_processor;
mod walker;

use entry_processor::process_direntry;
use walker::build_walker;

/// Runtime options for the file walker, built from `WalkerSettings`.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    /// Lowercase extensions to include. Empty means every extension.
    pub extensions: Vec<String>,
    /// Directory names that are never descended into.
    pub exclude_dirs: Vec<String>,
    /// File-name globs that are skipped.
    pub exclude_globs: Vec<Pattern>,
    /// Maximum file size in bytes.
    pub max_size: Option<u128>,
}

/// Lists candidate files under `resolved`, in a stable order.
///
/// A directory root is walked depth-first with the entries of each directory
/// sorted by file name, so the same tree always yields the same sequence. A
/// file root yields exactly that file, regardless of extension and exclusion
/// filters, since the user named it explicitly.
///
/// # Errors
/// Returns an `Error::Io` only if the root itself cannot be read; unreadable
/// entries below it are logged and skipped.
///
/// # Examples
///
/// ```
/// use tokenshift::config::resolve_input;
/// use tokenshift::discovery::{discover_files, DiscoveryOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::write(temp.path().join("b.tsx"), "")?;
/// fs::write(temp.path().join("a.tsx"), "")?;
///
/// let resolved = resolve_input(temp.path().to_str().unwrap())?;
/// let files = discover_files(&resolved, &DiscoveryOptions::default())?;
/// let names: Vec<String> = files
///     .iter()
///     .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
///     .collect();
/// assert_eq!(names, vec!["a.tsx", "b.tsx"]);
/// # Ok(())
/// # }
/// ```
pub fn discover_files(resolved: &ResolvedInput, opts: &DiscoveryOptions) -> Result<Vec<PathBuf>> {
    if resolved.is_file {
        debug!("Input is a single file: {}", resolved.path.display());
        return Ok(vec![resolved.path.clone()]);
    }

    let walker = build_walker(resolved, opts);
    let files: Vec<PathBuf> = walker
        .filter_map(|entry_result| process_direntry(entry_result, opts))
        .collect();

    debug!(
        "Discovery complete under {}: {} files",
        resolved.path.display(),
        files.len()
    );
    Ok(files)
}
