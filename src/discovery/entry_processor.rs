// src/discovery/entry_processor.rs

use super::DiscoveryOptions;
use crate::filtering::{
    is_excluded_name, is_file_type, passes_extension_filter, passes_size_filter,
};
use ignore::DirEntry;
use log::{debug, trace, warn};
use std::path::PathBuf;

/// Processes a single directory entry from the walk.
///
/// Returns `Some(path)` if the entry is a regular file that passes the
/// extension, exclusion and size filters, `None` otherwise. Walker and
/// metadata errors are logged and the entry is skipped.
pub(super) fn process_direntry(
    entry_result: Result<DirEntry, ignore::Error>,
    opts: &DiscoveryOptions,
) -> Option<PathBuf> {
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(ignore_error) => {
            warn!("Walker error: {}", ignore_error);
            return None;
        }
    };

    let path = entry.path();
    trace!("Processing entry: {}", path.display());

    let metadata = match entry.metadata() {
        Ok(md) => md,
        Err(e) => {
            warn!(
                "Skipping entry '{}' due to metadata error: {}",
                path.display(),
                e
            );
            return None;
        }
    };

    if !is_file_type(&metadata) {
        trace!("Skipping non-file entry: {}", path.display());
        return None;
    }

    if !passes_extension_filter(path, &opts.extensions) {
        trace!("Skipping file with non-source extension: {}", path.display());
        return None;
    }

    if is_excluded_name(path, &opts.exclude_globs) {
        debug!("Skipping excluded file: {}", path.display());
        return None;
    }

    if !passes_size_filter(&metadata, opts.max_size) {
        debug!(
            "Skipping file due to size constraint: {} (Size: {} bytes)",
            path.display(),
            metadata.len()
        );
        return None;
    }

    Some(path.to_path_buf())
}
