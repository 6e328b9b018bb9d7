//! Shared per-file processing helpers for the migrator and the analyzer.
//!
//! Both tools read one file at a time, in walker order, on the calling thread.

use crate::progress::ProgressReporter;
use std::path::{Path, PathBuf};

mod content_reader;

pub use content_reader::read_source;

/// Runs `op` over `files` in order and collects its outputs, driving the
/// optional progress reporter.
pub fn process_sequentially<T>(
    files: &[PathBuf],
    progress: Option<&dyn ProgressReporter>,
    mut op: impl FnMut(&Path) -> T,
) -> Vec<T> {
    if let Some(p) = progress {
        p.set_length(files.len() as u64);
    }
    let mut out = Vec::with_capacity(files.len());
    for (i, path) in files.iter().enumerate() {
        if let Some(p) = progress {
            p.set_message(
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
        }
        out.push(op(path));
        if let Some(p) = progress {
            p.set_position(i as u64 + 1);
        }
    }
    if let Some(p) = progress {
        p.finish();
    }
    out
}
