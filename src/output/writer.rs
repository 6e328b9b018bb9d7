// src/output/writer.rs

//! Writes JSON export documents to disk.

use crate::errors::{io_error_with_path, Result};
use log::debug;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes `value` as pretty-printed JSON to `path`, creating parent
/// directories as needed.
///
/// # Errors
/// `Error::Io` for filesystem failures, `Error::Json` if serialization fails.
pub fn write_json_export<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error_with_path(e, parent))?;
    }
    let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| io_error_with_path(e, path))?;
    debug!("Exported JSON to {}", path.display());
    Ok(())
}
