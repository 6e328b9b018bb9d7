// src/filtering/file_type.rs

use std::fs::Metadata;

/// Checks if the metadata belongs to a regular file.
#[inline]
pub fn is_file_type(metadata: &Metadata) -> bool {
    metadata.is_file()
}
