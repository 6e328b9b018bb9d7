// src/filtering/mod.rs

//! Provides standalone functions for file filtering logic.
//!
//! These functions are used by the discovery stage to decide which walked
//! entries are candidate source files.

mod exclusion;
mod extension;
mod file_type;
mod size;

pub use exclusion::{compile_exclude_globs, is_excluded_name};
pub use extension::passes_extension_filter;
pub use file_type::is_file_type;
pub use size::passes_size_filter;
