// src/output/mod.rs

//! Console reports and JSON exports.
//!
//! Everything here writes to a caller-supplied `Write`, so the binaries print
//! to stdout while tests capture into a buffer.

pub mod formatter;
pub mod report;
pub mod summary;
pub mod writer;

pub use report::write_analysis_report;
pub use summary::{write_file_line, write_migration_summary};
pub use writer::write_json_export;
