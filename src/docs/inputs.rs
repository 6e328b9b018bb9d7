// src/docs/inputs.rs

//! Loading of the JSON documents produced by the other two tools.

use crate::core_types::{AnalysisReport, ComponentAnalysis, MigrationResult};
use crate::errors::{io_error_with_path, json_error_with_path, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A results file is either a bare array or an object wrapping one.
#[derive(Deserialize)]
#[serde(untagged)]
enum ResultsDocument {
    List(Vec<MigrationResult>),
    Wrapped { results: Vec<MigrationResult> },
}

/// Loads migration results written by `migrate-colors --export`.
///
/// # Errors
/// `Error::Io` if the file cannot be read, `Error::MalformedJson` if it is not
/// a results array (or an object with a `results` array).
pub fn load_results(path: &Path) -> Result<Vec<MigrationResult>> {
    Ok(match read_json::<ResultsDocument>(path)? {
        ResultsDocument::List(results) => results,
        ResultsDocument::Wrapped { results } => results,
    })
}

/// Loads an analysis report written by `analyze-components --export`.
pub fn load_analysis(path: &Path) -> Result<AnalysisReport> {
    read_json(path)
}

/// The result recorded for `file`, if any.
pub fn find_result<'a>(results: &'a [MigrationResult], file: &Path) -> Option<&'a MigrationResult> {
    results.iter().find(|r| same_file(&r.file, file))
}

/// The analysis recorded for `file`, if any.
pub fn find_analysis<'a>(report: &'a AnalysisReport, file: &Path) -> Option<&'a ComponentAnalysis> {
    report
        .components
        .iter()
        .find(|c| same_file(&c.file_path, file))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
    serde_json::from_str(&text).map_err(|e| json_error_with_path(e, path))
}

fn same_file(recorded: &Path, file: &Path) -> bool {
    if recorded == file {
        return true;
    }
    match (recorded.canonicalize(), file.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
