//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the errors that can
//! occur while walking, migrating, analyzing, or documenting files, offering
//! more context than generic I/O or `anyhow` errors.

use thiserror::Error;

/// Application-specific errors used throughout `tokenshift`.
#[derive(Error, Debug)]
pub enum Error {
    // --- Input Errors ---
    /// The supplied path does not exist, or is neither a regular file nor a directory.
    #[error("Invalid target '{path}': path does not exist or is not a file or directory")]
    InvalidTarget {
        /// The path as supplied by the user.
        path: String,
    },

    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The file content could not be decoded as UTF-8.
    #[error("File '{path}' is not valid UTF-8")]
    NonUtf8 {
        /// The offending file.
        path: String,
    },

    // --- Configuration Errors ---
    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A matcher from the pattern table or analyzer settings failed to compile.
    #[error("Invalid {kind} regex '{pattern}': {source}")]
    Regex {
        /// Which table or setting the regex belongs to.
        kind: String,
        /// The regex source.
        pattern: String,
        /// The underlying compile error.
        #[source]
        source: regex::Error,
    },

    // --- Data Errors ---
    /// A JSON input file (results or analysis export) failed to parse.
    #[error("Malformed JSON in '{path}': {source}")]
    MalformedJson {
        /// The input file.
        path: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Serialization of an export document failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for `tokenshift` library operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper function to create an `Error::MalformedJson` with path context.
pub fn json_error_with_path<P: AsRef<std::path::Path>>(
    source: serde_json::Error,
    path: P,
) -> Error {
    Error::MalformedJson {
        path: path.as_ref().display().to_string(),
        source,
    }
}
