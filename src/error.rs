//! Error types for the trip reporting engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the failures that can reach report construction: lookups against the
//! data-access layer, and loading configuration or datasets from disk.

use thiserror::Error;

/// The main error type for the trip reporting engine.
///
/// # Example
///
/// ```
/// use trip_reports::error::ReportError;
///
/// let error = ReportError::EmployeeNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// The requested employee does not exist.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: u32,
    },

    /// The underlying fetch from a data source failed.
    #[error("Failed to fetch from {source_name}: {message}")]
    FetchFailed {
        /// Name of the data source that failed (e.g. "employees").
        source_name: String,
        /// A description of the failure.
        message: String,
    },

    /// Configuration or dataset file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration or dataset file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A dataset parsed but its records do not fit together.
    #[error("Invalid dataset: {message}")]
    InvalidDataset {
        /// A description of what made the dataset invalid.
        message: String,
    },
}

impl ReportError {
    /// Returns true if this error is a lookup failure against the data-access layer.
    ///
    /// Lookup failures are the errors the reporting service absorbs into
    /// empty results; configuration errors are not.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            ReportError::EmployeeNotFound { .. } | ReportError::FetchFailed { .. }
        )
    }
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
