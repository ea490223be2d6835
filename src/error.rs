//! Error types for the roster merge pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`ParseError`] - CSV reading and schema errors
//! - [`MergeError`] - merge algorithm errors
//! - [`WriteError`] - output rendering errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Parse Errors
// =============================================================================

/// Errors while reading the input roster.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid CSV content.
    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Zero-length or header-less file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// A required input column is missing from the header row.
    #[error("Missing expected column: {column}")]
    Schema { column: String },
}

// =============================================================================
// Merge Errors
// =============================================================================

/// Errors from the merge algorithm.
#[derive(Debug, Error)]
pub enum MergeError {
    /// A birthdate value did not match the expected input format.
    #[error("Row {row}: invalid birthdate '{value}' (expected MM/DD/YYYY)")]
    BirthdateFormat { value: String, row: usize },

    /// No student rows survived the scan, so no output schema can be derived.
    #[error("No student rows to merge")]
    EmptyInput,
}

// =============================================================================
// Write Errors
// =============================================================================

/// Errors while rendering or writing the output CSV.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write output bytes.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding failed.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by [`crate::merge::pipeline::run`].
/// It wraps all lower-level errors; its `Display` output is the single
/// descriptive message the presentation layer shows.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input reading error.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Merge error.
    #[error("Merge error: {0}")]
    Merge(#[from] MergeError),

    /// Output rendering error.
    #[error("Output error: {0}")]
    Write(#[from] WriteError),

    /// Filesystem error outside parse/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;

/// Result type for output operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
