//! # Rostermerge - consolidate guardian rows in student roster exports
//!
//! SIS roster exports list one row per (student, guardian) pairing, so a
//! student with several contacts appears on several rows. Rostermerge
//! collapses those rows into one record per student with numbered
//! guardian columns, padded to the widest student in the batch.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Roster CSV │────▶│   Parser    │────▶│    Merge    │────▶│ Updated CSV │
//! │ (flat rows) │     │ (auto-enc)  │     │ (by email)  │     │ (Guardian N)│
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rostermerge::{run, PipelineOptions};
//! use std::path::Path;
//!
//! fn main() {
//!     let report = run(Path::new("roster.csv"), &PipelineOptions::default()).unwrap();
//!     println!("{}", report.summary());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (RosterRow, Guardian, MergedStudent)
//! - [`parser`] - CSV parsing with auto-detection
//! - [`merge`] - Merge algorithm and pipeline
//! - [`writer`] - Output CSV rendering
//! - [`sample`] - Demo roster generator

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Merging
pub mod merge;

// Output
pub mod writer;

// Demo data
pub mod sample;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    MergeError, MergeResult, ParseError, ParseResult, PipelineError, PipelineResult, WriteError,
    WriteResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Guardian, MergedStudent, RosterRow, INPUT_COLUMNS, STUDENT_COLUMNS};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    decode_bytes, detect_delimiter, detect_encoding, parse_roster_bytes, parse_roster_file,
    ParsedRoster,
};

// =============================================================================
// Re-exports - Merge
// =============================================================================

pub use merge::{
    derive_output_path, merge, run, run_parsed, MergeOptions, MergeReport, MergedRoster,
    PipelineOptions,
};

// =============================================================================
// Re-exports - Output
// =============================================================================

pub use writer::render_csv;

// =============================================================================
// Re-exports - Demo data
// =============================================================================

pub use sample::{dummy_rows, write_dummy_roster};
