//! High-level pipeline: read, merge, render, write.
//!
//! The pipeline never prints. It returns a [`MergeReport`] on success and
//! a [`PipelineError`] on failure; the caller decides how to present
//! either. The output file is written in one shot only after the whole
//! in-memory transformation succeeded, so a failed run leaves no partial
//! file behind.
//!
//! # Example
//!
//! ```rust,ignore
//! use rostermerge::{run, PipelineOptions};
//! use std::path::Path;
//!
//! let report = run(Path::new("roster.csv"), &PipelineOptions::default())?;
//! println!("{}", report.summary());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PipelineResult;
use crate::merge::merger::{merge, MergeOptions};
use crate::parser::{parse_roster_file, ParsedRoster};
use crate::writer::render_csv;

/// Options for the full pipeline.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Explicit output path. Defaults to the input path with `_updated`
    /// appended before the extension.
    pub output: Option<PathBuf>,

    /// Explicit CSV delimiter. Auto-detected when unset.
    pub delimiter: Option<u8>,

    /// Merge algorithm options.
    pub merge: MergeOptions,
}

/// Result of a successful pipeline run.
#[derive(Debug, Clone)]
pub struct MergeReport {
    /// Where the merged roster was written.
    pub output_path: PathBuf,
    /// Input rows scanned.
    pub input_rows: usize,
    /// Distinct students in the output.
    pub students: usize,
    /// Guardian column groups in the output schema.
    pub guardian_slots: usize,
}

impl MergeReport {
    /// The human-readable success line for the presentation layer.
    pub fn summary(&self) -> String {
        format!(
            "The updated CSV file has been saved to {}.",
            self.output_path.display()
        )
    }
}

/// Run the full pipeline against a roster file.
pub fn run(input: &Path, options: &PipelineOptions) -> PipelineResult<MergeReport> {
    let parsed = parse_roster_file(input, options.delimiter)?;
    run_parsed(parsed, input, options)
}

/// Run the merge and write steps on an already-parsed roster.
///
/// `input` is only used to derive the default output path.
pub fn run_parsed(
    parsed: ParsedRoster,
    input: &Path,
    options: &PipelineOptions,
) -> PipelineResult<MergeReport> {
    let input_rows = parsed.records.len();
    let roster = merge(&parsed.records, &options.merge)?;
    let bytes = render_csv(&roster)?;

    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(input));
    fs::write(&output_path, bytes)?;

    Ok(MergeReport {
        output_path,
        input_rows,
        students: roster.students.len(),
        guardian_slots: roster.guardian_slots,
    })
}

/// `roster.csv` → `roster_updated.csv`, keeping the directory.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("roster");
    input.with_file_name(format!("{stem}_updated.csv"))
}
