//! Merge flat roster rows into one record per student.

pub mod merger;
pub mod pipeline;

pub use merger::{merge, MergeOptions, MergedRoster};
pub use pipeline::{derive_output_path, run, run_parsed, MergeReport, PipelineOptions};
