//! Error taxonomy for the analysis pipeline.
//!
//! Only `Configuration` is fail-fast. Data-quality problems (missing
//! coverage, malformed ranges) are recovered locally and annotated in the
//! report; inference failures are surfaced per function without failing the
//! run.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RiskmapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no coverage data for source unit {unit}")]
    MissingCoverageData { unit: String },

    #[error(
        "malformed function range in {unit}: {first} [{first_start}, {first_end}) \
         overlaps {second} [{second_start}, {second_end}) without nesting"
    )]
    MalformedFunctionRange {
        unit: String,
        first: String,
        first_start: usize,
        first_end: usize,
        second: String,
        second_start: usize,
        second_end: usize,
    },

    #[error("model inference failure for {function}: {reason}")]
    ModelInferenceFailure { function: String, reason: String },

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

pub type RiskmapResult<T> = Result<T, RiskmapError>;
