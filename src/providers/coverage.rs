//! Coverage provider input: the JSON report written by `coverage json`
//! after one instrumented run of the target's test suite.
//!
//! Shape: `{"files": {"<path>": {"executed_lines": [...], "missing_lines":
//! [...], "excluded_lines": [...]}}}`. Executable lines are the union of
//! executed and missing; excluded lines are not executable at all. Unknown
//! fields are ignored.

use crate::core::{CoverageArtifact, SourceUnitCoverage};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CoverageReport {
    #[serde(default)]
    files: HashMap<String, FileCoverage>,
}

#[derive(Debug, Deserialize)]
struct FileCoverage {
    #[serde(default)]
    executed_lines: Vec<usize>,
    #[serde(default)]
    missing_lines: Vec<usize>,
}

/// Load the coverage artifact of exactly one instrumented run.
pub fn load_coverage_artifact(path: &Path) -> Result<CoverageArtifact> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read coverage file: {}", path.display()))?;
    let report: CoverageReport = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse coverage file: {}", path.display()))?;

    let mut artifact = CoverageArtifact::default();
    for (file_path, file) in report.files {
        let executed: std::collections::BTreeSet<usize> =
            file.executed_lines.iter().copied().collect();
        let executable = executed
            .iter()
            .copied()
            .chain(file.missing_lines.iter().copied())
            .collect();

        artifact.units.insert(
            file_path,
            SourceUnitCoverage {
                executed_lines: executed,
                executable_lines: executable,
            },
        );
    }

    Ok(artifact)
}
