//! Metrics provider input: a JSON array of per-function static attributes.

use crate::core::{FunctionId, FunctionRecord};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Wire format of one metrics row, as emitted by the extractor.
#[derive(Debug, Deserialize)]
struct FunctionRecordRow {
    module_path: String,
    qualified_name: String,
    start_line: usize,
    end_line: usize,
    cyclomatic_complexity: u32,
    loc: usize,
    nesting_depth: u32,
    dependency_count: usize,
}

impl From<FunctionRecordRow> for FunctionRecord {
    fn from(row: FunctionRecordRow) -> Self {
        FunctionRecord {
            id: FunctionId::new(row.module_path, row.qualified_name),
            start_line: row.start_line,
            end_line: row.end_line,
            cyclomatic_complexity: row.cyclomatic_complexity,
            loc: row.loc,
            nesting_depth: row.nesting_depth,
            dependency_count: row.dependency_count,
        }
    }
}

/// Load function metrics from a JSON file. Only unparseable input is fatal
/// here; range anomalies are the mapper's job to resolve.
pub fn load_function_metrics(path: &Path) -> Result<Vec<FunctionRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read metrics file: {}", path.display()))?;
    let rows: Vec<FunctionRecordRow> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse metrics file: {}", path.display()))?;

    Ok(rows.into_iter().map(FunctionRecord::from).collect())
}
