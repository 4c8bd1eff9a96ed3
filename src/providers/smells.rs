//! Smell predictor output: a JSON array of per-function verdicts.

use crate::core::{FunctionId, SmellPrediction};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SmellPredictionRow {
    module_path: String,
    qualified_name: String,
    smell_label: bool,
    confidence: f64,
}

/// Load smell predictions from a JSON file.
///
/// Domain problems inside individual rows (confidence outside [0, 1]) are
/// NOT rejected here: the pipeline surfaces them per function as inference
/// failures so one bad row cannot sink the run.
pub fn load_smell_predictions(path: &Path) -> Result<Vec<SmellPrediction>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read predictions file: {}", path.display()))?;
    let rows: Vec<SmellPredictionRow> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse predictions file: {}", path.display()))?;

    Ok(rows
        .into_iter()
        .map(|row| SmellPrediction {
            id: FunctionId::new(row.module_path, row.qualified_name),
            smell_label: row.smell_label,
            confidence: row.confidence,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_prediction_rows_including_out_of_range_confidence() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            indoc! {r#"
                [
                  {"module_path": "a.py", "qualified_name": "f", "smell_label": true, "confidence": 0.92},
                  {"module_path": "a.py", "qualified_name": "g", "smell_label": false, "confidence": 1.4}
                ]
            "#}
            .as_bytes(),
        )
        .unwrap();

        let predictions = load_smell_predictions(file.path()).unwrap();
        assert_eq!(predictions.len(), 2);
        assert!(predictions[0].smell_label);
        // Kept as-is; the pipeline turns it into a per-function failure.
        assert_eq!(predictions[1].confidence, 1.4);
    }
}
