//! Pipeline orchestration: join the three provider outputs, fan out the
//! per-unit mapping and per-function classification, fan in and sort.
//!
//! The core receives all provider outputs as explicit inputs; it reads no
//! ambient state. Mapping and classification share no mutable state, so
//! units and functions are processed in a rayon fan-out; results are
//! aggregated and deterministically sorted, so thread scheduling never
//! affects the report.

use crate::config::RiskmapConfig;
use crate::core::metrics::group_by_unit;
use crate::core::{CoverageArtifact, FunctionId, FunctionRecord, SmellPrediction};
use crate::coverage::{map_unit_coverage, FunctionCoverage};
use crate::errors::RiskmapError;
use crate::recommend::{sort_recommendations, synthesize, Recommendation};
use crate::risk::{classify, RiskCategory, RiskClassification};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

/// The three provider outputs consumed by one run.
#[derive(Debug, Default)]
pub struct AnalysisInput {
    pub functions: Vec<FunctionRecord>,
    pub predictions: Vec<SmellPrediction>,
    pub coverage: CoverageArtifact,
}

/// A function the predictor could not score. Reported separately, never
/// defaulted into a risk category.
#[derive(Debug, Clone, Serialize)]
pub struct UnscoredFunction {
    pub function_id: FunctionId,
    pub reason: String,
}

/// Category counts over the classified functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RiskDistribution {
    pub hidden_risk: usize,
    pub refactor_candidate: usize,
    pub low_value: usize,
    pub safe_zone: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub functions_analyzed: usize,
    pub functions_unscored: usize,
    /// Classified functions whose coverage was unmeasured.
    pub incomplete_data: usize,
    pub distribution: RiskDistribution,
}

/// Final pipeline output: recommendations sorted by priority descending
/// (ties by qualified name ascending) plus the unscored lane.
#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    pub recommendations: Vec<Recommendation>,
    pub unscored: Vec<UnscoredFunction>,
}

enum Outcome {
    Scored(Box<Recommendation>),
    Unscored(UnscoredFunction),
}

/// Run the full analysis over already-loaded provider outputs.
///
/// The config must have been validated; `analyze` trusts its domains.
pub fn analyze(input: AnalysisInput, config: &RiskmapConfig) -> RiskReport {
    let AnalysisInput {
        functions,
        predictions,
        coverage,
    } = input;

    let predictions: HashMap<FunctionId, SmellPrediction> = predictions
        .into_iter()
        .map(|p| (p.id.clone(), p))
        .collect();

    // Fan out per source unit: coverage attribution is independent across
    // units.
    let grouped: Vec<(String, Vec<FunctionRecord>)> = group_by_unit(functions).into_iter().collect();
    let mapped: Vec<(FunctionRecord, FunctionCoverage)> = grouped
        .into_par_iter()
        .flat_map(|(unit_path, records)| {
            let unit = coverage.unit(&unit_path);
            if unit.is_none() {
                warn!(
                    "{}",
                    RiskmapError::MissingCoverageData {
                        unit: unit_path.clone()
                    }
                );
            }
            let coverages = map_unit_coverage(&records, unit);
            records.into_iter().zip(coverages).collect::<Vec<_>>()
        })
        .collect();

    debug!("mapped coverage for {} functions", mapped.len());

    // Fan out per function: classification and synthesis are independent.
    let outcomes: Vec<Outcome> = mapped
        .into_par_iter()
        .map(|(record, function_coverage)| {
            match validated_prediction(&predictions, &record.id) {
                Ok(prediction) => {
                    let (category, data_quality) = classify(
                        prediction.smell_label,
                        function_coverage.ratio,
                        config.coverage_low,
                    );
                    let classification = RiskClassification {
                        function_id: record.id.clone(),
                        category,
                        data_quality,
                    };
                    Outcome::Scored(Box::new(synthesize(
                        &record,
                        &function_coverage,
                        &classification,
                        prediction.confidence,
                        config,
                    )))
                }
                Err(reason) => Outcome::Unscored(UnscoredFunction {
                    function_id: record.id.clone(),
                    reason,
                }),
            }
        })
        .collect();

    let mut recommendations = Vec::new();
    let mut unscored = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Scored(recommendation) => recommendations.push(*recommendation),
            Outcome::Unscored(entry) => unscored.push(entry),
        }
    }

    sort_recommendations(&mut recommendations);
    unscored.sort_by(|a, b| a.function_id.cmp(&b.function_id));

    let summary = summarize(&recommendations, &unscored);

    RiskReport {
        generated_at: Utc::now(),
        summary,
        recommendations,
        unscored,
    }
}

/// Look up and domain-check the prediction for one function. A missing row
/// or a confidence outside [0, 1] is a per-function inference failure.
fn validated_prediction<'a>(
    predictions: &'a HashMap<FunctionId, SmellPrediction>,
    id: &FunctionId,
) -> Result<&'a SmellPrediction, String> {
    let prediction = predictions.get(id).ok_or_else(|| {
        RiskmapError::ModelInferenceFailure {
            function: id.to_string(),
            reason: "no prediction produced for this function".to_string(),
        }
        .to_string()
    })?;

    if !(0.0..=1.0).contains(&prediction.confidence) {
        return Err(RiskmapError::ModelInferenceFailure {
            function: id.to_string(),
            reason: format!(
                "confidence {} outside [0, 1]",
                prediction.confidence
            ),
        }
        .to_string());
    }

    Ok(prediction)
}

fn summarize(recommendations: &[Recommendation], unscored: &[UnscoredFunction]) -> ReportSummary {
    let mut distribution = RiskDistribution::default();
    for recommendation in recommendations {
        match recommendation.category {
            RiskCategory::HiddenRisk => distribution.hidden_risk += 1,
            RiskCategory::RefactorCandidate => distribution.refactor_candidate += 1,
            RiskCategory::LowValue => distribution.low_value += 1,
            RiskCategory::SafeZone => distribution.safe_zone += 1,
        }
    }

    ReportSummary {
        functions_analyzed: recommendations.len(),
        functions_unscored: unscored.len(),
        incomplete_data: recommendations
            .iter()
            .filter(|r| r.coverage_ratio.is_none())
            .count(),
        distribution,
    }
}
