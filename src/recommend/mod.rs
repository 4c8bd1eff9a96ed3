//! Recommendation synthesis: a priority score and an auditable rationale
//! for every classified function.

pub mod rules;

use crate::config::RiskmapConfig;
use crate::core::{DataQuality, FunctionId, FunctionRecord};
use crate::coverage::FunctionCoverage;
use crate::risk::{RiskCategory, RiskClassification};
use rules::{triggered_rationale, RuleContext};
use serde::Serialize;
use std::cmp::Ordering;

/// One report row. Every classified function gets one; HiddenRisk and
/// RefactorCandidate are the primary audience, but LowValue and SafeZone
/// rows are retained as low-priority entries for auditability.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub function_id: FunctionId,
    pub category: RiskCategory,
    pub data_quality: DataQuality,
    pub priority_score: f64,
    /// Descriptions of every triggered rule, in rule-table order. Empty only
    /// for SafeZone functions with no threshold breaches.
    pub rationale: Vec<String>,
    pub cyclomatic_complexity: u32,
    pub loc: usize,
    pub dependency_count: usize,
    pub coverage_ratio: Option<f64>,
    pub smell_confidence: f64,
}

/// Weighted sum of normalized complexity, size, dependency count and
/// coverage gap. Monotonic: raising any one input while holding the others
/// fixed never lowers the score.
pub fn priority_score(
    record: &FunctionRecord,
    coverage: &FunctionCoverage,
    config: &RiskmapConfig,
) -> f64 {
    let weights = &config.weights;

    weights.complexity
        * saturating_norm(
            record.cyclomatic_complexity as f64,
            config.complexity_threshold as f64,
        )
        + weights.size * saturating_norm(record.loc as f64, config.size_threshold as f64)
        + weights.dependency
            * saturating_norm(
                record.dependency_count as f64,
                config.dependency_threshold as f64,
            )
        + weights.coverage_gap * coverage.coverage_gap(config.unmeasured_penalty)
}

/// Normalize a metric against its threshold, saturating at 1.0 so a single
/// runaway metric cannot drown out the rest of the score.
fn saturating_norm(value: f64, threshold: f64) -> f64 {
    (value / threshold).min(1.0)
}

pub fn synthesize(
    record: &FunctionRecord,
    coverage: &FunctionCoverage,
    classification: &RiskClassification,
    confidence: f64,
    config: &RiskmapConfig,
) -> Recommendation {
    let ctx = RuleContext {
        record,
        coverage,
        confidence,
        config,
    };

    Recommendation {
        function_id: record.id.clone(),
        category: classification.category,
        data_quality: classification.data_quality,
        priority_score: priority_score(record, coverage, config),
        rationale: triggered_rationale(&ctx),
        cyclomatic_complexity: record.cyclomatic_complexity,
        loc: record.loc,
        dependency_count: record.dependency_count,
        coverage_ratio: coverage.ratio,
        smell_confidence: confidence,
    }
}

/// Sort by priority score descending, ties broken by qualified name (then
/// module path) ascending, so output order is deterministic and
/// reproducible across runs and thread schedules.
pub fn sort_recommendations(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(compare_priority);
}

fn compare_priority(a: &Recommendation, b: &Recommendation) -> Ordering {
    b.priority_score
        .total_cmp(&a.priority_score)
        .then_with(|| {
            a.function_id
                .qualified_name
                .cmp(&b.function_id.qualified_name)
        })
        .then_with(|| a.function_id.module_path.cmp(&b.function_id.module_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FunctionId;
    use crate::risk::classify;

    fn record(name: &str, complexity: u32, loc: usize, deps: usize) -> FunctionRecord {
        FunctionRecord {
            id: FunctionId::new("pkg/mod.py", name),
            start_line: 1,
            end_line: 1 + loc,
            cyclomatic_complexity: complexity,
            loc,
            nesting_depth: 0,
            dependency_count: deps,
        }
    }

    fn covered(name: &str, ratio: f64) -> FunctionCoverage {
        FunctionCoverage {
            function_id: FunctionId::new("pkg/mod.py", name),
            lines_covered: (ratio * 100.0) as usize,
            lines_total: 100,
            ratio: Some(ratio),
        }
    }

    fn recommend(name: &str, ratio: Option<f64>, config: &RiskmapConfig) -> Recommendation {
        let record = record(name, 15, 80, 2);
        let coverage = match ratio {
            Some(r) => covered(name, r),
            None => FunctionCoverage::unmeasured(record.id.clone()),
        };
        let (category, data_quality) = classify(true, coverage.ratio, config.coverage_low);
        let classification = RiskClassification {
            function_id: record.id.clone(),
            category,
            data_quality,
        };
        synthesize(&record, &coverage, &classification, 0.9, config)
    }

    #[test]
    fn larger_coverage_gap_never_scores_lower() {
        let config = RiskmapConfig::default();
        let gappy = recommend("f", Some(0.1), &config);
        let tested = recommend("f", Some(0.9), &config);
        assert!(gappy.priority_score >= tested.priority_score);
    }

    #[test]
    fn score_saturates_instead_of_exploding() {
        let config = RiskmapConfig::default();
        let extreme = record("f", 500, 4000, 90);
        let coverage = covered("f", 0.0);
        let score = priority_score(&extreme, &coverage, &config);

        let weights = &config.weights;
        let ceiling =
            weights.complexity + weights.size + weights.dependency + weights.coverage_gap;
        assert!(score <= ceiling);
    }

    #[test]
    fn unmeasured_coverage_charges_the_configured_penalty() {
        let config = RiskmapConfig {
            unmeasured_penalty: 0.75,
            ..Default::default()
        };
        let record = record("f", 1, 1, 0);
        let unmeasured = FunctionCoverage::unmeasured(record.id.clone());
        let quarter = covered("f", 0.25);

        let with_penalty = priority_score(&record, &unmeasured, &config);
        let with_measured = priority_score(&record, &quarter, &config);
        assert_eq!(with_penalty, with_measured);
    }

    #[test]
    fn ties_are_broken_by_qualified_name() {
        let config = RiskmapConfig::default();
        let mut recommendations = vec![
            recommend("zeta", Some(0.1), &config),
            recommend("alpha", Some(0.1), &config),
        ];
        sort_recommendations(&mut recommendations);

        assert_eq!(recommendations[0].function_id.qualified_name, "alpha");
        assert_eq!(recommendations[1].function_id.qualified_name, "zeta");
    }

    #[test]
    fn higher_score_sorts_first() {
        let config = RiskmapConfig::default();
        let mut recommendations = vec![
            recommend("low_gap", Some(0.95), &config),
            recommend("high_gap", Some(0.0), &config),
        ];
        sort_recommendations(&mut recommendations);

        assert_eq!(recommendations[0].function_id.qualified_name, "high_gap");
    }
}
