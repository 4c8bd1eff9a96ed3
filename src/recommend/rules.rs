//! The declarative smell-rule table.
//!
//! One table backs both the rationale text in the online report and any
//! offline heuristic labeling built on the same thresholds, so the two can
//! not drift apart. Each rule pairs a trigger predicate with the
//! human-readable description it contributes to a recommendation.

use crate::config::RiskmapConfig;
use crate::core::FunctionRecord;
use crate::coverage::FunctionCoverage;

/// Everything a rule may look at for one function.
pub struct RuleContext<'a> {
    pub record: &'a FunctionRecord,
    pub coverage: &'a FunctionCoverage,
    pub confidence: f64,
    pub config: &'a RiskmapConfig,
}

pub struct SmellRule {
    pub id: &'static str,
    pub triggered: fn(&RuleContext) -> bool,
    pub describe: fn(&RuleContext) -> String,
}

/// Rules are evaluated in table order; every triggered rule contributes to
/// the rationale, never just the first match.
pub const SMELL_RULES: &[SmellRule] = &[
    SmellRule {
        id: "coverage_below_target",
        triggered: |ctx| {
            ctx.coverage
                .ratio
                .is_some_and(|r| r < ctx.config.coverage_low)
        },
        describe: |ctx| {
            format!(
                "line coverage {:.0}% is below the {:.0}% target",
                ctx.coverage.ratio.unwrap_or(0.0) * 100.0,
                ctx.config.coverage_low * 100.0
            )
        },
    },
    SmellRule {
        id: "coverage_unmeasured",
        triggered: |ctx| ctx.coverage.ratio.is_none(),
        describe: |_| {
            "coverage could not be measured (unit not instrumented or no executable lines)"
                .to_string()
        },
    },
    SmellRule {
        id: "complexity_above_threshold",
        triggered: |ctx| ctx.record.cyclomatic_complexity > ctx.config.complexity_threshold,
        describe: |ctx| {
            format!(
                "cyclomatic complexity {} exceeds threshold {}",
                ctx.record.cyclomatic_complexity, ctx.config.complexity_threshold
            )
        },
    },
    SmellRule {
        id: "size_above_threshold",
        triggered: |ctx| ctx.record.loc > ctx.config.size_threshold,
        describe: |ctx| {
            format!(
                "function length {} lines exceeds threshold {}",
                ctx.record.loc, ctx.config.size_threshold
            )
        },
    },
    SmellRule {
        id: "high_dependency_count",
        triggered: |ctx| ctx.record.dependency_count > ctx.config.dependency_threshold,
        describe: |ctx| {
            format!(
                "depends on {} collaborators, more than the {} allowed",
                ctx.record.dependency_count, ctx.config.dependency_threshold
            )
        },
    },
    SmellRule {
        id: "low_prediction_confidence",
        triggered: |ctx| ctx.confidence < ctx.config.confidence_low,
        describe: |ctx| {
            format!(
                "smell prediction confidence {:.2} is below {:.2}",
                ctx.confidence, ctx.config.confidence_low
            )
        },
    },
];

/// Collect the descriptions of every triggered rule, in table order.
pub fn triggered_rationale(ctx: &RuleContext) -> Vec<String> {
    SMELL_RULES
        .iter()
        .filter(|rule| (rule.triggered)(ctx))
        .map(|rule| (rule.describe)(ctx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FunctionId;

    fn record(complexity: u32, loc: usize, deps: usize) -> FunctionRecord {
        FunctionRecord {
            id: FunctionId::new("pkg/mod.py", "f"),
            start_line: 1,
            end_line: 1 + loc,
            cyclomatic_complexity: complexity,
            loc,
            nesting_depth: 0,
            dependency_count: deps,
        }
    }

    fn covered(ratio: f64) -> FunctionCoverage {
        FunctionCoverage {
            function_id: FunctionId::new("pkg/mod.py", "f"),
            lines_covered: (ratio * 10.0) as usize,
            lines_total: 10,
            ratio: Some(ratio),
        }
    }

    #[test]
    fn every_triggered_rule_is_reported() {
        let config = RiskmapConfig::default();
        let record = record(15, 80, 9);
        let coverage = covered(0.1);
        let ctx = RuleContext {
            record: &record,
            coverage: &coverage,
            confidence: 0.3,
            config: &config,
        };

        let rationale = triggered_rationale(&ctx);
        assert_eq!(rationale.len(), 5);
        assert!(rationale[0].contains("coverage 10%"));
        assert!(rationale[1].contains("complexity 15"));
        assert!(rationale[2].contains("80 lines"));
        assert!(rationale[3].contains("9 collaborators"));
        assert!(rationale[4].contains("confidence 0.30"));
    }

    #[test]
    fn unexceptional_function_triggers_nothing() {
        let config = RiskmapConfig::default();
        let record = record(3, 10, 1);
        let coverage = covered(0.9);
        let ctx = RuleContext {
            record: &record,
            coverage: &coverage,
            confidence: 0.95,
            config: &config,
        };

        assert!(triggered_rationale(&ctx).is_empty());
    }

    #[test]
    fn unmeasured_coverage_triggers_its_own_rule_only() {
        let config = RiskmapConfig::default();
        let record = record(3, 10, 1);
        let coverage = FunctionCoverage::unmeasured(FunctionId::new("pkg/mod.py", "f"));
        let ctx = RuleContext {
            record: &record,
            coverage: &coverage,
            confidence: 0.95,
            config: &config,
        };

        let rationale = triggered_rationale(&ctx);
        assert_eq!(rationale.len(), 1);
        assert!(rationale[0].contains("could not be measured"));
    }
}
