//! The smell × coverage decision table.

use super::RiskCategory;
use crate::core::DataQuality;

/// Classify one function from its smell label and coverage ratio.
///
/// | smell | coverage                | category          |
/// |-------|-------------------------|-------------------|
/// | true  | ratio <  coverage_low   | HiddenRisk        |
/// | true  | ratio >= coverage_low   | RefactorCandidate |
/// | false | ratio <  coverage_low   | LowValue          |
/// | false | ratio >= coverage_low   | SafeZone          |
///
/// An `Unmeasured` ratio (`None`) counts as below the threshold, since
/// unknown coverage is never assumed adequate, and the result carries
/// `DataQuality::Incomplete` so it is not mixed with measured low coverage.
/// Total: every (label, ratio, threshold) input maps to exactly one
/// category.
pub fn classify(
    smell_label: bool,
    ratio: Option<f64>,
    coverage_low: f64,
) -> (RiskCategory, DataQuality) {
    let data_quality = match ratio {
        Some(_) => DataQuality::Measured,
        None => DataQuality::Incomplete,
    };
    let adequately_tested = ratio.is_some_and(|r| r >= coverage_low);

    let category = match (smell_label, adequately_tested) {
        (true, false) => RiskCategory::HiddenRisk,
        (true, true) => RiskCategory::RefactorCandidate,
        (false, false) => RiskCategory::LowValue,
        (false, true) => RiskCategory::SafeZone,
    };

    (category, data_quality)
}
