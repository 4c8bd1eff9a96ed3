pub mod classifier;

pub use classifier::classify;

use crate::core::{DataQuality, FunctionId};
use serde::{Deserialize, Serialize};

/// The four risk categories of the smell × coverage grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Smelly and inadequately tested: the primary audience.
    HiddenRisk,
    /// Smelly but adequately tested: restructure before it regresses.
    RefactorCandidate,
    /// Clean but untested: low payoff from adding tests.
    LowValue,
    /// Clean and tested.
    SafeZone,
}

impl RiskCategory {
    pub fn display_name(&self) -> &str {
        match self {
            RiskCategory::HiddenRisk => "Hidden Risk",
            RiskCategory::RefactorCandidate => "Refactor Candidate",
            RiskCategory::LowValue => "Low Value",
            RiskCategory::SafeZone => "Safe Zone",
        }
    }
}

/// Exactly one classification per FunctionRecord, a pure function of
/// (smell_label, ratio, coverage_low).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskClassification {
    pub function_id: FunctionId,
    pub category: RiskCategory,
    pub data_quality: DataQuality,
}
