pub mod mapper;

pub use mapper::map_unit_coverage;

use crate::core::FunctionId;
use serde::Serialize;

/// Per-function coverage derived from one FunctionRecord and one
/// CoverageArtifact. Never persisted independently of its sources.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionCoverage {
    pub function_id: FunctionId,
    pub lines_covered: usize,
    pub lines_total: usize,
    /// `None` is the explicit `Unmeasured` state: the owning unit was absent
    /// from the artifact, or the function had no executable lines of its
    /// own. Never coerced to 0.0 or 1.0.
    pub ratio: Option<f64>,
}

impl FunctionCoverage {
    pub fn unmeasured(function_id: FunctionId) -> Self {
        Self {
            function_id,
            lines_covered: 0,
            lines_total: 0,
            ratio: None,
        }
    }

    pub fn is_measured(&self) -> bool {
        self.ratio.is_some()
    }

    /// Untested fraction used by the priority score: `1 - ratio` when
    /// measured, the configured penalty when not.
    pub fn coverage_gap(&self, unmeasured_penalty: f64) -> f64 {
        match self.ratio {
            Some(ratio) => 1.0 - ratio,
            None => unmeasured_penalty,
        }
    }
}
