pub mod metrics;
pub mod types;

pub use types::{
    CoverageArtifact, DataQuality, FunctionId, FunctionRecord, SmellPrediction, SourceUnitCoverage,
};
