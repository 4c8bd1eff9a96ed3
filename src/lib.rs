// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod coverage;
pub mod errors;
pub mod io;
pub mod pipeline;
pub mod providers;
pub mod recommend;
pub mod risk;

// Re-export commonly used types
pub use crate::config::RiskmapConfig;
pub use crate::core::{
    CoverageArtifact, DataQuality, FunctionId, FunctionRecord, SmellPrediction, SourceUnitCoverage,
};
pub use crate::coverage::{map_unit_coverage, FunctionCoverage};
pub use crate::errors::{RiskmapError, RiskmapResult};
pub use crate::io::{create_writer, OutputFormat, OutputWriter};
pub use crate::pipeline::{analyze, AnalysisInput, RiskReport, UnscoredFunction};
pub use crate::providers::{load_coverage_artifact, load_function_metrics, load_smell_predictions};
pub use crate::recommend::{priority_score, Recommendation};
pub use crate::risk::{classify, RiskCategory, RiskClassification};
