//! Loaders for the three external provider artifacts.
//!
//! The providers themselves (static-metrics extraction, model inference,
//! instrumented test execution) run outside this crate; the pipeline only
//! consumes the files they leave behind.

pub mod coverage;
pub mod metrics;
pub mod smells;

pub use coverage::load_coverage_artifact;
pub use metrics::load_function_metrics;
pub use smells::load_smell_predictions;
