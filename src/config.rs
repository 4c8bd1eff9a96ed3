//! Analysis configuration: thresholds and priority weights.
//!
//! Loaded from a `riskmap.toml` file or built from documented defaults.
//! Validation is fail-fast and accumulates every violation before reporting,
//! so a bad config surfaces all its problems in a single run. The pipeline
//! never proceeds with guessed values.

use crate::errors::{RiskmapError, RiskmapResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "riskmap.toml";

/// Weights of the priority score components. All must be non-negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityWeights {
    #[serde(default = "default_weight")]
    pub complexity: f64,

    #[serde(default = "default_weight")]
    pub size: f64,

    #[serde(default = "default_weight")]
    pub dependency: f64,

    #[serde(default = "default_weight")]
    pub coverage_gap: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            complexity: default_weight(),
            size: default_weight(),
            dependency: default_weight(),
            coverage_gap: default_weight(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskmapConfig {
    /// Coverage ratio below which a function counts as inadequately tested.
    /// The boundary is inclusive on the adequately-tested side.
    #[serde(default = "default_coverage_low")]
    pub coverage_low: f64,

    #[serde(default = "default_complexity_threshold")]
    pub complexity_threshold: u32,

    /// Function size (LOC) above which the size rule triggers.
    #[serde(default = "default_size_threshold")]
    pub size_threshold: usize,

    #[serde(default = "default_dependency_threshold")]
    pub dependency_threshold: usize,

    /// Coverage gap charged to the priority score when coverage is
    /// `Unmeasured`. 1.0 treats an unmeasured function like a fully
    /// uncovered one.
    #[serde(default = "default_unmeasured_penalty")]
    pub unmeasured_penalty: f64,

    /// Prediction confidence below which the low-confidence rule triggers.
    #[serde(default = "default_confidence_low")]
    pub confidence_low: f64,

    #[serde(default)]
    pub weights: PriorityWeights,
}

impl Default for RiskmapConfig {
    fn default() -> Self {
        Self {
            coverage_low: default_coverage_low(),
            complexity_threshold: default_complexity_threshold(),
            size_threshold: default_size_threshold(),
            dependency_threshold: default_dependency_threshold(),
            unmeasured_penalty: default_unmeasured_penalty(),
            confidence_low: default_confidence_low(),
            weights: PriorityWeights::default(),
        }
    }
}

fn default_coverage_low() -> f64 {
    0.5
}
fn default_complexity_threshold() -> u32 {
    10
}
fn default_size_threshold() -> usize {
    50
}
fn default_dependency_threshold() -> usize {
    5
}
fn default_unmeasured_penalty() -> f64 {
    1.0
}
fn default_confidence_low() -> f64 {
    0.6
}
fn default_weight() -> f64 {
    0.25
}

impl RiskmapConfig {
    /// Load configuration from an explicit file, from `riskmap.toml` in the
    /// working directory, or fall back to defaults. The loaded config is
    /// validated before it is returned.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Check every field against its documented domain, accumulating all
    /// violations into a single `ConfigurationError`.
    pub fn validate(&self) -> RiskmapResult<()> {
        let mut violations = Vec::new();

        if !(0.0..=1.0).contains(&self.coverage_low) {
            violations.push(format!(
                "coverage_low must be within [0, 1], got {}",
                self.coverage_low
            ));
        }
        if self.complexity_threshold == 0 {
            violations.push("complexity_threshold must be positive".to_string());
        }
        if self.size_threshold == 0 {
            violations.push("size_threshold must be positive".to_string());
        }
        if self.dependency_threshold == 0 {
            violations.push("dependency_threshold must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&self.unmeasured_penalty) {
            violations.push(format!(
                "unmeasured_penalty must be within [0, 1], got {}",
                self.unmeasured_penalty
            ));
        }
        if !(0.0..=1.0).contains(&self.confidence_low) {
            violations.push(format!(
                "confidence_low must be within [0, 1], got {}",
                self.confidence_low
            ));
        }

        for (name, weight) in [
            ("complexity", self.weights.complexity),
            ("size", self.weights.size),
            ("dependency", self.weights.dependency),
            ("coverage_gap", self.weights.coverage_gap),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                violations.push(format!(
                    "weights.{name} must be finite and non-negative, got {weight}"
                ));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(RiskmapError::Configuration(violations.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(RiskmapConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_threshold_is_fatal() {
        let config = RiskmapConfig {
            coverage_low: 1.5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("coverage_low"));
    }

    #[test]
    fn negative_weight_is_fatal() {
        let config = RiskmapConfig {
            weights: PriorityWeights {
                dependency: -0.1,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("weights.dependency"));
    }

    #[test]
    fn validation_accumulates_every_violation() {
        let config = RiskmapConfig {
            coverage_low: -0.2,
            complexity_threshold: 0,
            ..Default::default()
        };
        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("coverage_low"));
        assert!(message.contains("complexity_threshold"));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: RiskmapConfig = toml::from_str(
            r#"
            coverage_low = 0.7

            [weights]
            coverage_gap = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.coverage_low, 0.7);
        assert_eq!(config.complexity_threshold, 10);
        assert_eq!(config.weights.coverage_gap, 0.5);
        assert_eq!(config.weights.complexity, 0.25);
    }
}
