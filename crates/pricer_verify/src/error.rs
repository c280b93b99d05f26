//! Error types for the verification harness.
//!
//! This module provides:
//! - `ConfigError`: Rejected harness configuration
//! - `VerifyError`: Failures that stop a check family

use pricer_models::analytical::AnalyticalError;
use thiserror::Error;

use crate::report::CheckFamily;

/// Harness configuration errors.
///
/// Raised by `HarnessConfig::validate` and `HarnessConfig::from_file`
/// before any check family runs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Sampling range that is non-finite or has `min > max`.
    #[error("Invalid range for {name}: [{min}, {max}]")]
    InvalidRange {
        /// Name of the sampled parameter
        name: &'static str,
        /// Lower bound as configured
        min: f64,
        /// Upper bound as configured
        max: f64,
    },

    /// Sweep grid that is empty, unbounded or not strictly increasing.
    #[error("Invalid {name} grid: {reason}")]
    InvalidGrid {
        /// Name of the sweep
        name: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Fuzzing trial count outside `[1, MAX_TRIALS]`.
    #[error("Invalid trial count {0}: must be in range [1, 10_000_000]")]
    InvalidTrials(usize),

    /// Configuration file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Errors that stop the harness.
///
/// `InvariantViolation` signals a regression in the pricing engine itself
/// and aborts the remaining families. `Pricing` is only raised where the
/// inputs are valid by construction, so it is treated the same way.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VerifyError {
    /// A hard-coded correctness property failed.
    #[error("Invariant violated in {family}: {message}")]
    InvariantViolation {
        /// Family that detected the violation
        family: CheckFamily,
        /// Description including the offending inputs
        message: String,
    },

    /// The engine rejected inputs the family generated as valid.
    #[error("Pricing failed in {family}: {source}")]
    Pricing {
        /// Family that issued the request
        family: CheckFamily,
        /// Engine error
        #[source]
        source: AnalyticalError,
    },

    /// Harness configuration rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl VerifyError {
    /// Returns true for errors that indicate a defect in the pricing engine.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, VerifyError::InvariantViolation { .. })
    }

    /// Family the error arose in; `None` for configuration errors.
    pub fn family(&self) -> Option<CheckFamily> {
        match self {
            VerifyError::InvariantViolation { family, .. }
            | VerifyError::Pricing { family, .. } => Some(*family),
            VerifyError::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::analytical::Parameter;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidRange {
            name: "volatility",
            min: 0.5,
            max: 0.1,
        };
        assert_eq!(err.to_string(), "Invalid range for volatility: [0.5, 0.1]");

        let err = ConfigError::InvalidTrials(0);
        assert!(err.to_string().contains("Invalid trial count 0"));
    }

    #[test]
    fn test_invariant_violation_display() {
        let err = VerifyError::InvariantViolation {
            family: CheckFamily::Monotonicity,
            message: "call(60) < call(50)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invariant violated in monotonicity sweep: call(60) < call(50)"
        );
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn test_pricing_error_keeps_source() {
        let err = VerifyError::Pricing {
            family: CheckFamily::Monotonicity,
            source: AnalyticalError::InvalidParameter {
                parameter: Parameter::Expiry,
                value: 0.0,
                constraint: "must be finite and > 0",
            },
        };
        assert!(err.to_string().contains("expiry"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_invariant_violation());
    }

    #[test]
    fn test_config_error_conversion() {
        let err: VerifyError = ConfigError::InvalidTrials(0).into();
        assert!(matches!(err, VerifyError::Config(ConfigError::InvalidTrials(0))));
        assert_eq!(err.family(), None);
    }
}
