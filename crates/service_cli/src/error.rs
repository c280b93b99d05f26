//! CLI error types

use pricer_models::analytical::AnalyticalError;
use pricer_verify::{ConfigError, VerifyError};
use thiserror::Error;

/// Errors surfaced by `bsval` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The pricing engine rejected the inputs
    #[error(transparent)]
    Pricing(#[from] AnalyticalError),

    /// Harness configuration could not be loaded or is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The harness could not run
    #[error(transparent)]
    Verify(#[from] VerifyError),

    /// The harness ran and at least one family did not pass
    #[error("Verification failed: {0}")]
    ChecksFailed(String),

    /// Unrecognised log level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::analytical::Parameter;

    #[test]
    fn test_pricing_error_message_passes_through() {
        let err: CliError = AnalyticalError::InvalidParameter {
            parameter: Parameter::Volatility,
            value: 0.0,
            constraint: "must be finite and > 0",
        }
        .into();
        assert!(err.to_string().starts_with("Invalid volatility"));
    }

    #[test]
    fn test_option_type_error_message() {
        let err: CliError = AnalyticalError::InvalidOptionType {
            value: "straddle".to_string(),
        }
        .into();
        assert!(err.to_string().contains("straddle"));
    }
}
