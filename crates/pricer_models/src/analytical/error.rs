//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors raised at the pricing engine boundary
//! - `Parameter`: The constrained pricing inputs named by those errors

use std::fmt;

use thiserror::Error;

/// Pricing input subject to a validation constraint.
///
/// # Examples
/// ```
/// use pricer_models::analytical::Parameter;
///
/// assert_eq!(Parameter::Volatility.symbol(), "σ");
/// assert_eq!(Parameter::Spot.to_string(), "spot");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Parameter {
    /// Spot price of the underlying (S).
    Spot,
    /// Strike price (K).
    Strike,
    /// Time to expiry in years (T).
    Expiry,
    /// Continuously-compounded risk-free rate (r).
    Rate,
    /// Annualised volatility (σ).
    Volatility,
}

impl Parameter {
    /// Mathematical symbol used in the Black-Scholes formula.
    #[inline]
    pub fn symbol(&self) -> &'static str {
        match self {
            Parameter::Spot => "S",
            Parameter::Strike => "K",
            Parameter::Expiry => "T",
            Parameter::Rate => "r",
            Parameter::Volatility => "σ",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::Spot => "spot",
            Parameter::Strike => "strike",
            Parameter::Expiry => "expiry",
            Parameter::Rate => "rate",
            Parameter::Volatility => "volatility",
        };
        write!(f, "{}", name)
    }
}

/// Analytical pricing errors.
///
/// Both variants are fail-fast: they are returned before any part of the
/// closed-form evaluation runs.
///
/// # Variants
/// - `InvalidParameter`: A numeric input violates its constraint
/// - `InvalidOptionType`: The option kind is not one of `call` / `put`
///
/// # Examples
/// ```
/// use pricer_models::analytical::{AnalyticalError, Parameter};
///
/// let err = AnalyticalError::InvalidParameter {
///     parameter: Parameter::Volatility,
///     value: -0.2,
///     constraint: "must be > 0",
/// };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Numeric input outside its valid domain.
    #[error("Invalid {parameter}: {} = {value} ({constraint})", parameter.symbol())]
    InvalidParameter {
        /// Which input was rejected
        parameter: Parameter,
        /// The rejected value
        value: f64,
        /// Human-readable description of the violated constraint
        constraint: &'static str,
    },

    /// Option kind outside the two recognised values.
    #[error("Invalid option type: '{value}' (expected 'call' or 'put')")]
    InvalidOptionType {
        /// The unrecognised discriminator as supplied
        value: String,
    },
}

impl AnalyticalError {
    /// Returns the rejected parameter, if this is an `InvalidParameter` error.
    pub fn parameter(&self) -> Option<Parameter> {
        match self {
            AnalyticalError::InvalidParameter { parameter, .. } => Some(*parameter),
            AnalyticalError::InvalidOptionType { .. } => None,
        }
    }
}
