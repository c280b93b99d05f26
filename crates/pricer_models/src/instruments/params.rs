//! Validated Black-Scholes input parameters.
//!
//! This module provides the immutable parameter set for a single
//! European option evaluation. Invalid values are rejected at
//! construction, never clamped.

use crate::analytical::{AnalyticalError, Parameter};

use super::OptionType;

const POSITIVE: &str = "must be finite and > 0";
const FINITE: &str = "must be finite";

/// Parameters for a European option evaluation.
///
/// Holds spot, strike, time to expiry, risk-free rate, volatility and the
/// option kind. Spot, strike, expiry and volatility must be strictly
/// positive; the rate may be any finite real (negative rates included).
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionParams, OptionType};
///
/// let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// assert_eq!(params.spot(), 100.0);
///
/// // Zero expiry is rejected
/// assert!(OptionParams::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "OptionParamsRepr", into = "OptionParamsRepr")
)]
pub struct OptionParams {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
}

impl OptionParams {
    /// Creates a validated parameter set.
    ///
    /// # Arguments
    /// * `spot` - Spot price S (must be > 0)
    /// * `strike` - Strike price K (must be > 0)
    /// * `expiry` - Time to expiry T in years (must be > 0)
    /// * `rate` - Risk-free rate r (any finite value)
    /// * `volatility` - Volatility σ (must be > 0)
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// `AnalyticalError::InvalidParameter` naming the first violated
    /// constraint, checked in the order spot, strike, expiry, volatility,
    /// rate. NaN and infinite values are always rejected.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, AnalyticalError> {
        require_positive(Parameter::Spot, spot)?;
        require_positive(Parameter::Strike, strike)?;
        require_positive(Parameter::Expiry, expiry)?;
        require_positive(Parameter::Volatility, volatility)?;
        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidParameter {
                parameter: Parameter::Rate,
                value: rate,
                constraint: FINITE,
            });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
        })
    }

    /// Returns the spot price (S).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry in years (T).
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the option kind.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns a copy with a different spot, re-validated.
    pub fn with_spot(&self, spot: f64) -> Result<Self, AnalyticalError> {
        Self::new(
            spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.option_type,
        )
    }

    /// Returns a copy with a different expiry, re-validated.
    pub fn with_expiry(&self, expiry: f64) -> Result<Self, AnalyticalError> {
        Self::new(
            self.spot,
            self.strike,
            expiry,
            self.rate,
            self.volatility,
            self.option_type,
        )
    }

    /// Returns a copy with a different option kind.
    ///
    /// Infallible: the numeric fields are already valid.
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }
}

fn require_positive(parameter: Parameter, value: f64) -> Result<(), AnalyticalError> {
    // `!(value > 0.0)` also rejects NaN
    if !(value > 0.0) || !value.is_finite() {
        return Err(AnalyticalError::InvalidParameter {
            parameter,
            value,
            constraint: POSITIVE,
        });
    }
    Ok(())
}

/// Unvalidated wire form; deserialisation goes through `OptionParams::new`.
#[cfg(feature = "serde")]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct OptionParamsRepr {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
}

#[cfg(feature = "serde")]
impl TryFrom<OptionParamsRepr> for OptionParams {
    type Error = AnalyticalError;

    fn try_from(repr: OptionParamsRepr) -> Result<Self, Self::Error> {
        OptionParams::new(
            repr.spot,
            repr.strike,
            repr.expiry,
            repr.rate,
            repr.volatility,
            repr.option_type,
        )
    }
}

#[cfg(feature = "serde")]
impl From<OptionParams> for OptionParamsRepr {
    fn from(params: OptionParams) -> Self {
        Self {
            spot: params.spot,
            strike: params.strike,
            expiry: params.expiry,
            rate: params.rate,
            volatility: params.volatility,
            option_type: params.option_type,
        }
    }
}
