//! Black-Scholes pricing model for European options.
//!
//! This module provides the closed-form Black-Scholes price for European
//! call and put options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use tracing::debug;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::{OptionParams, OptionType};

/// Black-Scholes model bound to one validated parameter set.
///
/// Construction cannot fail because `OptionParams` already enforces the
/// preconditions; every evaluation is pure and deterministic.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::{OptionParams, OptionType};
///
/// let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
/// let call = BlackScholes::new(params).price();
/// let put = BlackScholes::new(params.with_option_type(OptionType::Put)).price();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    params: OptionParams,
}

/// Intermediate quantities of one Black-Scholes evaluation.
///
/// Mirrors the hand calculation: numerator and denominator of d₁, then
/// d₁, d₂ and the final price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    /// ln(S/K) + (r + σ²/2)T
    pub d1_numerator: f64,
    /// σ√T
    pub d1_denominator: f64,
    /// d₁
    pub d1: f64,
    /// d₂ = d₁ - σ√T
    pub d2: f64,
    /// Option price
    pub price: f64,
}

impl BlackScholes {
    /// Creates a model for the given parameters.
    #[inline]
    pub fn new(params: OptionParams) -> Self {
        Self { params }
    }

    /// Returns the parameters this model evaluates.
    #[inline]
    pub fn params(&self) -> &OptionParams {
        &self.params
    }

    #[inline]
    fn d1_terms(&self) -> (f64, f64) {
        let p = &self.params;
        let drift = p.rate() + 0.5 * p.volatility() * p.volatility();
        let numerator = (p.spot() / p.strike()).ln() + drift * p.expiry();
        let denominator = p.volatility() * p.expiry().sqrt();
        (numerator, denominator)
    }

    /// Computes d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T).
    #[inline]
    pub fn d1(&self) -> f64 {
        let (numerator, denominator) = self.d1_terms();
        numerator / denominator
    }

    /// Computes d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.params.volatility() * self.params.expiry().sqrt()
    }

    /// Computes the option price for the bound option kind.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::{OptionParams, OptionType};
    ///
    /// let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
    /// let price = BlackScholes::new(params).price();
    /// assert!((price - 10.4506).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price(&self) -> f64 {
        self.breakdown().price
    }

    /// Evaluates the formula and returns every intermediate term.
    pub fn breakdown(&self) -> PriceBreakdown {
        let p = &self.params;
        let (d1_numerator, d1_denominator) = self.d1_terms();
        let d1 = d1_numerator / d1_denominator;
        let d2 = d1 - d1_denominator;

        let discounted_strike = p.strike() * (-p.rate() * p.expiry()).exp();

        let value = match p.option_type() {
            // C = S·N(d₁) - K·e^(-rT)·N(d₂)
            OptionType::Call => p.spot() * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
            OptionType::Put => discounted_strike * norm_cdf(-d2) - p.spot() * norm_cdf(-d1),
        };
        // Subnormal terms can cancel to a residue just below zero
        let price = value.max(0.0);

        debug!(
            spot = p.spot(),
            strike = p.strike(),
            expiry = p.expiry(),
            rate = p.rate(),
            volatility = p.volatility(),
            option_type = %p.option_type(),
            d1,
            d2,
            price,
            "black-scholes evaluation"
        );

        PriceBreakdown {
            d1_numerator,
            d1_denominator,
            d1,
            d2,
            price,
        }
    }
}

/// Prices a European option with the Black-Scholes formula.
///
/// This is the single pricing entry point: five numeric inputs plus the
/// option kind, returning the price or the first violated precondition.
///
/// # Errors
/// `AnalyticalError::InvalidParameter` if S, K, T or σ is not strictly
/// positive, or any input is non-finite.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes_price;
/// use pricer_models::instruments::OptionType;
///
/// let put = black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
/// assert!((put - 5.5735).abs() < 1e-3);
///
/// assert!(black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Put).is_err());
/// ```
pub fn black_scholes_price(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> Result<f64, AnalyticalError> {
    let params = OptionParams::new(spot, strike, expiry, rate, volatility, option_type)?;
    Ok(BlackScholes::new(params).price())
}

/// Prices a European option whose kind is given as text (`"call"` / `"put"`).
///
/// The numeric inputs are validated first, so a request that is wrong on
/// both counts reports the parameter error.
///
/// # Errors
/// - `AnalyticalError::InvalidParameter` as for [`black_scholes_price`]
/// - `AnalyticalError::InvalidOptionType` for any other kind string
pub fn price_with_type_str(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: &str,
) -> Result<f64, AnalyticalError> {
    // Validate numerics against a placeholder kind, then the discriminator
    let params = OptionParams::new(spot, strike, expiry, rate, volatility, OptionType::Call)?;
    let option_type: OptionType = option_type.parse()?;
    Ok(BlackScholes::new(params.with_option_type(option_type)).price())
}
