//! Monotonicity sweeps over spot and expiry.
//!
//! Two deterministic sweeps against the pricing engine:
//! - **Spot sweep**: call prices must be non-decreasing as S walks the
//!   spot grid with K, T, r and σ held fixed.
//! - **Expiry sweep**: call prices must be non-negative as T walks the
//!   expiry grid with S, K, r and σ held fixed.
//!
//! Both grids are valid by construction, so any failure here is fatal.

use std::fmt;

use pricer_models::analytical::{AnalyticalError, BlackScholes};
use pricer_models::instruments::OptionParams;
use tracing::{error, info};

use crate::config::MonotonicityConfig;
use crate::error::VerifyError;
use crate::report::{status_tag, CheckFamily};

/// Points checked by a successful sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonotonicityReport {
    /// Spot grid points priced
    pub spot_points: usize,
    /// Expiry grid points priced
    pub expiry_points: usize,
}

impl fmt::Display for MonotonicityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}: call price non-decreasing over {} spots, non-negative over {} expiries",
            status_tag(true),
            CheckFamily::Monotonicity,
            self.spot_points,
            self.expiry_points
        )
    }
}

fn pricing_error(source: AnalyticalError) -> VerifyError {
    VerifyError::Pricing {
        family: CheckFamily::Monotonicity,
        source,
    }
}

fn violation(message: String) -> VerifyError {
    error!(%message, "monotonicity violated");
    VerifyError::InvariantViolation {
        family: CheckFamily::Monotonicity,
        message,
    }
}

fn spot_decrease(prev_spot: f64, prev_price: f64, spot: f64, price: f64) -> VerifyError {
    violation(format!(
        "call price fell from {:e} at S={} to {:e} at S={}",
        prev_price, prev_spot, price, spot
    ))
}

fn negative_at_expiry(price: f64, expiry: f64) -> VerifyError {
    violation(format!("call price {:e} is negative at T={}", price, expiry))
}

fn call_price(params: Result<OptionParams, AnalyticalError>) -> Result<f64, VerifyError> {
    Ok(BlackScholes::new(params.map_err(pricing_error)?).price())
}

/// Runs the spot and expiry sweeps.
///
/// # Errors
/// - `VerifyError::Config` if the sweep configuration is invalid
/// - `VerifyError::InvariantViolation` on the first decreasing spot pair
///   or negative expiry price
/// - `VerifyError::Pricing` if the engine rejects a grid point
///
/// # Examples
/// ```
/// use pricer_verify::config::MonotonicityConfig;
/// use pricer_verify::monotonicity::run_monotonicity;
///
/// let report = run_monotonicity(&MonotonicityConfig::default()).unwrap();
/// assert_eq!(report.spot_points, 11);
/// ```
pub fn run_monotonicity(config: &MonotonicityConfig) -> Result<MonotonicityReport, VerifyError> {
    config.validate()?;
    info!("running {}", CheckFamily::Monotonicity);
    let base = config.base_params()?;

    let spots = config.spot_grid.points(true);
    let mut previous: Option<(f64, f64)> = None;
    for &spot in &spots {
        let price = call_price(base.with_spot(spot))?;
        if let Some((prev_spot, prev_price)) = previous {
            // Negated comparison also catches NaN
            if !(price >= prev_price) {
                return Err(spot_decrease(prev_spot, prev_price, spot, price));
            }
        }
        previous = Some((spot, price));
    }

    let expiries = config.expiry_grid.points(false);
    for &expiry in &expiries {
        let price = call_price(base.with_expiry(expiry))?;
        if !(price >= 0.0) {
            return Err(negative_at_expiry(price, expiry));
        }
    }

    info!(
        spot_points = spots.len(),
        expiry_points = expiries.len(),
        "{} passed",
        CheckFamily::Monotonicity
    );
    Ok(MonotonicityReport {
        spot_points: spots.len(),
        expiry_points: expiries.len(),
    })
}
