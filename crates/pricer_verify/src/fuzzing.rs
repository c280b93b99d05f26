//! Seeded randomized fuzzing of the pricing engine.
//!
//! Draws `trials` parameter sets uniformly from the configured ranges and
//! prices each one. Rejected inputs are recoverable and recorded; a
//! negative price from accepted inputs is an engine defect and fatal.
//! A run is fully determined by its configuration, seed included.

use std::fmt;

use pricer_models::analytical::{black_scholes_price, AnalyticalError};
use pricer_models::instruments::OptionType;
use tracing::{error, info, warn};

use crate::config::FuzzConfig;
use crate::error::VerifyError;
use crate::report::{status_tag, CheckFamily};
use crate::rng::HarnessRng;

/// One randomly drawn parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzTrial {
    /// Zero-based trial number
    pub index: usize,
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiry (T)
    pub expiry: f64,
    /// Risk-free rate (r)
    pub rate: f64,
    /// Volatility (σ)
    pub volatility: f64,
    /// Call or put
    pub option_type: OptionType,
}

impl FuzzTrial {
    /// Draws the next trial; S, K, T, r, σ, then the option kind.
    pub fn draw(index: usize, rng: &mut HarnessRng, config: &FuzzConfig) -> Self {
        Self {
            index,
            spot: rng.uniform_in(config.spot),
            strike: rng.uniform_in(config.strike),
            expiry: rng.uniform_in(config.expiry),
            rate: rng.uniform_in(config.rate),
            volatility: rng.uniform_in(config.volatility),
            option_type: rng.option_type(),
        }
    }

    /// Prices the trial.
    pub fn price(&self) -> Result<f64, AnalyticalError> {
        black_scholes_price(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.option_type,
        )
    }
}

impl fmt::Display for FuzzTrial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "trial {} {} [{}, {}, {}, {}, {}]",
            self.index,
            self.option_type,
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility
        )
    }
}

/// A trial the engine rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzFailure {
    /// The offending inputs
    pub trial: FuzzTrial,
    /// Engine error
    pub error: AnalyticalError,
}

/// Outcome of a fuzzing run.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzReport {
    /// Seed the run used
    pub seed: u64,
    /// Trials drawn
    pub trials: usize,
    /// Trials priced successfully
    pub priced: usize,
    /// Rejected trials in draw order
    pub failures: Vec<FuzzFailure>,
}

impl FuzzReport {
    /// True when no trial was rejected.
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for FuzzReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}: {} of {} trials priced (seed {})",
            status_tag(self.passed()),
            CheckFamily::RandomizedFuzzing,
            self.priced,
            self.trials,
            self.seed
        )?;
        for failure in &self.failures {
            writeln!(f, "  {}: Error: {}", failure.trial, failure.error)?;
        }
        Ok(())
    }
}

fn negative_price(price: f64, trial: &FuzzTrial) -> VerifyError {
    let message = format!("price {:e} below zero for {}", price, trial);
    error!(%message, "fuzzing invariant violated");
    VerifyError::InvariantViolation {
        family: CheckFamily::RandomizedFuzzing,
        message,
    }
}

/// Runs the configured number of seeded random trials.
///
/// # Errors
/// - `VerifyError::Config` if the configuration is invalid
/// - `VerifyError::InvariantViolation` if accepted inputs price below zero
///
/// # Examples
/// ```
/// use pricer_verify::config::FuzzConfig;
/// use pricer_verify::fuzzing::run_fuzzing;
///
/// let report = run_fuzzing(&FuzzConfig::default()).unwrap();
/// assert!(report.passed());
/// assert_eq!(report.priced, 100);
/// ```
pub fn run_fuzzing(config: &FuzzConfig) -> Result<FuzzReport, VerifyError> {
    config.validate()?;
    info!(
        trials = config.trials,
        seed = config.seed,
        "running {}",
        CheckFamily::RandomizedFuzzing
    );

    let mut rng = HarnessRng::from_seed(config.seed);
    let mut priced = 0;
    let mut failures = Vec::new();

    for index in 0..config.trials {
        let trial = FuzzTrial::draw(index, &mut rng, config);
        match trial.price() {
            Ok(price) if !(price >= 0.0) => return Err(negative_price(price, &trial)),
            Ok(_) => priced += 1,
            Err(err) => {
                warn!(
                    trial = %trial,
                    error = %err,
                    "fuzz trial rejected"
                );
                failures.push(FuzzFailure { trial, error: err });
            }
        }
    }

    info!(
        priced,
        failed = failures.len(),
        "{} finished",
        CheckFamily::RandomizedFuzzing
    );
    Ok(FuzzReport {
        seed: rng.seed(),
        trials: config.trials,
        priced,
        failures,
    })
}
