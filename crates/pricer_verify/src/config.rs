//! Verification harness configuration.
//!
//! Every field has a default, so the harness runs without any file. A TOML
//! file can override any subset:
//!
//! ```toml
//! [monotonicity]
//! spot_grid = { start = 50.0, end = 150.0, step = 10.0 }
//!
//! [diversity]
//! top_n = 3
//!
//! [fuzzing]
//! trials = 500
//! seed = 7
//! volatility = { min = 0.05, max = 1.0 }
//! ```

use std::path::Path;

use pricer_models::instruments::{OptionParams, OptionType};
use serde::Deserialize;

use crate::diversity::{default_pool, TestCase};
use crate::error::ConfigError;

/// Maximum number of fuzzing trials allowed.
pub const MAX_TRIALS: usize = 10_000_000;

/// Maximum number of points in a sweep grid.
pub const MAX_GRID_POINTS: usize = 100_000;

/// Default fuzzing seed.
pub const DEFAULT_SEED: u64 = 42;

/// Closed sampling interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ParamRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl ParamRange {
    /// Creates a range; validity is checked by [`HarnessConfig::validate`].
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        // Width must also be finite for uniform sampling
        if !(self.max - self.min).is_finite() || self.min > self.max {
            return Err(ConfigError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Evenly spaced sweep grid generated by index as `start + i * step`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SweepGrid {
    /// First grid point
    pub start: f64,
    /// Last grid point (closed grids) or exclusive bound (half-open grids)
    pub end: f64,
    /// Spacing between consecutive points
    pub step: f64,
}

impl SweepGrid {
    /// Creates a grid; validity is checked by [`HarnessConfig::validate`].
    pub const fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// Number of points, including `end` when `include_end` is set.
    fn len(&self, include_end: bool) -> usize {
        // Tolerance absorbs representation error in (end - start) / step
        let span = (self.end - self.start) / self.step;
        if include_end {
            (span + 1e-9).floor() as usize + 1
        } else {
            (span - 1e-9).ceil().max(0.0) as usize
        }
    }

    /// Grid points; `include_end` selects `[start, end]` or `[start, end)`.
    ///
    /// # Examples
    /// ```
    /// use pricer_verify::config::SweepGrid;
    ///
    /// let spots = SweepGrid::new(50.0, 150.0, 10.0).points(true);
    /// assert_eq!(spots.len(), 11);
    ///
    /// let expiries = SweepGrid::new(0.01, 1.0, 0.1).points(false);
    /// assert_eq!(expiries.len(), 10);
    /// ```
    pub fn points(&self, include_end: bool) -> Vec<f64> {
        (0..self.len(include_end))
            .map(|i| self.start + i as f64 * self.step)
            .collect()
    }

    fn validate(&self, name: &'static str, include_end: bool) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidGrid { name, reason };

        if !self.start.is_finite() || !self.end.is_finite() || !self.step.is_finite() {
            return Err(invalid("bounds and step must be finite".to_string()));
        }
        if self.step <= 0.0 {
            return Err(invalid(format!("step {} must be > 0", self.step)));
        }
        if self.start <= 0.0 {
            return Err(invalid(format!("start {} must be > 0", self.start)));
        }
        if self.end < self.start || (!include_end && self.end == self.start) {
            return Err(invalid(format!(
                "end {} must not precede start {}",
                self.end, self.start
            )));
        }
        if ((self.end - self.start) / self.step) >= MAX_GRID_POINTS as f64 {
            return Err(invalid(format!("more than {} points", MAX_GRID_POINTS)));
        }
        Ok(())
    }
}

/// Monotonicity sweep configuration.
///
/// The spot sweep holds strike, expiry, rate and volatility fixed and
/// walks the closed `spot_grid`. The expiry sweep holds spot, strike, rate
/// and volatility fixed and walks the half-open `expiry_grid`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonotonicityConfig {
    /// Spot used by the expiry sweep
    pub spot: f64,
    /// Strike used by both sweeps
    pub strike: f64,
    /// Expiry used by the spot sweep
    pub expiry: f64,
    /// Risk-free rate used by both sweeps
    pub rate: f64,
    /// Volatility used by both sweeps
    pub volatility: f64,
    /// Spot prices, end inclusive
    pub spot_grid: SweepGrid,
    /// Expiries, end exclusive
    pub expiry_grid: SweepGrid,
}

impl Default for MonotonicityConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            expiry: 1.0,
            rate: 0.05,
            volatility: 0.2,
            spot_grid: SweepGrid::new(50.0, 150.0, 10.0),
            expiry_grid: SweepGrid::new(0.01, 1.0, 0.1),
        }
    }
}

impl MonotonicityConfig {
    /// Base call parameters shared by both sweeps.
    pub fn base_params(&self) -> Result<OptionParams, ConfigError> {
        OptionParams::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            OptionType::Call,
        )
        .map_err(|e| ConfigError::InvalidGrid {
            name: "monotonicity",
            reason: e.to_string(),
        })
    }

    /// Checks the base parameters and both grids.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_params()?;
        self.spot_grid.validate("spot", true)?;
        self.expiry_grid.validate("expiry", false)
    }
}

/// Diversity-maximizing selection configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiversityConfig {
    /// Number of cases to select (capped at the pool size)
    pub top_n: usize,
    /// Replacement pool; the built-in six-case pool when absent
    pub pool: Option<Vec<TestCase>>,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self {
            top_n: 3,
            pool: None,
        }
    }
}

impl DiversityConfig {
    /// The pool to select from.
    pub fn pool(&self) -> Vec<TestCase> {
        self.pool.clone().unwrap_or_else(default_pool)
    }
}

/// Randomized fuzzing configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FuzzConfig {
    /// Number of random trials
    pub trials: usize,
    /// RNG seed; the same seed replays the same trials
    pub seed: u64,
    /// Spot sampling range
    pub spot: ParamRange,
    /// Strike sampling range
    pub strike: ParamRange,
    /// Expiry sampling range
    pub expiry: ParamRange,
    /// Rate sampling range
    pub rate: ParamRange,
    /// Volatility sampling range
    pub volatility: ParamRange,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            seed: DEFAULT_SEED,
            spot: ParamRange::new(50.0, 150.0),
            strike: ParamRange::new(50.0, 150.0),
            expiry: ParamRange::new(0.01, 2.0),
            rate: ParamRange::new(0.0, 0.1),
            volatility: ParamRange::new(0.1, 0.5),
        }
    }
}

impl FuzzConfig {
    /// Checks the trial count and every sampling range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 || self.trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrials(self.trials));
        }
        // Ranges may deliberately reach invalid inputs; only shape is checked
        self.spot.validate("spot")?;
        self.strike.validate("strike")?;
        self.expiry.validate("expiry")?;
        self.rate.validate("rate")?;
        self.volatility.validate("volatility")
    }
}

/// Complete harness configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Monotonicity sweep settings
    pub monotonicity: MonotonicityConfig,
    /// Diversity selection settings
    pub diversity: DiversityConfig,
    /// Fuzzing settings
    pub fuzzing: FuzzConfig,
}

impl HarnessConfig {
    /// Loads configuration from a TOML file and validates it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text and validates it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: HarnessConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.monotonicity.validate()?;
        self.fuzzing.validate()
    }
}
