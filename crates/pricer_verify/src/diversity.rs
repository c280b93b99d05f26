//! Diversity-maximizing test case selection.
//!
//! Scores each case in a pool by its L1 distance from the pool centroid
//! over (S, K, T, r, σ), keeps the `n` farthest cases and prices them.
//! Selection is greedy against the centroid; there is no pairwise
//! distance between selected cases.

use std::fmt;

use pricer_models::analytical::{AnalyticalError, BlackScholes};
use pricer_models::instruments::{OptionParams, OptionType};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::report::{status_tag, CheckFamily};

/// One pricing scenario in the selection pool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestCase {
    /// Human-readable name
    #[serde(default)]
    pub label: String,
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiry in years (T)
    pub expiry: f64,
    /// Risk-free rate (r)
    pub rate: f64,
    /// Volatility (σ)
    pub volatility: f64,
    /// Call or put
    pub option_type: OptionType,
    /// L1 distance from the pool centroid; 0 until scored
    #[serde(skip)]
    pub diversity_score: f64,
}

impl TestCase {
    /// Creates an unscored case.
    pub fn new(
        label: impl Into<String>,
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            label: label.into(),
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
            diversity_score: 0.0,
        }
    }

    /// Validated pricing parameters for this case.
    pub fn params(&self) -> Result<OptionParams, AnalyticalError> {
        OptionParams::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.option_type,
        )
    }

    /// Prices the case.
    pub fn price(&self) -> Result<f64, AnalyticalError> {
        Ok(BlackScholes::new(self.params()?).price())
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}, {}]",
            self.spot, self.strike, self.expiry, self.rate, self.volatility
        )
    }
}

/// The built-in six-case pool.
pub fn default_pool() -> Vec<TestCase> {
    vec![
        TestCase::new("slightly OTM call", 90.0, 100.0, 1.0, 0.03, 0.2, OptionType::Call),
        TestCase::new("short-dated OTM put", 110.0, 100.0, 0.5, 0.05, 0.25, OptionType::Put),
        TestCase::new("long-dated ITM call", 120.0, 100.0, 1.5, 0.02, 0.3, OptionType::Call),
        TestCase::new("low-vol ITM put", 80.0, 100.0, 0.75, 0.01, 0.15, OptionType::Put),
        TestCase::new("ATM call", 100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call),
        TestCase::new("two-year ITM put", 95.0, 100.0, 2.0, 0.04, 0.3, OptionType::Put),
    ]
}

/// Componentwise mean of a pool over (S, K, T, r, σ).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    /// Mean spot
    pub spot: f64,
    /// Mean strike
    pub strike: f64,
    /// Mean expiry
    pub expiry: f64,
    /// Mean rate
    pub rate: f64,
    /// Mean volatility
    pub volatility: f64,
}

impl Centroid {
    /// Computes the centroid; `None` for an empty pool.
    pub fn of(pool: &[TestCase]) -> Option<Self> {
        if pool.is_empty() {
            return None;
        }
        let n = pool.len() as f64;
        let mean = |field: fn(&TestCase) -> f64| pool.iter().map(field).sum::<f64>() / n;
        Some(Self {
            spot: mean(|c| c.spot),
            strike: mean(|c| c.strike),
            expiry: mean(|c| c.expiry),
            rate: mean(|c| c.rate),
            volatility: mean(|c| c.volatility),
        })
    }
}

/// L1 distance between a case and the centroid.
#[inline]
pub fn diversity_score(case: &TestCase, centroid: &Centroid) -> f64 {
    (case.spot - centroid.spot).abs()
        + (case.strike - centroid.strike).abs()
        + (case.expiry - centroid.expiry).abs()
        + (case.rate - centroid.rate).abs()
        + (case.volatility - centroid.volatility).abs()
}

/// Selects the `n` cases farthest from the pool centroid.
///
/// Every case is scored, then sorted by descending score. The sort is
/// stable, so ties keep pool order. At most `pool.len()` cases are
/// returned; an empty pool yields an empty selection.
///
/// # Examples
/// ```
/// use pricer_verify::diversity::{default_pool, select_diverse};
///
/// let selected = select_diverse(&default_pool(), 3);
/// let spots: Vec<f64> = selected.iter().map(|c| c.spot).collect();
/// assert_eq!(spots, vec![120.0, 80.0, 110.0]);
/// ```
pub fn select_diverse(pool: &[TestCase], n: usize) -> Vec<TestCase> {
    let Some(centroid) = Centroid::of(pool) else {
        return Vec::new();
    };

    let mut scored: Vec<TestCase> = pool
        .iter()
        .map(|case| TestCase {
            diversity_score: diversity_score(case, &centroid),
            ..case.clone()
        })
        .collect();
    scored.sort_by(|a, b| b.diversity_score.total_cmp(&a.diversity_score));
    scored.truncate(n);
    scored
}

/// Pricing result for one selected case.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    /// The scored case
    pub case: TestCase,
    /// Price, or the engine's rejection
    pub result: Result<f64, AnalyticalError>,
}

/// Outcome of the diversity selection family.
#[derive(Debug, Clone, PartialEq)]
pub struct DiversityReport {
    /// Size of the pool selected from
    pub pool_size: usize,
    /// Selected cases in selection order
    pub outcomes: Vec<CaseOutcome>,
}

impl DiversityReport {
    /// True when every selected case priced.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Number of selected cases the engine rejected.
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }
}

impl fmt::Display for DiversityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}: {} of {} cases selected, {} failed",
            status_tag(self.passed()),
            CheckFamily::DiversitySelection,
            self.outcomes.len(),
            self.pool_size,
            self.failures()
        )?;
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(price) => writeln!(f, "  Test Case {}: {:.6}", outcome.case, price)?,
                Err(err) => writeln!(f, "  Test Case {}: Error: {}", outcome.case, err)?,
            }
        }
        Ok(())
    }
}

/// Selects the `n` most diverse cases from `pool` and prices each.
///
/// A rejected case is logged and recorded; the remaining cases still run.
pub fn run_diversity(pool: &[TestCase], n: usize) -> DiversityReport {
    info!(pool_size = pool.len(), top_n = n, "running {}", CheckFamily::DiversitySelection);

    let outcomes: Vec<CaseOutcome> = select_diverse(pool, n)
        .into_iter()
        .map(|case| {
            let result = case.price();
            match &result {
                Ok(price) => debug!(
                    label = %case.label,
                    score = case.diversity_score,
                    price,
                    "diverse case priced"
                ),
                Err(err) => warn!(
                    label = %case.label,
                    case = %case,
                    error = %err,
                    "diverse case rejected"
                ),
            }
            CaseOutcome { case, result }
        })
        .collect();

    DiversityReport {
        pool_size: pool.len(),
        outcomes,
    }
}
