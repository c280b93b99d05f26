//! Seeded pseudo-random number generator for randomized verification.
//!
//! This module provides [`HarnessRng`], a seeded PRNG wrapper so that every
//! fuzzing run can be replayed exactly from its seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pricer_models::instruments::OptionType;

use crate::config::ParamRange;

/// Randomized-test random number generator.
///
/// # Examples
///
/// ```rust
/// use pricer_verify::config::ParamRange;
/// use pricer_verify::rng::HarnessRng;
///
/// let mut rng1 = HarnessRng::from_seed(7);
/// let mut rng2 = HarnessRng::from_seed(7);
/// let range = ParamRange::new(50.0, 150.0);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.uniform_in(range), rng2.uniform_in(range));
/// ```
pub struct HarnessRng {
    inner: StdRng,
    seed: u64,
}

impl HarnessRng {
    /// Creates a new RNG instance initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a value uniformly from the closed interval `[min, max]`.
    ///
    /// A degenerate range (`min == max`) always returns `min`.
    #[inline]
    pub fn uniform_in(&mut self, range: ParamRange) -> f64 {
        if range.min == range.max {
            return range.min;
        }
        self.inner.gen_range(range.min..=range.max)
    }

    /// Draws an option kind, call and put with equal probability.
    #[inline]
    pub fn option_type(&mut self) -> OptionType {
        if self.inner.gen_bool(0.5) {
            OptionType::Call
        } else {
            OptionType::Put
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_recorded() {
        assert_eq!(HarnessRng::from_seed(12345).seed(), 12345);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let range = ParamRange::new(0.01, 2.0);
        let mut a = HarnessRng::from_seed(99);
        let mut b = HarnessRng::from_seed(99);
        for _ in 0..100 {
            assert_eq!(a.uniform_in(range).to_bits(), b.uniform_in(range).to_bits());
            assert_eq!(a.option_type(), b.option_type());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let range = ParamRange::new(0.0, 1.0);
        let mut a = HarnessRng::from_seed(1);
        let mut b = HarnessRng::from_seed(2);
        let xs: Vec<f64> = (0..10).map(|_| a.uniform_in(range)).collect();
        let ys: Vec<f64> = (0..10).map(|_| b.uniform_in(range)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_uniform_stays_in_range() {
        let range = ParamRange::new(50.0, 150.0);
        let mut rng = HarnessRng::from_seed(42);
        for _ in 0..10_000 {
            let x = rng.uniform_in(range);
            assert!((50.0..=150.0).contains(&x), "{} outside [50, 150]", x);
        }
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = HarnessRng::from_seed(42);
        assert_eq!(rng.uniform_in(ParamRange::new(0.05, 0.05)), 0.05);
    }

    #[test]
    fn test_both_option_types_drawn() {
        let mut rng = HarnessRng::from_seed(42);
        let calls = (0..1000).filter(|_| rng.option_type().is_call()).count();
        assert!(calls > 400 && calls < 600, "calls = {}", calls);
    }
}
