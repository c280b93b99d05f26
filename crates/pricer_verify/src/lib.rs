//! # pricer_verify: Verification Harness for the Black-Scholes Engine
//!
//! Exercises `pricer_models` with three check families, run in order:
//!
//! 1. **Monotonicity sweep** ([`monotonicity`]): call prices non-decreasing
//!    in spot and non-negative across expiries.
//! 2. **Diversity selection** ([`diversity`]): the cases farthest from the
//!    pool centroid are selected and priced.
//! 3. **Randomized fuzzing** ([`fuzzing`]): seeded random parameter sets,
//!    reproducible from the seed.
//!
//! Invariant violations abort the run; rejected inputs are recorded and
//! the run continues.
//!
//! ## Usage
//!
//! ```
//! use pricer_verify::{run_harness, HarnessConfig};
//!
//! let mut config = HarnessConfig::default();
//! config.fuzzing.seed = 7;
//!
//! let report = run_harness(&config).unwrap();
//! assert!(report.all_passed());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod diversity;
pub mod error;
pub mod fuzzing;
pub mod harness;
pub mod monotonicity;
pub mod report;
pub mod rng;

pub use config::HarnessConfig;
pub use error::{ConfigError, VerifyError};
pub use harness::run_harness;
pub use report::{CheckFamily, HarnessReport};
