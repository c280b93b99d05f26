//! Analytical pricing formulas for European options.
//!
//! This module provides the Black-Scholes closed-form solution for
//! European calls and puts, together with the standard normal
//! distribution helpers it depends on.
//!
//! ## Design Principles
//!
//! - **Validate at the boundary**: inputs are checked once, when
//!   `OptionParams` is built, and rejected rather than clamped
//! - **Numerical Stability**: erfc-based CDF keeps tail precision
//! - **Pure evaluation**: no state, no side effects beyond `tracing` events

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{black_scholes_price, price_with_type_str, BlackScholes, PriceBreakdown};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::{AnalyticalError, Parameter};
