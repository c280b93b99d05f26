//! # Pricer Models: European Option Valuation
//!
//! Closed-form Black-Scholes pricing for European call and put options.
//!
//! This crate provides:
//! - Option definitions: [`instruments::OptionType`], [`instruments::OptionParams`]
//! - The standard normal CDF/PDF ([`analytical::distributions`])
//! - The Black-Scholes formula and its intermediate terms ([`analytical::black_scholes`])
//! - Structured errors for rejected inputs ([`analytical::AnalyticalError`])
//!
//! ## Usage
//!
//! ```rust
//! use pricer_models::analytical::black_scholes_price;
//! use pricer_models::instruments::OptionType;
//!
//! let price = black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap();
//! assert!((price - 10.4506).abs() < 1e-3);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for `OptionType`, `OptionParams` and `Parameter`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
