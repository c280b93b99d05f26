//! Option definitions.
//!
//! - [`OptionType`]: the call/put discriminator
//! - [`OptionParams`]: validated inputs for one evaluation
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{OptionParams, OptionType};
//!
//! let kind: OptionType = "put".parse().unwrap();
//! let params = OptionParams::new(95.0, 100.0, 2.0, 0.04, 0.3, kind).unwrap();
//! assert!(params.option_type().is_put());
//! ```

mod option_type;
mod params;

pub use option_type::OptionType;
pub use params::OptionParams;
