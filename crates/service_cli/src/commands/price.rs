//! Price command implementation
//!
//! Prices a single European option and optionally prints the intermediate
//! terms of the formula.

use pricer_models::analytical::{price_with_type_str, BlackScholes, PriceBreakdown};
use pricer_models::instruments::{OptionParams, OptionType};
use tracing::info;

use crate::Result;

/// Inputs for one pricing request.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRequest {
    pub spot: f64,
    pub strike: f64,
    pub expiry: f64,
    pub rate: f64,
    pub volatility: f64,
    pub option_type: String,
}

impl Default for PriceRequest {
    /// S=100, K=100, T=1, r=0.05, σ=0.2, call
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            expiry: 1.0,
            rate: 0.05,
            volatility: 0.2,
            option_type: OptionType::Call.to_string(),
        }
    }
}

/// Priced request, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceOutput {
    pub option_type: OptionType,
    pub price: f64,
    pub breakdown: Option<PriceBreakdown>,
}

impl PriceOutput {
    fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(b) = &self.breakdown {
            lines.push(format!("d1 numerator:   {:.6}", b.d1_numerator));
            lines.push(format!("d1 denominator: {:.6}", b.d1_denominator));
            lines.push(format!("d1:             {:.6}", b.d1));
            lines.push(format!("d2:             {:.6}", b.d2));
        }
        lines.push(format!(
            "Black-Scholes {} option price: {:.4}",
            self.option_type, self.price
        ));
        lines
    }
}

/// Prices the request.
pub fn evaluate(request: &PriceRequest, explain: bool) -> Result<PriceOutput> {
    let price = price_with_type_str(
        request.spot,
        request.strike,
        request.expiry,
        request.rate,
        request.volatility,
        &request.option_type,
    )?;
    let option_type: OptionType = request.option_type.parse()?;

    let breakdown = if explain {
        let params = OptionParams::new(
            request.spot,
            request.strike,
            request.expiry,
            request.rate,
            request.volatility,
            option_type,
        )?;
        Some(BlackScholes::new(params).breakdown())
    } else {
        None
    };

    Ok(PriceOutput {
        option_type,
        price,
        breakdown,
    })
}

/// Run the price command
pub fn run(request: &PriceRequest, explain: bool) -> Result<()> {
    info!(?request, explain, "pricing");
    let output = evaluate(request, explain)?;
    for line in output.lines() {
        println!("{}", line);
    }
    Ok(())
}
