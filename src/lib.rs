//! # Pricer-Lib: Closed-Form Black-Scholes Option Pricing
//!
//! `pricer-lib` is a lightweight Rust library for pricing European call and
//! put options with the Black-Scholes closed-form formula. It maps five
//! scalars (spot, strike, time to expiration, risk-free rate, volatility)
//! and an option type to a theoretical price through the standard normal
//! cumulative distribution function.
//!
//! ## Core Features
//!
//! - **Closed-Form Pricing**: d1/d2 and the discounted present values of
//!   asset and strike, evaluated once per call with no hidden state
//! - **Validated Inputs**: domain violations surface as typed errors naming
//!   the offending field, never as silent NaN/Inf
//! - **Scenario Files**: TOML-described pricing requests for the CLI and
//!   demos (behind the default-on `serde` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use pricer_lib::{price_european, OptionType, PricingInputs};
//!
//! // An out-of-the-money call with 240 days to expiration
//! let inputs = PricingInputs::new(OptionType::Call, 30.0, 40.0, 240.0 / 365.0, 0.01, 0.30);
//! let price = price_european(&inputs)?;
//!
//! println!("Option price is {:.2}", price);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Non-Goals
//!
//! Market-data ingestion, calibration, implied-volatility solving, Greeks
//! and batch pricing are out of scope; each evaluation is an independent
//! pure computation.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
#[cfg(feature = "serde")]
pub mod scenario;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::PricingError;
pub use models::bs::{OptionType, PricingInputs, PricingResult};
#[cfg(feature = "serde")]
pub use scenario::PricingScenario;

// ================================================================================================
// TOP-LEVEL API
// ================================================================================================

/// Price a European option with the Black-Scholes closed-form formula.
///
/// For a call the price is `S * N(d1) - K * exp(-r*T) * N(d2)`; for a put
/// it is `K * exp(-r*T) * N(-d2) - S * N(-d1)`, where
/// `d1 = (ln(S/K) + (r + sigma^2/2) * T) / (sigma * sqrt(T))` and
/// `d2 = d1 - sigma * sqrt(T)`.
///
/// # Arguments
///
/// * `inputs` - The option contract: type, spot, strike, time to
///   expiration in years, risk-free rate and volatility
///
/// # Returns
///
/// The theoretical price: a finite, non-negative `f64`. Deep
/// out-of-the-money contracts may legitimately price very close to zero.
///
/// # Errors
///
/// * [`PricingError::InvalidInput`] if spot, strike, time to expiration or
///   volatility is non-positive or non-finite; validation runs before any
///   derived quantity is computed
/// * [`PricingError::NumericEvaluation`] if the CDF evaluation or the final
///   price comes out non-finite despite valid inputs — an internal fault
///   reported with the triggering inputs, never a silently returned price
///
/// # Example
///
/// ```rust
/// use pricer_lib::{price_european, OptionType, PricingInputs};
///
/// let call = PricingInputs::new(OptionType::Call, 100.0, 100.0, 1.0, 0.05, 0.20);
/// let price = price_european(&call)?;
/// assert!((price - 10.4506).abs() < 1e-3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn price_european(inputs: &PricingInputs) -> Result<f64, PricingError> {
    models::bs::price(inputs)
}

/// Price a European option and round the result for display.
///
/// Rounding is layered on top of [`price_european`] as a presentation
/// concern; the unrounded price is never altered and must be the value used
/// in any further computation.
pub fn price_european_rounded(
    inputs: &PricingInputs,
    decimals: u32,
) -> Result<f64, PricingError> {
    models::bs::price_rounded(inputs, decimals)
}
