//! TOML-loadable pricing scenarios.
//!
//! A scenario file holds one pricing request as plain key/value pairs, so
//! the CLI and demos can price without hardcoded globals:
//!
//! ```toml
//! option_type = "call"
//! underlying_price = 30.0
//! strike_price = 40.0
//! years_to_exp = 0.6575342465753424   # 240/365
//! r = 0.01
//! sigma = 0.30
//! round_to = 2
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::PricingError;
use crate::models::bs::{OptionType, PricingInputs};

/// One pricing request as it appears in a scenario file.
///
/// Scalar fields mirror [`PricingInputs`]; `option_type` stays a string
/// until [`to_inputs`](Self::to_inputs) parses and validates it, so a typo
/// in the file is reported as a validation error rather than a serde one.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingScenario {
    /// Option type: "call" or "put"
    pub option_type: String,
    /// Underlying asset price
    pub underlying_price: f64,
    /// Strike price
    pub strike_price: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Risk-free annual rate
    #[serde(default = "default_rate")]
    pub r: f64,
    /// Annualized volatility (as decimal)
    pub sigma: f64,
    /// Decimal places for display rounding (None = full precision)
    #[serde(default)]
    pub round_to: Option<u32>,
}

fn default_rate() -> f64 {
    0.02
}

impl PricingScenario {
    /// Parse a scenario from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let scenario = toml::from_str(raw).context("failed to parse pricing scenario")?;
        Ok(scenario)
    }

    /// Load a scenario from a TOML file.
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario file {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("failed to parse scenario file {}", path.display()))
    }

    /// Convert to validated [`PricingInputs`].
    ///
    /// Parses the option-type string and runs the domain checks, so a
    /// scenario that prices has already passed full validation.
    pub fn to_inputs(&self) -> Result<PricingInputs, PricingError> {
        let option_type: OptionType = self.option_type.parse()?;
        let inputs = PricingInputs::new(
            option_type,
            self.underlying_price,
            self.strike_price,
            self.years_to_exp,
            self.r,
            self.sigma,
        );
        inputs.validate()?;
        Ok(inputs)
    }

    /// The classic worked example: an out-of-the-money call with 240 days
    /// to run, worth about $0.51.
    pub fn demo() -> Self {
        Self {
            option_type: "call".to_string(),
            underlying_price: 30.0,
            strike_price: 40.0,
            years_to_exp: 240.0 / 365.0,
            r: 0.01,
            sigma: 0.30,
            round_to: Some(2),
        }
    }
}
