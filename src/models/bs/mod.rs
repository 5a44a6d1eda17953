// Closed-form Black-Scholes pricing for European calls and puts.
// Implied-volatility and Greeks are intentionally omitted to keep the
// lightweight focus of pricer-lib.

use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;
use crate::models::utils::norm_cdf;

/// Slack below zero tolerated as floating-point noise on deep
/// out-of-the-money inputs before a computed price is treated as a fault.
const NEGATIVE_PRICE_TOLERANCE: f64 = 1e-12;

/// Side of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Accepts `"call"`, `"put"` and the single-letter forms `"c"`, `"p"`,
    /// case-insensitive. Anything else is a validation error, never a
    /// silent fall-through.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::UnknownOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Immutable inputs for one pricing call.
///
/// Invariant: `underlying_price`, `strike_price`, `years_to_exp` and
/// `sigma` must be strictly positive and finite; `r` may be negative.
/// [`validate`](Self::validate) checks this once, at the entry point,
/// before any derived quantity is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInputs {
    /// Option type: call or put
    pub option_type: OptionType,
    /// Underlying asset price
    pub underlying_price: f64,
    /// Strike price
    pub strike_price: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Risk-free annual rate (may be negative)
    pub r: f64,
    /// Annualized volatility (as decimal, e.g., 0.25 for 25%)
    pub sigma: f64,
}

impl PricingInputs {
    pub fn new(
        option_type: OptionType,
        underlying_price: f64,
        strike_price: f64,
        years_to_exp: f64,
        r: f64,
        sigma: f64,
    ) -> Self {
        Self {
            option_type,
            underlying_price,
            strike_price,
            years_to_exp,
            r,
            sigma,
        }
    }

    /// Check that the inputs lie in the domain of the formula.
    ///
    /// S <= 0 or K <= 0 would put the logarithm out of domain; T <= 0 or
    /// sigma <= 0 would divide by zero. Each violation is reported with the
    /// offending field and value instead of propagating NaN/Inf.
    pub fn validate(&self) -> Result<(), PricingError> {
        let positive_fields = [
            ("underlying_price", self.underlying_price),
            ("strike_price", self.strike_price),
            ("years_to_exp", self.years_to_exp),
            ("sigma", self.sigma),
        ];
        for (field, value) in positive_fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(PricingError::InvalidInput { field, value });
            }
        }
        if !self.r.is_finite() {
            return Err(PricingError::InvalidInput {
                field: "r",
                value: self.r,
            });
        }
        Ok(())
    }

    /// Theoretical price for these inputs. See [`price`].
    pub fn price(&self) -> Result<f64, PricingError> {
        price(self)
    }

    /// Price rounded for display. See [`price_rounded`].
    pub fn price_rounded(&self, decimals: u32) -> Result<f64, PricingError> {
        price_rounded(self, decimals)
    }

    /// Price of the call with the same S, K, T, r, sigma.
    pub fn call_price(&self) -> Result<f64, PricingError> {
        price(&Self {
            option_type: OptionType::Call,
            ..*self
        })
    }

    /// Price of the put with the same S, K, T, r, sigma.
    pub fn put_price(&self) -> Result<f64, PricingError> {
        price(&Self {
            option_type: OptionType::Put,
            ..*self
        })
    }
}

/// Price together with the auxiliary quantities it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub price: f64,
    pub d1: f64,
    pub d2: f64,
}

/// d1 = (ln(S/K) + (r + sigma^2/2) * T) / (sigma * sqrt(T))
///
/// Validates the inputs first; precondition violations surface as
/// [`PricingError::InvalidInput`].
pub fn d1(inputs: &PricingInputs) -> Result<f64, PricingError> {
    inputs.validate()?;
    Ok(d1_unchecked(inputs))
}

fn d1_unchecked(inputs: &PricingInputs) -> f64 {
    let s = inputs.underlying_price;
    let k = inputs.strike_price;
    let t = inputs.years_to_exp;
    ((s / k).ln() + (inputs.r + 0.5 * inputs.sigma.powi(2)) * t) / (inputs.sigma * t.sqrt())
}

/// d2 = d1 - sigma * sqrt(T)
///
/// Takes the d1 already computed for this pricing call; d1 is never
/// recomputed and never cached behind the caller's back.
pub fn d2(inputs: &PricingInputs, d1: f64) -> f64 {
    d1 - inputs.sigma * inputs.years_to_exp.sqrt()
}

/// Theoretical price of a European option under Black-Scholes assumptions.
///
/// Call: `S * N(d1) - K * exp(-r*T) * N(d2)`
/// Put:  `K * exp(-r*T) * N(-d2) - S * N(-d1)`
///
/// Pure function of its inputs: validation happens once up front, d1 is
/// computed once and d2 derived from it, and the result is guaranteed
/// finite and non-negative.
///
/// # Errors
///
/// * [`PricingError::InvalidInput`] if S, K, T or sigma is non-positive or
///   non-finite
/// * [`PricingError::NumericEvaluation`] if the CDF or the final price
///   comes out non-finite despite valid inputs
pub fn price(inputs: &PricingInputs) -> Result<f64, PricingError> {
    Ok(price_detailed(inputs)?.price)
}

/// Same as [`price`], but returns d1 and d2 alongside the price.
pub fn price_detailed(inputs: &PricingInputs) -> Result<PricingResult, PricingError> {
    inputs.validate()?;

    let d1 = d1_unchecked(inputs);
    let d2 = d2(inputs, d1);
    if !d1.is_finite() || !d2.is_finite() {
        return Err(PricingError::NumericEvaluation {
            context: "d1/d2 evaluated to a non-finite value",
            inputs: *inputs,
        });
    }

    let s = inputs.underlying_price;
    let k = inputs.strike_price;
    let discount = (-inputs.r * inputs.years_to_exp).exp();
    let price = match inputs.option_type {
        OptionType::Call => s * norm_cdf(d1) - k * discount * norm_cdf(d2),
        OptionType::Put => k * discount * norm_cdf(-d2) - s * norm_cdf(-d1),
    };

    if !price.is_finite() {
        return Err(PricingError::NumericEvaluation {
            context: "price evaluated to a non-finite value",
            inputs: *inputs,
        });
    }
    if price < 0.0 {
        if price > -NEGATIVE_PRICE_TOLERANCE {
            return Ok(PricingResult { price: 0.0, d1, d2 });
        }
        return Err(PricingError::NumericEvaluation {
            context: "price evaluated to a negative value",
            inputs: *inputs,
        });
    }

    Ok(PricingResult { price, d1, d2 })
}

/// [`price`] rounded to `decimals` places for display.
///
/// Rounding is a presentation concern only; any further computation must
/// use the unrounded value.
pub fn price_rounded(inputs: &PricingInputs, decimals: u32) -> Result<f64, PricingError> {
    Ok(round_to(price(inputs)?, decimals))
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10.0_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
