//! Pricing error types.

use thiserror::Error;

use crate::models::bs::PricingInputs;

/// Errors produced while validating inputs or evaluating the pricing formula.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// One of S, K, T, sigma is outside the domain of the formula. Detected
    /// before any derived quantity is computed.
    #[error("invalid input: {field} must be strictly positive and finite, got {value}")]
    InvalidInput { field: &'static str, value: f64 },

    /// Option type string not recognized
    #[error("invalid input: unrecognized option type {0:?} (expected \"call\" or \"put\")")]
    UnknownOptionType(String),

    /// The CDF or the final price came out non-finite (or materially
    /// negative) despite valid inputs. Carries the inputs that triggered it.
    #[error("numeric evaluation failed: {context} ({inputs:?})")]
    NumericEvaluation {
        context: &'static str,
        inputs: PricingInputs,
    },
}
