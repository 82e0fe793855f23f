//! Error taxonomy for the scoring core

use thiserror::Error;

/// Malformed or missing required fields in caller-supplied data.
/// Surfaced to the caller, never retried.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    #[error("Invalid field value: {field} = {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// Internal invariant violated after computation. Always fatal to the
/// request, indicates a logic bug upstream of the assembler.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Sentiment ratios sum to {sum}, expected 1.0 within 1e-6")]
    RatioSum { sum: f64 },

    #[error("Ratio {name} = {value} outside [0, 1]")]
    RatioRange { name: &'static str, value: f64 },

    #[error("Risk score {0} outside [0, 100]")]
    ScoreRange(f64),

    #[error("Factor '{name}' contribution {contribution} outside [0, 100]")]
    FactorRange { name: String, contribution: f64 },
}
