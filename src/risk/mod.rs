//! On-chain risk factor evaluation and composite scoring

pub mod factors;
pub mod scoring;

pub use factors::{FactorRule, RiskFactorEvaluator};
pub use scoring::{tier_for, RiskScoringEngine};
