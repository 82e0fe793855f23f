//! Rughound: sentiment and on-chain risk scoring for crypto tokens
//!
//! Classifies social-media mentions with a crypto-aware lexicon, folds them
//! into token-level sentiment statistics, evaluates on-chain risk signals
//! through swappable factor rules and combines everything into one bounded,
//! explainable risk score with a discrete tier.

pub mod aggregate;
pub mod analyzer;
pub mod config;
pub mod core;
pub mod report;
pub mod risk;
pub mod sentiment;
pub mod source;
pub mod util;

pub use crate::analyzer::{AnalysisError, TokenAnalyzer};
pub use crate::config::AnalyzerConfig;
pub use crate::core::{
    AggregatedSentiment, ClassifiedMention, Mention, OnChainMetrics, RiskFactor, RiskReport,
    RiskTier, Sentiment, TokenAnalysis, TokenQuery,
};
