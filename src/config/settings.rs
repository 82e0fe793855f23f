//! Analyzer configuration structures
//!
//! All scoring policy lives here as data: classifier thresholds, engagement
//! weights, per-factor rule parameters and tier boundaries. The same engine
//! can be retuned from a config file without code changes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub sentiment: SentimentConfig,
    pub engagement: EngagementWeights,
    pub factors: FactorConfig,
    pub tiers: TierBoundaries,
}

/// Classifier tuning. `lexicon_overrides` extends or overrides the built-in
/// crypto lexicon; weights are on the VADER -4..+4 scale.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SentimentConfig {
    pub pos_threshold: f64,
    pub neg_threshold: f64,
    /// Blend weight of the general-purpose VADER compound score.
    pub general_weight: f64,
    /// Blend weight of the crypto domain lexicon score.
    pub domain_weight: f64,
    pub lexicon_overrides: HashMap<String, f64>,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            pos_threshold: 0.05,
            neg_threshold: -0.05,
            general_weight: 0.6,
            domain_weight: 0.4,
            lexicon_overrides: HashMap::new(),
        }
    }
}

/// Per-interaction weights used to derive a mention's engagement weight:
/// `1 + view * views + retweet * retweets + like * likes`. Retweets and
/// likes default higher as stronger engagement signals.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EngagementWeights {
    pub view: f64,
    pub retweet: f64,
    pub like: f64,
}

impl Default for EngagementWeights {
    fn default() -> Self {
        Self {
            view: 1.0,
            retweet: 2.0,
            like: 3.0,
        }
    }
}

/// Parameters of the on-chain factor rules. Thresholds are data, not
/// control flow; swapping a value retunes the rule without touching the
/// evaluator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FactorConfig {
    pub insider_multiplier: f64,
    pub sniper_multiplier: f64,
    pub bundler_contribution: f64,
    pub lp_unburned_contribution: f64,
    /// Liquidity below `critical_ratio * market_cap` contributes
    /// `critical_contribution`; below `thin_ratio * market_cap`,
    /// `thin_contribution`; else zero.
    pub liquidity_critical_ratio: f64,
    pub liquidity_thin_ratio: f64,
    pub liquidity_critical_contribution: f64,
    pub liquidity_thin_contribution: f64,
    /// Scale applied to negative weighted sentiment.
    pub sentiment_weight: f64,
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            insider_multiplier: 2.0,
            sniper_multiplier: 1.5,
            bundler_contribution: 30.0,
            lp_unburned_contribution: 25.0,
            liquidity_critical_ratio: 0.05,
            liquidity_thin_ratio: 0.15,
            liquidity_critical_contribution: 40.0,
            liquidity_thin_contribution: 20.0,
            sentiment_weight: 50.0,
        }
    }
}

/// Tier mapping: `score < low_max` is LOW, `score <= medium_max` is MEDIUM,
/// anything above is HIGH.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TierBoundaries {
    pub low_max: f64,
    pub medium_max: f64,
}

impl Default for TierBoundaries {
    fn default() -> Self {
        Self {
            low_max: 40.0,
            medium_max: 70.0,
        }
    }
}

impl AnalyzerConfig {
    pub fn load_from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}
