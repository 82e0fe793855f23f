//! Composite risk scoring
//!
//! Combines aggregated sentiment with the on-chain factor contributions
//! into one bounded score and a discrete tier. Stateless and deterministic:
//! identical inputs always produce an identical report.

use crate::config::{FactorConfig, TierBoundaries};
use crate::core::{AggregatedSentiment, RiskFactor, RiskReport, RiskTier, ValidationError};
use crate::report;

pub struct RiskScoringEngine {
    sentiment_weight: f64,
    tiers: TierBoundaries,
    /// Raw contribution total of a maximally risky profile, sentiment
    /// included. The normalization constant is 100 / max_total.
    max_total: f64,
}

impl RiskScoringEngine {
    /// `factor_max_total` is the evaluator's `max_total()` for the rule set
    /// in use, so swapping rules retunes the normalization automatically.
    pub fn new(config: &FactorConfig, tiers: TierBoundaries, factor_max_total: f64) -> Self {
        Self {
            sentiment_weight: config.sentiment_weight,
            tiers,
            max_total: factor_max_total + config.sentiment_weight,
        }
    }

    /// Score one analysis. Appends the sentiment contribution as its own
    /// factor, normalizes, maps the tier and hands off to the assembler.
    pub fn score(
        &self,
        sentiment: &AggregatedSentiment,
        mut factors: Vec<RiskFactor>,
    ) -> Result<RiskReport, ValidationError> {
        let weighted = sentiment.weighted_sentiment;
        let contribution = (-weighted).max(0.0) * self.sentiment_weight;
        let rationale = if contribution > 0.0 {
            format!(
                "engagement-weighted sentiment {:.3} across {} mentions",
                weighted, sentiment.mention_count
            )
        } else {
            format!(
                "sentiment non-negative ({:.3}) across {} mentions",
                weighted, sentiment.mention_count
            )
        };
        factors.push(RiskFactor {
            name: "sentiment".to_string(),
            contribution,
            rationale,
        });

        let raw_total: f64 = factors.iter().map(|f| f.contribution).sum();
        let k = if self.max_total > 0.0 {
            100.0 / self.max_total
        } else {
            1.0
        };
        let score = (raw_total * k).min(100.0);
        let tier = tier_for(score, &self.tiers);

        report::assemble(sentiment.clone(), factors, score, tier)
    }
}

impl Default for RiskScoringEngine {
    fn default() -> Self {
        let factors = FactorConfig::default();
        let max_total = crate::risk::RiskFactorEvaluator::from_config(&factors).max_total();
        Self::new(&factors, TierBoundaries::default(), max_total)
    }
}

/// Tier is a pure function of the score: below `low_max` is LOW, up to and
/// including `medium_max` is MEDIUM, above is HIGH.
pub fn tier_for(score: f64, boundaries: &TierBoundaries) -> RiskTier {
    if score < boundaries.low_max {
        RiskTier::Low
    } else if score <= boundaries.medium_max {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor(name: &str, contribution: f64) -> RiskFactor {
        RiskFactor {
            name: name.to_string(),
            contribution,
            rationale: "test".to_string(),
        }
    }

    fn neutral_sentiment() -> AggregatedSentiment {
        AggregatedSentiment::empty()
    }

    #[test]
    fn test_tier_boundaries_are_exact() {
        let boundaries = TierBoundaries::default();
        assert_eq!(tier_for(0.0, &boundaries), RiskTier::Low);
        assert_eq!(tier_for(39.999, &boundaries), RiskTier::Low);
        assert_eq!(tier_for(40.0, &boundaries), RiskTier::Medium);
        assert_eq!(tier_for(70.0, &boundaries), RiskTier::Medium);
        assert_eq!(tier_for(70.0001, &boundaries), RiskTier::High);
        assert_eq!(tier_for(100.0, &boundaries), RiskTier::High);
    }

    #[test]
    fn test_negative_sentiment_raises_risk() {
        let engine = RiskScoringEngine::default();
        let mut sentiment = neutral_sentiment();
        sentiment.mention_count = 50;
        sentiment.neutral_count = 50;
        sentiment.neutral_ratio = 1.0;
        sentiment.weighted_sentiment = -0.8;

        let report = engine.score(&sentiment, vec![]).unwrap();
        let sentiment_factor = report.factors.iter().find(|f| f.name == "sentiment").unwrap();
        assert!((sentiment_factor.contribution - 40.0).abs() < 1e-9);
        assert!(report.score > 0.0);
    }

    #[test]
    fn test_positive_sentiment_contributes_nothing() {
        let engine = RiskScoringEngine::default();
        let mut sentiment = neutral_sentiment();
        sentiment.mention_count = 10;
        sentiment.positive_count = 10;
        sentiment.positive_ratio = 1.0;
        sentiment.weighted_sentiment = 0.9;

        let report = engine.score(&sentiment, vec![]).unwrap();
        let sentiment_factor = report.factors.iter().find(|f| f.name == "sentiment").unwrap();
        assert_eq!(sentiment_factor.contribution, 0.0);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.tier, RiskTier::Low);
    }

    #[test]
    fn test_score_is_bounded_even_when_factors_pile_up() {
        let engine = RiskScoringEngine::default();
        let factors = vec![
            factor("insider_holding", 100.0),
            factor("sniper_activity", 100.0),
            factor("bundler_presence", 30.0),
            factor("lp_burn", 25.0),
            factor("liquidity_depth", 40.0),
        ];
        let mut sentiment = neutral_sentiment();
        sentiment.weighted_sentiment = -1.0;

        let report = engine.score(&sentiment, factors).unwrap();
        assert!(report.score <= 100.0);
        assert!((report.score - 100.0).abs() < 1e-9);
        assert_eq!(report.tier, RiskTier::High);
    }

    #[test]
    fn test_normalization_uses_rule_set_maximum() {
        // Default max_total = 295 + 50; a raw total of 195 lands mid-range.
        let engine = RiskScoringEngine::default();
        let factors = vec![
            factor("insider_holding", 100.0),
            factor("sniper_activity", 0.0),
            factor("bundler_presence", 30.0),
            factor("lp_burn", 25.0),
            factor("liquidity_depth", 40.0),
        ];
        let report = engine.score(&neutral_sentiment(), factors).unwrap();
        let expected = 195.0 * (100.0 / 345.0);
        assert!((report.score - expected).abs() < 1e-9);
        assert_eq!(report.tier, RiskTier::Medium);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let engine = RiskScoringEngine::default();
        let factors = || {
            vec![
                factor("insider_holding", 37.5),
                factor("lp_burn", 25.0),
            ]
        };
        let mut sentiment = neutral_sentiment();
        sentiment.mention_count = 7;
        sentiment.neutral_count = 7;
        sentiment.neutral_ratio = 1.0;
        sentiment.weighted_sentiment = -0.123_456;

        let a = engine.score(&sentiment, factors()).unwrap();
        let b = engine.score(&sentiment, factors()).unwrap();
        assert_eq!(a.score.to_bits(), b.score.to_bits());
        assert_eq!(a.tier, b.tier);
        assert_eq!(a.factors, b.factors);
    }

    #[test]
    fn test_custom_tier_boundaries() {
        let engine = RiskScoringEngine::new(
            &FactorConfig::default(),
            TierBoundaries {
                low_max: 10.0,
                medium_max: 20.0,
            },
            295.0,
        );
        let report = engine
            .score(&neutral_sentiment(), vec![factor("lp_burn", 100.0)])
            .unwrap();
        assert_eq!(report.tier, RiskTier::High);
    }
}
