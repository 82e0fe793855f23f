//! Report assembly
//!
//! Pure constructor for the final report. Validates the invariants the
//! upstream stages promise (ratio sum, bounded score and contributions)
//! and fails loudly instead of clamping when one is broken.

use tracing::debug;

use crate::core::{AggregatedSentiment, RiskFactor, RiskReport, RiskTier, ValidationError};

const RATIO_TOLERANCE: f64 = 1e-6;

/// Assemble and validate one immutable report. A `ValidationError` here
/// means a logic bug upstream, fatal to this request.
pub fn assemble(
    sentiment: AggregatedSentiment,
    factors: Vec<RiskFactor>,
    score: f64,
    tier: RiskTier,
) -> Result<RiskReport, ValidationError> {
    let ratios = [
        ("positive_ratio", sentiment.positive_ratio),
        ("negative_ratio", sentiment.negative_ratio),
        ("neutral_ratio", sentiment.neutral_ratio),
    ];
    for (name, value) in ratios {
        if !(0.0..=1.0).contains(&value) || !value.is_finite() {
            return Err(ValidationError::RatioRange { name, value });
        }
    }

    let ratio_sum =
        sentiment.positive_ratio + sentiment.negative_ratio + sentiment.neutral_ratio;
    if sentiment.mention_count == 0 {
        if ratio_sum != 0.0 {
            return Err(ValidationError::RatioSum { sum: ratio_sum });
        }
    } else if (ratio_sum - 1.0).abs() > RATIO_TOLERANCE {
        return Err(ValidationError::RatioSum { sum: ratio_sum });
    }

    if !score.is_finite() || !(0.0..=100.0).contains(&score) {
        return Err(ValidationError::ScoreRange(score));
    }

    for factor in &factors {
        if !factor.contribution.is_finite() || !(0.0..=100.0).contains(&factor.contribution) {
            return Err(ValidationError::FactorRange {
                name: factor.name.clone(),
                contribution: factor.contribution,
            });
        }
    }

    debug!(score, ?tier, factors = factors.len(), "report assembled");

    Ok(RiskReport {
        score,
        tier,
        factors,
        sentiment,
    })
}
