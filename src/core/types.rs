//! Pipeline value types. Each stage produces a new immutable value consumed
//! by the next; nothing is shared or mutated after construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::InputError;

/// One social-media post referencing a token, as delivered by a mention
/// source. Immutable once ingested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mention {
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub author_id: String,
    pub author_username: String,
    pub view_count: u64,
    pub retweet_count: u64,
    pub like_count: u64,
    pub follower_count: u64,
}

impl Mention {
    /// Structural check on ingested data. Counts are unsigned so negative
    /// values are unrepresentable; only identity fields can be malformed.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.author_id.is_empty() {
            return Err(InputError::MissingField("author_id"));
        }
        Ok(())
    }
}

/// Sentiment label assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// A mention plus its classification. Derived, never mutated after creation.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedMention {
    #[serde(flatten)]
    pub mention: Mention,
    pub label: Sentiment,
    /// Polarity in [-1, 1].
    pub score: f64,
}

/// Token-level sentiment and engagement statistics folded out of a mention
/// sequence. When `mention_count` is zero every ratio and the weighted
/// sentiment are 0 (neutral default, never NaN).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedSentiment {
    pub mention_count: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    pub neutral_ratio: f64,
    /// Unweighted mean of sentiment scores, in [-1, 1].
    pub mean_sentiment: f64,
    /// Engagement-weighted mean of sentiment scores, in [-1, 1].
    pub weighted_sentiment: f64,
    /// Raw views + retweets + likes across all mentions.
    pub total_engagement: u64,
}

impl AggregatedSentiment {
    /// The all-zero aggregate for an empty mention sequence.
    pub fn empty() -> Self {
        Self {
            mention_count: 0,
            positive_count: 0,
            negative_count: 0,
            neutral_count: 0,
            positive_ratio: 0.0,
            negative_ratio: 0.0,
            neutral_ratio: 0.0,
            mean_sentiment: 0.0,
            weighted_sentiment: 0.0,
            total_engagement: 0,
        }
    }
}

/// On-chain snapshot for a token. Every field is optional: a source that
/// cannot observe a signal leaves it `None` and the matching risk rule
/// degrades to a zero contribution instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnChainMetrics {
    pub market_cap: Option<f64>,
    pub liquidity: Option<f64>,
    pub insider_holding_pct: Option<f64>,
    pub sniper_activity_pct: Option<f64>,
    pub bundler_present: Option<bool>,
    pub lp_burned: Option<bool>,
}

impl OnChainMetrics {
    /// Structural check: present numeric fields must be finite and
    /// non-negative. Absent fields are fine.
    pub fn validate(&self) -> Result<(), InputError> {
        let fields = [
            ("market_cap", self.market_cap),
            ("liquidity", self.liquidity),
            ("insider_holding_pct", self.insider_holding_pct),
            ("sniper_activity_pct", self.sniper_activity_pct),
        ];
        for (name, value) in fields {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(InputError::InvalidValue {
                        field: name,
                        value: v.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// One named, bounded contribution to the overall risk score with a
/// human-readable rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    /// Contribution in [0, 100] before normalization.
    pub contribution: f64,
    pub rationale: String,
}

/// Discrete risk bucket derived from the numeric score via fixed boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// Final assessment for one token. Produced exactly once per analysis
/// request; flat and serializable, no shared state across requests.
#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    /// Composite risk score in [0, 100].
    pub score: f64,
    pub tier: RiskTier,
    /// Factors in evaluation order, sentiment last.
    pub factors: Vec<RiskFactor>,
    pub sentiment: AggregatedSentiment,
}

/// Token identifier accepted by data sources: contract address plus an
/// optional ticker symbol for text search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenQuery {
    pub address: String,
    pub symbol: Option<String>,
}

impl TokenQuery {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            symbol: None,
        }
    }

    pub fn with_symbol(address: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            symbol: Some(symbol.into()),
        }
    }
}

/// An author whose mentions carry outsized reach, ranked by a weighted
/// blend of followers and engagement.
#[derive(Debug, Clone, Serialize)]
pub struct Influencer {
    pub username: String,
    pub followers: u64,
    pub influence_score: f64,
}

/// Everything the analyzer produces for one token in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct TokenAnalysis {
    pub token: TokenQuery,
    pub report: RiskReport,
    pub influencers: Vec<Influencer>,
    pub analyzed_at: DateTime<Utc>,
}
