//! Mention aggregation
//!
//! Folds classified mentions into token-level statistics. The reduction is
//! associative and commutative (sums and counts only), so large inputs are
//! split across rayon and merged from partial sums without changing the
//! result.

pub mod influence;

pub use influence::{rank_influencers, DEFAULT_MIN_FOLLOWERS};

use rayon::prelude::*;

use crate::config::EngagementWeights;
use crate::core::{AggregatedSentiment, ClassifiedMention, Sentiment};

/// Below this many mentions a sequential fold wins; above it the input is
/// partitioned across the rayon pool.
const PARALLEL_THRESHOLD: usize = 4096;

pub struct MentionAggregator {
    weights: EngagementWeights,
}

impl MentionAggregator {
    pub fn new(weights: EngagementWeights) -> Self {
        Self { weights }
    }

    /// Fold any finite mention sequence into aggregate statistics. Empty
    /// input yields the all-zero aggregate, never NaN.
    pub fn aggregate(&self, mentions: &[ClassifiedMention]) -> AggregatedSentiment {
        if mentions.is_empty() {
            return AggregatedSentiment::empty();
        }

        let partial = if mentions.len() >= PARALLEL_THRESHOLD {
            mentions
                .par_iter()
                .fold(PartialAggregate::default, |acc, m| {
                    acc.add(m, &self.weights)
                })
                .reduce(PartialAggregate::default, PartialAggregate::merge)
        } else {
            mentions.iter().fold(PartialAggregate::default(), |acc, m| {
                acc.add(m, &self.weights)
            })
        };

        partial.finish()
    }
}

impl Default for MentionAggregator {
    fn default() -> Self {
        Self::new(EngagementWeights::default())
    }
}

/// Order-independent partial sums for one partition of the mention
/// sequence. Two partials merge by field-wise addition.
#[derive(Debug, Clone, Copy, Default)]
struct PartialAggregate {
    count: usize,
    positive: usize,
    negative: usize,
    neutral: usize,
    score_sum: f64,
    weighted_score_sum: f64,
    weight_sum: f64,
    engagement_sum: u64,
}

impl PartialAggregate {
    fn add(mut self, mention: &ClassifiedMention, weights: &EngagementWeights) -> Self {
        let m = &mention.mention;
        let weight = 1.0
            + weights.view * m.view_count as f64
            + weights.retweet * m.retweet_count as f64
            + weights.like * m.like_count as f64;

        self.count += 1;
        match mention.label {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
        self.score_sum += mention.score;
        self.weighted_score_sum += mention.score * weight;
        self.weight_sum += weight;
        self.engagement_sum += m.view_count + m.retweet_count + m.like_count;
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            positive: self.positive + other.positive,
            negative: self.negative + other.negative,
            neutral: self.neutral + other.neutral,
            score_sum: self.score_sum + other.score_sum,
            weighted_score_sum: self.weighted_score_sum + other.weighted_score_sum,
            weight_sum: self.weight_sum + other.weight_sum,
            engagement_sum: self.engagement_sum + other.engagement_sum,
        }
    }

    fn finish(self) -> AggregatedSentiment {
        if self.count == 0 {
            return AggregatedSentiment::empty();
        }

        let n = self.count as f64;
        let mean_sentiment = self.score_sum / n;
        // Zero total weight only happens under degenerate weight configs;
        // fall back to the unweighted mean.
        let weighted_sentiment = if self.weight_sum > 0.0 {
            self.weighted_score_sum / self.weight_sum
        } else {
            mean_sentiment
        };

        AggregatedSentiment {
            mention_count: self.count,
            positive_count: self.positive,
            negative_count: self.negative,
            neutral_count: self.neutral,
            positive_ratio: self.positive as f64 / n,
            negative_ratio: self.negative as f64 / n,
            neutral_ratio: self.neutral as f64 / n,
            mean_sentiment,
            weighted_sentiment,
            total_engagement: self.engagement_sum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mention;
    use chrono::Utc;

    fn mention(
        label: Sentiment,
        score: f64,
        views: u64,
        retweets: u64,
        likes: u64,
    ) -> ClassifiedMention {
        ClassifiedMention {
            mention: Mention {
                text: "test".to_string(),
                timestamp: Utc::now(),
                author_id: "a1".to_string(),
                author_username: "user".to_string(),
                view_count: views,
                retweet_count: retweets,
                like_count: likes,
                follower_count: 100,
            },
            label,
            score,
        }
    }

    #[test]
    fn test_empty_sequence_yields_zero_aggregate() {
        let agg = MentionAggregator::default().aggregate(&[]);
        assert_eq!(agg.mention_count, 0);
        assert_eq!(agg.positive_ratio, 0.0);
        assert_eq!(agg.negative_ratio, 0.0);
        assert_eq!(agg.neutral_ratio, 0.0);
        assert_eq!(agg.weighted_sentiment, 0.0);
        assert_eq!(agg.total_engagement, 0);
    }

    #[test]
    fn test_ratios_sum_to_one() {
        let mentions = vec![
            mention(Sentiment::Positive, 0.8, 10, 1, 2),
            mention(Sentiment::Positive, 0.4, 0, 0, 0),
            mention(Sentiment::Negative, -0.6, 5, 0, 1),
            mention(Sentiment::Neutral, 0.0, 2, 0, 0),
            mention(Sentiment::Neutral, 0.01, 0, 0, 0),
        ];
        let agg = MentionAggregator::default().aggregate(&mentions);
        let sum = agg.positive_ratio + agg.negative_ratio + agg.neutral_ratio;
        assert!((sum - 1.0).abs() < 1e-6);
        assert_eq!(agg.positive_count, 2);
        assert_eq!(agg.negative_count, 1);
        assert_eq!(agg.neutral_count, 2);
    }

    #[test]
    fn test_engagement_weighting_pulls_toward_loud_mentions() {
        // One heavily-engaged negative mention against two quiet positives.
        let mentions = vec![
            mention(Sentiment::Negative, -0.9, 10_000, 500, 900),
            mention(Sentiment::Positive, 0.5, 0, 0, 0),
            mention(Sentiment::Positive, 0.5, 0, 0, 0),
        ];
        let agg = MentionAggregator::default().aggregate(&mentions);
        assert!(agg.weighted_sentiment < 0.0);
        assert!(agg.mean_sentiment > 0.0);
    }

    #[test]
    fn test_zero_engagement_falls_back_to_unweighted_mean() {
        let mentions = vec![
            mention(Sentiment::Positive, 0.6, 0, 0, 0),
            mention(Sentiment::Negative, -0.2, 0, 0, 0),
        ];
        let agg = MentionAggregator::default().aggregate(&mentions);
        assert!((agg.weighted_sentiment - agg.mean_sentiment).abs() < 1e-12);
        assert!((agg.mean_sentiment - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_reordering_does_not_change_result() {
        let mentions = vec![
            mention(Sentiment::Positive, 0.7, 100, 5, 20),
            mention(Sentiment::Negative, -0.5, 2_000, 80, 300),
            mention(Sentiment::Neutral, 0.02, 50, 0, 3),
            mention(Sentiment::Positive, 0.3, 0, 0, 0),
        ];
        let mut reversed = mentions.clone();
        reversed.reverse();

        let aggregator = MentionAggregator::default();
        let a = aggregator.aggregate(&mentions);
        let b = aggregator.aggregate(&reversed);

        assert_eq!(a.mention_count, b.mention_count);
        assert_eq!(a.positive_count, b.positive_count);
        assert!((a.weighted_sentiment - b.weighted_sentiment).abs() < 1e-9);
        assert!((a.mean_sentiment - b.mean_sentiment).abs() < 1e-9);
    }

    #[test]
    fn test_parallel_fold_matches_sequential() {
        let mentions: Vec<ClassifiedMention> = (0..PARALLEL_THRESHOLD + 500)
            .map(|i| {
                let label = match i % 3 {
                    0 => Sentiment::Positive,
                    1 => Sentiment::Negative,
                    _ => Sentiment::Neutral,
                };
                let score = match label {
                    Sentiment::Positive => 0.5,
                    Sentiment::Negative => -0.5,
                    Sentiment::Neutral => 0.0,
                };
                mention(label, score, (i % 97) as u64, (i % 13) as u64, (i % 29) as u64)
            })
            .collect();

        let aggregator = MentionAggregator::default();
        let parallel = aggregator.aggregate(&mentions);
        let sequential = mentions
            .iter()
            .fold(PartialAggregate::default(), |acc, m| {
                acc.add(m, &EngagementWeights::default())
            })
            .finish();

        assert_eq!(parallel.mention_count, sequential.mention_count);
        assert_eq!(parallel.total_engagement, sequential.total_engagement);
        assert!((parallel.weighted_sentiment - sequential.weighted_sentiment).abs() < 1e-9);
    }

    #[test]
    fn test_custom_weights_change_the_balance() {
        let mentions = vec![
            mention(Sentiment::Negative, -1.0, 0, 10, 0),
            mention(Sentiment::Positive, 1.0, 0, 0, 10),
        ];

        // Retweet-heavy policy favors the negative mention.
        let retweet_heavy = MentionAggregator::new(EngagementWeights {
            view: 0.0,
            retweet: 10.0,
            like: 1.0,
        });
        assert!(retweet_heavy.aggregate(&mentions).weighted_sentiment < 0.0);

        // Like-heavy policy favors the positive mention.
        let like_heavy = MentionAggregator::new(EngagementWeights {
            view: 0.0,
            retweet: 1.0,
            like: 10.0,
        });
        assert!(like_heavy.aggregate(&mentions).weighted_sentiment > 0.0);
    }
}
