//! Fixture data sources
//!
//! Static snapshots for development and tests. The pipeline cannot tell
//! these apart from the live clients.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::info;

use crate::core::{Mention, OnChainMetrics, TokenQuery};

use super::{MentionSource, MetricsSource, SourceError};

pub struct FixtureMentionSource;

#[async_trait]
impl MentionSource for FixtureMentionSource {
    async fn fetch_mentions(&self, token: &TokenQuery) -> Result<Vec<Mention>, SourceError> {
        info!("📦 Serving fixture mentions for {}", token.address);
        Ok(fixture_mentions())
    }
}

pub struct FixtureMetricsSource;

#[async_trait]
impl MetricsSource for FixtureMetricsSource {
    async fn fetch_metrics(&self, token: &TokenQuery) -> Result<OnChainMetrics, SourceError> {
        info!("📦 Serving fixture metrics for {}", token.address);
        Ok(OnChainMetrics {
            market_cap: Some(2_340_000.0),
            liquidity: Some(450_000.0),
            insider_holding_pct: Some(12.5),
            sniper_activity_pct: Some(6.3),
            bundler_present: Some(true),
            lp_burned: Some(true),
        })
    }
}

fn fixture_mention(
    hours_ago: i64,
    text: &str,
    author_id: &str,
    username: &str,
    followers: u64,
    views: u64,
    retweets: u64,
    likes: u64,
) -> Mention {
    Mention {
        text: text.to_string(),
        timestamp: Utc::now() - Duration::hours(hours_ago),
        author_id: author_id.to_string(),
        author_username: username.to_string(),
        view_count: views,
        retweet_count: retweets,
        like_count: likes,
        follower_count: followers,
    }
}

/// A small, opinion-balanced mention set: two bulls, two bears, one
/// fence-sitter.
pub fn fixture_mentions() -> Vec<Mention> {
    vec![
        fixture_mention(
            1,
            "Just bought some of this new meme coin! To the moon! 🚀",
            "user1",
            "cryptotrader1",
            5_432,
            8_934,
            45,
            123,
        ),
        fixture_mention(
            2,
            "This coin is definitely a scam, be careful everyone!",
            "user2",
            "defiexpert",
            12_543,
            45_632,
            234,
            456,
        ),
        fixture_mention(
            3,
            "Interesting tokenomics on this one. Worth keeping an eye on.",
            "user3",
            "tokenanalyst",
            8_932,
            12_456,
            67,
            234,
        ),
        fixture_mention(
            4,
            "HODL gang where you at? This is going to explode! 💎🙌",
            "user4",
            "memecoinlord",
            23_456,
            87_654,
            567,
            1_234,
        ),
        fixture_mention(
            5,
            "Rug pull alert! Dev wallets hold 40% of supply.",
            "user5",
            "chainalysis",
            45_678,
            156_789,
            891,
            2_345,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_mentions_are_well_formed() {
        let source = FixtureMentionSource;
        let mentions = source
            .fetch_mentions(&TokenQuery::new("So11111111111111111111111111111111111111112"))
            .await
            .unwrap();
        assert_eq!(mentions.len(), 5);
        for mention in &mentions {
            assert!(mention.validate().is_ok());
            assert!(!mention.text.is_empty());
        }
    }

    #[tokio::test]
    async fn test_fixture_metrics_are_well_formed() {
        let source = FixtureMetricsSource;
        let metrics = source
            .fetch_metrics(&TokenQuery::new("So11111111111111111111111111111111111111112"))
            .await
            .unwrap();
        assert!(metrics.validate().is_ok());
        assert_eq!(metrics.lp_burned, Some(true));
        assert_eq!(metrics.insider_holding_pct, Some(12.5));
    }
}
