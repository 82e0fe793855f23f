//! Live data source clients
//!
//! Thin HTTP adapters: twitterapi.io advanced search for mentions and the
//! DexScreener pairs API for on-chain metrics. Holder-level signals
//! (insider, sniper, bundler, LP burn) are not observable through
//! DexScreener and stay `None`, which the factor rules degrade to
//! zero-contribution "data unavailable" entries.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::core::{Mention, OnChainMetrics, TokenQuery};

use super::{MentionSource, MetricsSource, SourceError};

const TWITTER_API: &str = "https://api.twitterapi.io/twitter";
const DEXSCREENER_API: &str = "https://api.dexscreener.com/latest/dex/tokens";
const API_TIMEOUT_SECS: u64 = 15;
const MAX_SEARCH_PAGES: usize = 10;

pub struct LiveMentionSource {
    client: Client,
    api_key: String,
    max_results: usize,
}

impl LiveMentionSource {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: http_client(),
            api_key: api_key.into(),
            max_results: 500,
        }
    }

    /// Reads `TWITTERAPI_IO_KEY`, erroring when unset so callers can fall
    /// back to fixtures explicitly.
    pub fn from_env() -> Result<Self, SourceError> {
        match std::env::var("TWITTERAPI_IO_KEY") {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(SourceError::NotConfigured("TWITTERAPI_IO_KEY")),
        }
    }

    fn build_query(token: &TokenQuery) -> String {
        match &token.symbol {
            // The $ prefix keeps ticker symbols from matching common words.
            Some(symbol) => format!("{} OR ${}", token.address, symbol),
            None => token.address.clone(),
        }
    }
}

#[async_trait]
impl MentionSource for LiveMentionSource {
    async fn fetch_mentions(&self, token: &TokenQuery) -> Result<Vec<Mention>, SourceError> {
        let query = Self::build_query(token);
        let endpoint = format!("{TWITTER_API}/tweet/advanced_search");
        let mut mentions = Vec::new();
        let mut cursor: Option<String> = None;

        for page in 0..MAX_SEARCH_PAGES {
            let mut request = self
                .client
                .get(&endpoint)
                .header("X-API-Key", &self.api_key)
                .query(&[("query", query.as_str()), ("queryType", "Latest")]);
            if let Some(cursor) = &cursor {
                request = request.query(&[("cursor", cursor.as_str())]);
            }

            let response: SearchResponse = request
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;

            if response.tweets.is_empty() {
                break;
            }
            debug!("Page {}: fetched {} tweets", page + 1, response.tweets.len());

            mentions.extend(response.tweets.into_iter().map(Tweet::into_mention));

            if mentions.len() >= self.max_results || !response.has_next_page {
                break;
            }
            match response.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        info!("🐦 Fetched {} mentions for {}", mentions.len(), token.address);
        Ok(mentions)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    tweets: Vec<Tweet>,
    #[serde(default)]
    has_next_page: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Tweet {
    #[serde(default)]
    text: String,
    #[serde(rename = "createdAt", default)]
    created_at: String,
    #[serde(default)]
    author: Author,
    #[serde(rename = "retweetCount", default)]
    retweet_count: u64,
    #[serde(rename = "likeCount", default)]
    like_count: u64,
    #[serde(rename = "viewCount", default)]
    view_count: u64,
}

#[derive(Debug, Default, Deserialize)]
struct Author {
    #[serde(default)]
    id: String,
    #[serde(rename = "userName", default)]
    user_name: String,
    #[serde(default)]
    followers: u64,
}

impl Tweet {
    fn into_mention(self) -> Mention {
        // twitterapi.io dates look like "Mon Jan 05 19:12:33 +0000 2026".
        let timestamp = DateTime::parse_from_str(&self.created_at, "%a %b %d %H:%M:%S %z %Y")
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Mention {
            text: self.text,
            timestamp,
            author_id: self.author.id,
            author_username: self.author.user_name,
            view_count: self.view_count,
            retweet_count: self.retweet_count,
            like_count: self.like_count,
            follower_count: self.author.followers,
        }
    }
}

pub struct DexScreenerMetricsSource {
    client: Client,
}

impl DexScreenerMetricsSource {
    pub fn new() -> Self {
        Self {
            client: http_client(),
        }
    }
}

impl Default for DexScreenerMetricsSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetricsSource for DexScreenerMetricsSource {
    async fn fetch_metrics(&self, token: &TokenQuery) -> Result<OnChainMetrics, SourceError> {
        let url = format!("{DEXSCREENER_API}/{}", token.address);
        let response: DexScreenerResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let pair = response
            .pairs
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| SourceError::NotFound(token.address.clone()))?;

        if pair.market_cap.is_none() {
            warn!("No market cap reported for {}", token.address);
        }

        Ok(OnChainMetrics {
            market_cap: pair.market_cap.or(pair.fdv),
            liquidity: pair.liquidity.map(|l| l.usd),
            insider_holding_pct: None,
            sniper_activity_pct: None,
            bundler_present: None,
            lp_burned: None,
        })
    }
}

#[derive(Debug, Deserialize)]
struct DexScreenerResponse {
    pairs: Option<Vec<TokenPair>>,
}

#[derive(Debug, Deserialize)]
struct TokenPair {
    #[serde(rename = "marketCap")]
    market_cap: Option<f64>,
    fdv: Option<f64>,
    liquidity: Option<Liquidity>,
}

#[derive(Debug, Deserialize)]
struct Liquidity {
    usd: f64,
}

fn http_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(API_TIMEOUT_SECS))
        .build()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_includes_cashtag_when_symbol_known() {
        let with_symbol = TokenQuery::with_symbol("abc123", "PEPE");
        assert_eq!(LiveMentionSource::build_query(&with_symbol), "abc123 OR $PEPE");

        let bare = TokenQuery::new("abc123");
        assert_eq!(LiveMentionSource::build_query(&bare), "abc123");
    }

    #[test]
    fn test_tweet_date_parsing() {
        let tweet = Tweet {
            text: "gm".to_string(),
            created_at: "Mon Jan 05 19:12:33 +0000 2026".to_string(),
            author: Author::default(),
            retweet_count: 1,
            like_count: 2,
            view_count: 3,
        };
        let mention = tweet.into_mention();
        assert_eq!(mention.timestamp.to_rfc3339(), "2026-01-05T19:12:33+00:00");
    }

    #[test]
    fn test_search_response_tolerates_missing_fields() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"tweets": [{"text": "to the moon", "author": {"userName": "bull"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.tweets.len(), 1);
        assert!(!response.has_next_page);
        let mention = response.tweets.into_iter().next().unwrap().into_mention();
        assert_eq!(mention.author_username, "bull");
        assert_eq!(mention.view_count, 0);
    }

    #[test]
    fn test_dexscreener_payload_maps_to_metrics() {
        let response: DexScreenerResponse = serde_json::from_str(
            r#"{"pairs": [{"marketCap": 2340000.0, "liquidity": {"usd": 450000.0}}]}"#,
        )
        .unwrap();
        let pair = response.pairs.unwrap().into_iter().next().unwrap();
        assert_eq!(pair.market_cap, Some(2_340_000.0));
        assert_eq!(pair.liquidity.unwrap().usd, 450_000.0);
    }

    #[test]
    fn test_from_env_requires_key() {
        std::env::remove_var("TWITTERAPI_IO_KEY");
        assert!(matches!(
            LiveMentionSource::from_env(),
            Err(SourceError::NotConfigured(_))
        ));
    }
}
