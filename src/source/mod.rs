//! External data source contracts
//!
//! The scoring core only depends on these two capabilities, never on a
//! concrete variant: a mention source and an on-chain metrics source, each
//! with a live client and a fixture implementation that the core treats
//! identically.

pub mod fixture;
pub mod live;

pub use fixture::{FixtureMentionSource, FixtureMetricsSource};
pub use live::{DexScreenerMetricsSource, LiveMentionSource};

use async_trait::async_trait;
use thiserror::Error;

use crate::core::{Mention, OnChainMetrics, TokenQuery};

/// Failures in the data-source adapters: the collaborators outside the
/// scoring core. The core itself never produces one.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected response payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Source not configured: {0}")]
    NotConfigured(&'static str),

    #[error("No data found for token {0}")]
    NotFound(String),
}

/// Supplies the mention stream for one token identifier.
#[async_trait]
pub trait MentionSource: Send + Sync {
    async fn fetch_mentions(&self, token: &TokenQuery) -> Result<Vec<Mention>, SourceError>;
}

/// Supplies one on-chain metrics snapshot for one token identifier.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn fetch_metrics(&self, token: &TokenQuery) -> Result<OnChainMetrics, SourceError>;
}
