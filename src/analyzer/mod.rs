//! Analysis pipeline orchestrator
//!
//! Wires the data sources into the scoring core: fetch mentions and
//! on-chain metrics concurrently, classify and aggregate, evaluate factor
//! rules, score, assemble. Each call builds a fresh immutable report;
//! analyses for different tokens share no state and may run fully in
//! parallel.

use chrono::Utc;
use thiserror::Error;
use tracing::{info, instrument};

use crate::aggregate::{rank_influencers, MentionAggregator, DEFAULT_MIN_FOLLOWERS};
use crate::config::AnalyzerConfig;
use crate::core::{
    ClassifiedMention, InputError, Mention, OnChainMetrics, RiskReport, TokenAnalysis, TokenQuery,
    ValidationError,
};
use crate::risk::{RiskFactorEvaluator, RiskScoringEngine};
use crate::sentiment::SentimentClassifier;
use crate::source::{MentionSource, MetricsSource, SourceError};

/// Top-level analysis failure. A failed analysis is always a typed error,
/// never confusable with a low-risk report.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Input rejected: {0}")]
    Input(#[from] InputError),

    #[error("Report validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Data source failed: {0}")]
    Source(#[from] SourceError),
}

pub struct TokenAnalyzer {
    mention_source: Box<dyn MentionSource>,
    metrics_source: Box<dyn MetricsSource>,
    classifier: SentimentClassifier,
    aggregator: MentionAggregator,
    evaluator: RiskFactorEvaluator,
    engine: RiskScoringEngine,
}

impl TokenAnalyzer {
    pub fn new(
        config: &AnalyzerConfig,
        mention_source: Box<dyn MentionSource>,
        metrics_source: Box<dyn MetricsSource>,
    ) -> Self {
        let evaluator = RiskFactorEvaluator::from_config(&config.factors);
        let engine =
            RiskScoringEngine::new(&config.factors, config.tiers.clone(), evaluator.max_total());
        Self {
            mention_source,
            metrics_source,
            classifier: SentimentClassifier::new(&config.sentiment),
            aggregator: MentionAggregator::new(config.engagement.clone()),
            evaluator,
            engine,
        }
    }

    /// Run one full analysis. A failure is a typed error, never a low-risk
    /// report.
    #[instrument(skip(self), fields(token = %token.address))]
    pub async fn analyze(&self, token: &TokenQuery) -> Result<TokenAnalysis, AnalysisError> {
        let (mentions, metrics) = tokio::join!(
            self.mention_source.fetch_mentions(token),
            self.metrics_source.fetch_metrics(token)
        );
        let mentions = mentions?;
        let metrics = metrics?;

        info!(
            "🔍 Analyzing {} with {} mentions",
            token.address,
            mentions.len()
        );

        for mention in &mentions {
            mention.validate()?;
        }
        metrics.validate()?;

        let classified = self.classify_all(&mentions);
        let sentiment = self.aggregator.aggregate(&classified);
        let factors = self.evaluator.evaluate(&metrics);
        let report = self.engine.score(&sentiment, factors)?;
        let influencers = rank_influencers(&classified, DEFAULT_MIN_FOLLOWERS);

        info!(
            "🏁 {} scored {:.1} ({:?})",
            token.address, report.score, report.tier
        );

        Ok(TokenAnalysis {
            token: token.clone(),
            report,
            influencers,
            analyzed_at: Utc::now(),
        })
    }

    /// The pure transformation from fetched data to a report, with no I/O.
    /// Exposed so callers with already-fetched data can score directly.
    pub fn assess(
        &self,
        mentions: &[Mention],
        metrics: &OnChainMetrics,
    ) -> Result<RiskReport, AnalysisError> {
        for mention in mentions {
            mention.validate()?;
        }
        metrics.validate()?;

        let classified = self.classify_all(mentions);
        let sentiment = self.aggregator.aggregate(&classified);
        let factors = self.evaluator.evaluate(metrics);
        let report = self.engine.score(&sentiment, factors)?;
        Ok(report)
    }

    fn classify_all(&self, mentions: &[Mention]) -> Vec<ClassifiedMention> {
        mentions
            .iter()
            .map(|mention| {
                let classification = self.classifier.classify(&mention.text);
                ClassifiedMention {
                    mention: mention.clone(),
                    label: classification.label,
                    score: classification.score,
                }
            })
            .collect()
    }
}
