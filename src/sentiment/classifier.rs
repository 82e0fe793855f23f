//! Sentiment classifier combining the general-purpose VADER lexicon with
//! the crypto domain lexicon.
//!
//! VADER covers ordinary English polarity; the domain lexicon catches the
//! jargon VADER misses entirely ("moon", "rug", "bundler"). Domain hits are
//! summed and squashed with VADER's own `x / sqrt(x^2 + 15)` curve so both
//! signals live on the same [-1, 1] scale before blending.

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::config::SentimentConfig;
use crate::core::Sentiment;

use super::lexicon::CryptoLexicon;

/// VADER's compound-score normalization constant.
const NORMALIZATION_ALPHA: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: Sentiment,
    /// Aggregate polarity in [-1, 1].
    pub score: f64,
}

pub struct SentimentClassifier {
    vader: SentimentIntensityAnalyzer<'static>,
    lexicon: CryptoLexicon,
    pos_threshold: f64,
    neg_threshold: f64,
    general_weight: f64,
    domain_weight: f64,
}

impl SentimentClassifier {
    pub fn new(config: &SentimentConfig) -> Self {
        Self {
            vader: SentimentIntensityAnalyzer::new(),
            lexicon: CryptoLexicon::with_overrides(&config.lexicon_overrides),
            pos_threshold: config.pos_threshold,
            neg_threshold: config.neg_threshold,
            general_weight: config.general_weight,
            domain_weight: config.domain_weight,
        }
    }

    /// Classify one text unit. Pure function of the text and the configured
    /// lexicon; never fails on malformed input. Unparseable tokens are
    /// ignored, empty or matchless text is neutral with score 0.
    pub fn classify(&self, text: &str) -> Classification {
        let tokens = clean_tokens(text);
        if tokens.is_empty() {
            return Classification {
                label: Sentiment::Neutral,
                score: 0.0,
            };
        }

        let cleaned = tokens.join(" ");
        let general = self.vader.polarity_scores(&cleaned)["compound"];

        let domain_raw: f64 = tokens
            .iter()
            .filter_map(|token| self.lexicon.weight(token))
            .sum();
        let domain = normalize_valence(domain_raw);

        let score = (self.general_weight * general + self.domain_weight * domain)
            .clamp(-1.0, 1.0);

        let label = if score > self.pos_threshold {
            Sentiment::Positive
        } else if score < self.neg_threshold {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        Classification { label, score }
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(&SentimentConfig::default())
    }
}

/// Squash a raw valence sum into [-1, 1] with VADER's compound curve.
fn normalize_valence(raw: f64) -> f64 {
    if raw == 0.0 {
        return 0.0;
    }
    raw / (raw * raw + NORMALIZATION_ALPHA).sqrt()
}

/// Tokenize for lexicon lookup: drop URLs and @handles, un-prefix hashtags
/// and cashtags, trim surrounding ASCII punctuation, lowercase. Emoji pass
/// through untouched so 🚀 and 💎 keep matching.
fn clean_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|word| {
            let lower = word.to_lowercase();
            if lower.starts_with("http") || lower.starts_with("www.") || lower.starts_with('@') {
                return None;
            }
            let trimmed = lower.trim_matches(|c: char| c.is_ascii_punctuation());
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}
