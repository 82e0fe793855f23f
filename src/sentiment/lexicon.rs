//! Crypto-specific sentiment lexicon
//!
//! Terms the general-purpose VADER lexicon misses or scores too mildly for
//! this domain ("moon", "rug", "bundler"). Weights are on VADER's -4..+4
//! valence scale. The lexicon is an immutable value owned by the classifier;
//! concurrent analyses may carry different overrides.

use std::collections::HashMap;

/// Built-in term weights. Config overrides extend or replace entries.
const DEFAULT_TERMS: &[(&str, f64)] = &[
    ("moon", 3.0),
    ("mooning", 3.0),
    ("hodl", 2.0),
    ("bullish", 2.5),
    ("pump", 2.0),
    ("gem", 2.0),
    ("rocket", 2.0),
    ("🚀", 2.0),
    ("💎", 1.5),
    ("🙌", 1.5),
    ("buy", 1.5),
    ("long", 1.5),
    ("undervalued", 2.0),
    ("breakout", 2.0),
    ("rug", -3.0),
    ("rugpull", -3.0),
    ("scam", -3.0),
    ("dump", -2.5),
    ("bearish", -2.5),
    ("crash", -2.5),
    ("sell", -1.5),
    ("short", -1.5),
    ("overvalued", -2.0),
    ("ponzi", -3.0),
    ("fake", -2.5),
    ("warning", -2.0),
    ("careful", -1.5),
    ("avoid", -2.0),
    ("bundler", -2.5),
    ("sniper", -2.0),
];

#[derive(Debug, Clone)]
pub struct CryptoLexicon {
    terms: HashMap<String, f64>,
}

impl CryptoLexicon {
    /// Built-in lexicon extended with caller overrides. Overrides win on
    /// collision.
    pub fn with_overrides(overrides: &HashMap<String, f64>) -> Self {
        let mut terms: HashMap<String, f64> = DEFAULT_TERMS
            .iter()
            .map(|(term, weight)| (term.to_string(), *weight))
            .collect();
        for (term, weight) in overrides {
            terms.insert(term.to_lowercase(), *weight);
        }
        Self { terms }
    }

    pub fn weight(&self, token: &str) -> Option<f64> {
        self.terms.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for CryptoLexicon {
    fn default() -> Self {
        Self::with_overrides(&HashMap::new())
    }
}
