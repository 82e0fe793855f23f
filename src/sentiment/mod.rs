//! Lexicon-based sentiment classification

pub mod classifier;
pub mod lexicon;

pub use classifier::{Classification, SentimentClassifier};
pub use lexicon::CryptoLexicon;
