//! Configuration for the naive Bayes classifier.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::EnglishAnalyzer;
use crate::analysis::token_filter::length::DEFAULT_MIN_TOKEN_LENGTH;
use crate::analysis::token_filter::stop::StopWords;
use crate::error::{BayesError, Result};

/// Default smoothing value used for words a category has never seen.
pub const DEFAULT_CORRECTION: f64 = 0.1;

/// Configuration for [`NaiveBayesClassifier`](super::NaiveBayesClassifier).
///
/// Missing fields take their default when deserialized, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Tally substituted for a word unseen in the category being scored.
    /// Must be finite and strictly positive.
    pub correction: f64,
    /// Shortest word (in characters) kept by the default English tokenizer.
    pub min_token_length: usize,
    /// Stop words dropped by the default English tokenizer.
    pub stop_words: StopWords,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            correction: DEFAULT_CORRECTION,
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            stop_words: StopWords::English,
        }
    }
}

impl ClassifierConfig {
    /// Set the correction constant.
    pub fn with_correction(mut self, correction: f64) -> Self {
        self.correction = correction;
        self
    }

    /// Set the stop-word set.
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Check that the configuration can drive log-probability scoring.
    pub fn validate(&self) -> Result<()> {
        if !self.correction.is_finite() || self.correction <= 0.0 {
            return Err(BayesError::invalid_config(format!(
                "correction must be a finite positive number, got {}",
                self.correction
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Build the English analyzer described by this configuration.
    pub fn build_analyzer(&self) -> Result<EnglishAnalyzer> {
        EnglishAnalyzer::with_options(self.min_token_length, &self.stop_words)
    }
}
