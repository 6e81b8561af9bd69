//! English analyzer: the default tokenizer of the classifier.
//!
//! Text is split on the English separator characters and whitespace, each
//! word is lowercased, words shorter than three characters are dropped and
//! stop words are removed.

use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::length::{DEFAULT_MIN_TOKEN_LENGTH, LengthFilter};
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::{StopFilter, StopWords};
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

pub struct EnglishAnalyzer {
    inner: PipelineAnalyzer,
}

impl EnglishAnalyzer {
    pub fn new() -> Result<Self> {
        Self::with_options(DEFAULT_MIN_TOKEN_LENGTH, &StopWords::English)
    }

    /// Build the pipeline with a custom minimum word length and stop-word set.
    pub fn with_options(min_token_length: usize, stop_words: &StopWords) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::english()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(LengthFilter::new(min_token_length)))
            .add_filter(Arc::new(StopFilter::from_stop_words(stop_words)))
            .with_name("english");

        Ok(Self { inner: analyzer })
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new().expect("English analyzer should be creatable with default settings")
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

impl Debug for EnglishAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

/// Tokenize `text` with the default English analyzer.
///
/// ```
/// use bayestag::analysis::analyzer::english_tokenizer;
///
/// assert_eq!(english_tokenizer("greetings mary a b aa bb").unwrap(), vec!["mary"]);
/// ```
pub fn english_tokenizer(text: &str) -> Result<Vec<String>> {
    EnglishAnalyzer::new()?.words(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_analyzer() {
        let analyzer = EnglishAnalyzer::new().unwrap();

        let words = analyzer.words("Hello the world and test").unwrap();

        // "the" and "and" should be filtered out
        assert_eq!(words, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_unicode_lowercase() {
        assert_eq!(english_tokenizer("Æther").unwrap()[0], "æther");
    }

    #[test]
    fn test_short_and_common_words_dropped() {
        assert_eq!(english_tokenizer("greetings mary a b aa bb").unwrap(), vec!["mary"]);
        assert!(english_tokenizer("").unwrap().is_empty());
        assert!(english_tokenizer("   ...  ").unwrap().is_empty());
    }

    #[test]
    fn test_separators_and_apostrophes() {
        assert_eq!(english_tokenizer("contraction's").unwrap()[0], "contraction's");
        assert_eq!(english_tokenizer("what|is|goth").unwrap()[0], "goth");
        assert_eq!(
            english_tokenizer("SLOTHS, (lobsters) & zombies!").unwrap(),
            vec!["sloths", "lobsters", "zombies"]
        );
    }

    #[test]
    fn test_deterministic_order_with_repeats() {
        assert_eq!(
            english_tokenizer("zombie horror zombie").unwrap(),
            vec!["zombie", "horror", "zombie"]
        );
    }

    #[test]
    fn test_with_options() {
        let analyzer = EnglishAnalyzer::with_options(1, &StopWords::None).unwrap();
        assert_eq!(analyzer.words("I am a zombie").unwrap(), vec!["i", "am", "a", "zombie"]);

        let custom = StopWords::Custom(vec!["zombie".to_string()]);
        let analyzer = EnglishAnalyzer::with_options(3, &custom).unwrap();
        assert_eq!(analyzer.words("the zombie government").unwrap(), vec!["the", "government"]);
    }

    #[test]
    fn test_english_analyzer_name() {
        let analyzer = EnglishAnalyzer::new().unwrap();

        assert_eq!(analyzer.name(), "english");
    }
}
