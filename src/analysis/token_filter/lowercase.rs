//! Case folding for words before they are counted.
//!
//! Runs ahead of the stop filter in the English pipeline, so `THE` is
//! dropped like `the` and `Sloth` and `sloth` share one tally.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases token text with the full Unicode case mapping.
///
/// Stopped tokens keep their text.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            if token.is_stopped() {
                return token;
            }
            let lowered = token.text.to_lowercase();
            token.with_text(lowered)
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::StopFilter;
    use crate::analysis::tokenizer::RegexTokenizer;

    fn lowered(words: &[&str]) -> Vec<String> {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, word)| Token::new(*word, i))
            .collect();
        LowercaseFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_unicode_case_mapping() {
        assert_eq!(lowered(&["ÆTHER", "Sloth"]), vec!["æther", "sloth"]);
        // Final sigma depends on word position.
        assert_eq!(lowered(&["ὈΔΥΣΣΕΎΣ"]), vec!["ὀδυσσεύς"]);
    }

    #[test]
    fn test_stopped_tokens_keep_their_text() {
        let tokens = vec![Token::new("Zombie", 0).stop()];
        let result: Vec<Token> = LowercaseFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "Zombie");
    }

    #[test]
    fn test_uppercase_stop_words_are_removed() {
        let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::english().unwrap()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()));

        assert_eq!(analyzer.words("THE Sloth AND the sloth").unwrap(), vec!["sloth", "sloth"]);
    }
}
