//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{BayesError, Result};

/// Separator characters used by the English tokenizer.
///
/// Every run of these characters (and any whitespace) splits two words.
/// Apostrophes and hyphens are not separators, so `contraction's` stays whole.
pub const ENGLISH_SEPARATOR_PATTERN: &str = r#"[_.,<>:;~+|\[\]?`"!@#$%^&*()\s]+"#;

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// In the default mode the matches of the pattern are the tokens. In gaps
/// mode the pattern describes separators and the text between matches is
/// emitted instead.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    ///
    /// The default pattern `r"\w+"` matches sequences of word characters.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Arc::new(Self::compile(pattern)?),
            gaps: false,
        })
    }

    /// Create a tokenizer that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        Ok(RegexTokenizer {
            pattern: Arc::new(Self::compile(pattern)?),
            gaps: true,
        })
    }

    /// Create the separator-splitting tokenizer used for English text.
    pub fn english() -> Result<Self> {
        Self::with_gaps(ENGLISH_SEPARATOR_PATTERN)
    }

    fn compile(pattern: &str) -> Result<Regex> {
        Regex::new(pattern)
            .map_err(|e| BayesError::analysis(format!("Invalid regex pattern: {e}")))
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer extracts gaps.
    pub fn gaps(&self) -> bool {
        self.gaps
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::english().expect("English separator pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens = if self.gaps {
            let mut tokens = Vec::new();
            let mut last_end = 0;

            for mat in self.pattern.find_iter(text) {
                if mat.start() > last_end {
                    let position = tokens.len();
                    tokens.push(Token::with_offsets(
                        &text[last_end..mat.start()],
                        position,
                        last_end,
                        mat.start(),
                    ));
                }
                last_end = mat.end();
            }

            // Trailing gap
            if last_end < text.len() {
                let position = tokens.len();
                tokens.push(Token::with_offsets(
                    &text[last_end..],
                    position,
                    last_end,
                    text.len(),
                ));
            }

            tokens
        } else {
            self.pattern
                .find_iter(text)
                .enumerate()
                .map(|(position, mat)| {
                    Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
                })
                .collect()
        };

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &RegexTokenizer, text: &str) -> Vec<String> {
        tokenizer
            .tokenize(text)
            .unwrap()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_regex_tokenizer_with_gaps() {
        let tokenizer = RegexTokenizer::with_gaps(r"\s+").unwrap();
        assert_eq!(texts(&tokenizer, "  hello   world "), vec!["hello", "world"]);
    }

    #[test]
    fn test_english_separators() {
        let tokenizer = RegexTokenizer::english().unwrap();

        assert_eq!(texts(&tokenizer, "what|is|goth"), vec!["what", "is", "goth"]);
        assert_eq!(
            texts(&tokenizer, "a_b.c,d<e>f:g;h~i+j[k]l?m`n\"o!p@q#r$s%t^u&v*w(x)y"),
            "abcdefghijklmnopqrstuvwxy"
                .chars()
                .map(String::from)
                .collect::<Vec<_>>()
        );
        assert_eq!(texts(&tokenizer, "contraction's"), vec!["contraction's"]);
        assert_eq!(texts(&tokenizer, "well-known\ttab\nline"), vec!["well-known", "tab", "line"]);
    }

    #[test]
    fn test_english_offsets_and_positions() {
        let tokenizer = RegexTokenizer::english().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("!!hi, there").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].start_offset, 2);
        assert_eq!(tokens[0].end_offset, 4);
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(RegexTokenizer::with_pattern("[unclosed").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
        assert!(RegexTokenizer::default().gaps());
    }
}
