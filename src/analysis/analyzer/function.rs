//! Adapter that turns a plain function into an [`Analyzer`].

use std::fmt;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// An analyzer backed by a `Fn(&str) -> Result<Vec<String>>`.
///
/// Lets callers plug in a tokenizer written as a closure without defining a
/// type for it.
///
/// ```
/// use bayestag::analysis::analyzer::{Analyzer, FnAnalyzer};
///
/// let analyzer = FnAnalyzer::new(|text: &str| {
///     Ok(text.split(',').map(|w| w.trim().to_string()).collect())
/// });
///
/// assert_eq!(analyzer.words("a, b").unwrap(), vec!["a", "b"]);
/// ```
pub struct FnAnalyzer<F> {
    func: F,
}

impl<F> FnAnalyzer<F>
where
    F: Fn(&str) -> Result<Vec<String>> + Send + Sync,
{
    /// Wrap `func`.
    pub fn new(func: F) -> Self {
        FnAnalyzer { func }
    }
}

impl<F> Analyzer for FnAnalyzer<F>
where
    F: Fn(&str) -> Result<Vec<String>> + Send + Sync,
{
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = (self.func)(text)?
            .into_iter()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "function"
    }
}

impl<F> fmt::Debug for FnAnalyzer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAnalyzer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BayesError;

    #[test]
    fn test_fn_analyzer_positions() {
        let analyzer = FnAnalyzer::new(|text: &str| {
            Ok(text.split_whitespace().map(str::to_string).collect())
        });

        let tokens: Vec<Token> = analyzer.analyze("one two").unwrap().collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "two");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(analyzer.name(), "function");
    }

    #[test]
    fn test_fn_analyzer_error_propagates() {
        let analyzer = FnAnalyzer::new(|_: &str| Err(BayesError::analysis("refused")));
        assert!(analyzer.words("anything").is_err());
    }
}
