//! Core analyzer trait definition.
//!
//! An [`Analyzer`] turns raw text into the words the classifier counts:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Occurrence Counter → Classifier
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 .. Filter N
//! ```
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use bayestag::analysis::analyzer::Analyzer;
//! use bayestag::analysis::token::{Token, TokenStream};
//! use bayestag::error::Result;
//!
//! struct WholeText;
//!
//! impl Analyzer for WholeText {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         Ok(Box::new(std::iter::once(Token::new(text, 0))))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "whole_text"
//!     }
//! }
//!
//! assert_eq!(WholeText.words("a b").unwrap(), vec!["a b".to_string()]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so that one analyzer can be shared by
/// classifiers living on different threads.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Decode `bytes` as UTF-8 and analyze the result.
    ///
    /// Bytes that are not valid UTF-8 fail with
    /// [`BayesError::InvalidInput`](crate::error::BayesError::InvalidInput).
    fn analyze_bytes(&self, bytes: &[u8]) -> Result<TokenStream> {
        let text = std::str::from_utf8(bytes)?;
        self.analyze(text)
    }

    /// Analyze text and keep only the surviving token texts, in order.
    fn words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .analyze(text)?
            .filter(|token| !token.is_stopped())
            .map(|token| token.text)
            .collect())
    }
}
