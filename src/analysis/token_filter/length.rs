//! Length filter implementation.

use super::Filter;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Minimum word length kept by the English analyzer.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

/// A filter that removes tokens shorter than a minimum number of characters.
///
/// Length is measured in Unicode scalar values, not bytes, so `"æt"` counts
/// as two characters.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min: usize,
}

impl LengthFilter {
    /// Create a new length filter keeping tokens with at least `min` characters.
    pub fn new(min: usize) -> Self {
        LengthFilter { min }
    }

    /// Get the minimum length.
    pub fn min(&self) -> usize {
        self.min
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TOKEN_LENGTH)
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens
            .filter(|token| token.is_stopped() || token.char_len() >= self.min)
            .collect();

        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
