//! Text analysis module.
//!
//! Turns raw text into the words the classifier counts: tokenizers split
//! text, token filters normalize and drop tokens, analyzers chain the two,
//! and [`occurrences`](occurrences::occurrences) folds a word list into
//! per-word counts.

pub mod analyzer;
pub mod occurrences;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::*;
pub use occurrences::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
