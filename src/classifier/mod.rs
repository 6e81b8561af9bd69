//! Naive Bayesian text classification.
//!
//! # Architecture
//!
//! - [`Classifier`] trait: common interface for text classifiers
//! - [`NaiveBayesClassifier`]: word-frequency model over a [`CategoryStore`](crate::storage::CategoryStore)
//! - [`ClassifierConfig`]: correction constant and default tokenizer settings
//!
//! # Example
//!
//! ```
//! use bayestag::classifier::NaiveBayesClassifier;
//! use bayestag::storage::MemoryStore;
//!
//! # fn main() -> bayestag::error::Result<()> {
//! let mut classifier = NaiveBayesClassifier::new(MemoryStore::new())?;
//! classifier.train("good", "sunshine God love sex lobster sloth")?;
//! classifier.train("bad", "fear death horror government zombie")?;
//!
//! assert_eq!(
//!     classifier.classify("sloths are so cute i love them")?.as_deref(),
//!     Some("good")
//! );
//! # Ok(())
//! # }
//! ```

mod classifier;
mod config;
mod naive_bayes;

pub use classifier::Classifier;
pub use config::ClassifierConfig;
pub use naive_bayes::{NaiveBayesClassifier, Scores};
