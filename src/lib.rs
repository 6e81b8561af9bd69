//! # bayestag
//!
//! A naive Bayesian text classifier for small tagging tasks such as spam
//! filtering or sentiment buckets.
//!
//! ## Features
//!
//! - Train, untrain, score and classify free text
//! - Pluggable tokenization through the [`Analyzer`](analysis::Analyzer) trait
//! - Pluggable storage through the [`CategoryStore`](storage::CategoryStore) trait
//! - Log-probability scoring with a smoothing constant for unseen words

pub mod analysis;
pub mod classifier;
pub mod error;
pub mod storage;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer, english_tokenizer};
    pub use crate::classifier::{Classifier, ClassifierConfig, NaiveBayesClassifier, Scores};
    pub use crate::error::{BayesError, Result};
    pub use crate::storage::{CategoryStore, MemoryStore, SharedStore};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
