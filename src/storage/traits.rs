//! Storage abstraction traits and common types.
//!
//! A store is a two-level mapping: category name → word → tally. The
//! classifier only talks to it through [`CategoryStore`], so in-memory maps,
//! key-value stores or file-backed maps are interchangeable. Stores do not
//! enforce the classifier's invariants (non-negative tallies, no zero
//! entries); they must only reflect every mutation faithfully.

use std::fmt::Debug;
use std::sync::Arc;

use crate::error::{BayesError, Result};

/// The per-category sub-mapping from word to tally.
///
/// Tallies are signed so that a value written by an outside party below zero
/// can be observed and reported instead of wrapping.
pub trait WordCounts: Send + Sync + Debug {
    /// Get the tally of `word`, if present.
    fn get(&self, word: &str) -> Option<i64>;

    /// Set the tally of `word`, inserting it if absent.
    fn set(&mut self, word: &str, count: i64);

    /// Remove `word`, returning its previous tally.
    fn remove(&mut self, word: &str) -> Option<i64>;

    /// All words with an entry.
    fn words(&self) -> Vec<String>;

    /// Number of word entries.
    fn len(&self) -> usize;

    /// Whether there are no word entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all tallies, saturating at the bounds of `i64`.
    fn total(&self) -> i64 {
        sum_tallies(self.words().iter().filter_map(|word| self.get(word)))
    }
}

/// Add up tallies without overflowing.
///
/// The sum is taken in `i128` and clamped to `i64`, so a category holding a
/// saturated tally next to other words reports `i64::MAX` rather than a
/// wrapped negative total.
pub fn sum_tallies<I: IntoIterator<Item = i64>>(tallies: I) -> i64 {
    let sum: i128 = tallies.into_iter().map(i128::from).sum();
    sum.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Constructor for fresh per-category sub-mappings.
pub type WordCountsFactory = Arc<dyn Fn() -> Box<dyn WordCounts> + Send + Sync>;

/// A backend holding category → word → tally data.
///
/// Every method returns a [`Result`] so that fallible backends fit behind the
/// same interface. Reads of a missing category are not errors: they report
/// no data (`None`, `false`, `0`). Deleting something absent is a no-op.
pub trait CategoryStore: Send + Sync + Debug {
    /// Check whether `category` has an entry.
    fn contains_category(&self, category: &str) -> Result<bool>;

    /// Insert `category` with the given (usually empty) sub-mapping.
    ///
    /// Replaces any existing entry for the category.
    fn create_category(&mut self, category: &str, counts: Box<dyn WordCounts>) -> Result<()>;

    /// Get the tally of `word` within `category`.
    fn get_count(&self, category: &str, word: &str) -> Result<Option<i64>>;

    /// Set the tally of `word` within an existing `category`.
    ///
    /// Fails with [`StorageError::CategoryNotFound`] if the category is absent.
    fn set_count(&mut self, category: &str, word: &str, count: i64) -> Result<()>;

    /// Remove `word` from `category`.
    fn delete_word(&mut self, category: &str, word: &str) -> Result<()>;

    /// Remove `category` and all its words.
    fn delete_category(&mut self, category: &str) -> Result<()>;

    /// List every category name.
    fn list_categories(&self) -> Result<Vec<String>>;

    /// Sum all tallies of `category`.
    fn sum_counts(&self, category: &str) -> Result<i64>;
}

impl<S: CategoryStore + ?Sized> CategoryStore for &mut S {
    fn contains_category(&self, category: &str) -> Result<bool> {
        (**self).contains_category(category)
    }

    fn create_category(&mut self, category: &str, counts: Box<dyn WordCounts>) -> Result<()> {
        (**self).create_category(category, counts)
    }

    fn get_count(&self, category: &str, word: &str) -> Result<Option<i64>> {
        (**self).get_count(category, word)
    }

    fn set_count(&mut self, category: &str, word: &str, count: i64) -> Result<()> {
        (**self).set_count(category, word, count)
    }

    fn delete_word(&mut self, category: &str, word: &str) -> Result<()> {
        (**self).delete_word(category, word)
    }

    fn delete_category(&mut self, category: &str) -> Result<()> {
        (**self).delete_category(category)
    }

    fn list_categories(&self) -> Result<Vec<String>> {
        (**self).list_categories()
    }

    fn sum_counts(&self, category: &str) -> Result<i64> {
        (**self).sum_counts(category)
    }
}

impl<S: CategoryStore + ?Sized> CategoryStore for Box<S> {
    fn contains_category(&self, category: &str) -> Result<bool> {
        self.as_ref().contains_category(category)
    }

    fn create_category(&mut self, category: &str, counts: Box<dyn WordCounts>) -> Result<()> {
        self.as_mut().create_category(category, counts)
    }

    fn get_count(&self, category: &str, word: &str) -> Result<Option<i64>> {
        self.as_ref().get_count(category, word)
    }

    fn set_count(&mut self, category: &str, word: &str, count: i64) -> Result<()> {
        self.as_mut().set_count(category, word, count)
    }

    fn delete_word(&mut self, category: &str, word: &str) -> Result<()> {
        self.as_mut().delete_word(category, word)
    }

    fn delete_category(&mut self, category: &str) -> Result<()> {
        self.as_mut().delete_category(category)
    }

    fn list_categories(&self) -> Result<Vec<String>> {
        self.as_ref().list_categories()
    }

    fn sum_counts(&self, category: &str) -> Result<i64> {
        self.as_ref().sum_counts(category)
    }
}

/// Error types specific to storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The category has no entry.
    CategoryNotFound(String),

    /// Backend-specific failure.
    Backend(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::CategoryNotFound(name) => write!(f, "Category not found: {name}"),
            StorageError::Backend(msg) => write!(f, "Backend failure: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for BayesError {
    fn from(err: StorageError) -> Self {
        BayesError::storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::CategoryNotFound("spam".to_string());
        assert_eq!(err.to_string(), "Category not found: spam");

        let err = StorageError::Backend("connection reset".to_string());
        assert_eq!(err.to_string(), "Backend failure: connection reset");
    }

    #[test]
    fn test_storage_error_conversion() {
        let err: BayesError = StorageError::CategoryNotFound("ham".to_string()).into();
        assert_eq!(err.to_string(), "Storage error: Category not found: ham");
    }
}
