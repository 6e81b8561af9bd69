//! Category store accessor.
//!
//! [`StoreAccessor`] is the thin layer the classifier uses on top of a
//! [`CategoryStore`]: it adds default-valued lookups and creates missing
//! categories through a pluggable [`WordCountsFactory`]. It checks no
//! invariants of its own.

use std::fmt;

use crate::error::Result;
use crate::storage::traits::{CategoryStore, WordCountsFactory};
use crate::storage::word_counts::default_word_counts_factory;

/// Default-aware access to a category store.
pub struct StoreAccessor<S: CategoryStore> {
    store: S,
    factory: WordCountsFactory,
}

impl<S: CategoryStore> StoreAccessor<S> {
    /// Wrap `store`, creating new categories with the default sub-mapping.
    pub fn new(store: S) -> Self {
        Self::with_factory(store, default_word_counts_factory())
    }

    /// Wrap `store`, creating new categories with `factory`.
    pub fn with_factory(store: S, factory: WordCountsFactory) -> Self {
        StoreAccessor { store, factory }
    }

    /// Replace the sub-mapping factory used for new categories.
    pub fn set_factory(&mut self, factory: WordCountsFactory) {
        self.factory = factory;
    }

    /// Test whether `category` exists.
    pub fn has_category(&self, category: &str) -> Result<bool> {
        self.store.contains_category(category)
    }

    /// Create `category` with a fresh sub-mapping unless it already exists.
    ///
    /// Returns `true` if the category was created.
    pub fn ensure_category(&mut self, category: &str) -> Result<bool> {
        if self.store.contains_category(category)? {
            return Ok(false);
        }
        self.store.create_category(category, (self.factory)())?;
        Ok(true)
    }

    /// Get the tally of `word` in `category`, or `default` if absent.
    pub fn word_count(&self, category: &str, word: &str, default: i64) -> Result<i64> {
        Ok(self.store.get_count(category, word)?.unwrap_or(default))
    }

    /// Get the tally of `word` in `category`, if present.
    pub fn get_word_count(&self, category: &str, word: &str) -> Result<Option<i64>> {
        self.store.get_count(category, word)
    }

    /// Set the tally of `word` in `category`.
    pub fn set_word_count(&mut self, category: &str, word: &str, count: i64) -> Result<()> {
        self.store.set_count(category, word, count)
    }

    /// Delete the entry of `word` in `category`.
    pub fn delete_word(&mut self, category: &str, word: &str) -> Result<()> {
        self.store.delete_word(category, word)
    }

    /// Delete `category` entirely.
    pub fn delete_category(&mut self, category: &str) -> Result<()> {
        self.store.delete_category(category)
    }

    /// Enumerate category names.
    pub fn categories(&self) -> Result<Vec<String>> {
        self.store.list_categories()
    }

    /// Sum all tallies of `category`.
    pub fn sum(&self, category: &str) -> Result<i64> {
        self.store.sum_counts(category)
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the underlying store back.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: CategoryStore> fmt::Debug for StoreAccessor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreAccessor")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
