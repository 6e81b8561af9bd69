//! Built-in [`WordCounts`] implementations and their factories.

use std::collections::BTreeMap;
use std::sync::Arc;

use ahash::AHashMap;

use crate::storage::traits::{WordCounts, WordCountsFactory, sum_tallies};

/// Hash-based word tallies. The default sub-mapping.
#[derive(Debug, Clone, Default)]
pub struct HashWordCounts {
    counts: AHashMap<String, i64>,
}

impl HashWordCounts {
    /// Create an empty tally map.
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordCounts for HashWordCounts {
    fn get(&self, word: &str) -> Option<i64> {
        self.counts.get(word).copied()
    }

    fn set(&mut self, word: &str, count: i64) {
        self.counts.insert(word.to_string(), count);
    }

    fn remove(&mut self, word: &str) -> Option<i64> {
        self.counts.remove(word)
    }

    fn words(&self) -> Vec<String> {
        self.counts.keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.counts.len()
    }

    fn total(&self) -> i64 {
        sum_tallies(self.counts.values().copied())
    }
}

/// Word tallies kept in lexicographic word order.
#[derive(Debug, Clone, Default)]
pub struct OrderedWordCounts {
    counts: BTreeMap<String, i64>,
}

impl OrderedWordCounts {
    /// Create an empty tally map.
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordCounts for OrderedWordCounts {
    fn get(&self, word: &str) -> Option<i64> {
        self.counts.get(word).copied()
    }

    fn set(&mut self, word: &str, count: i64) {
        self.counts.insert(word.to_string(), count);
    }

    fn remove(&mut self, word: &str) -> Option<i64> {
        self.counts.remove(word)
    }

    fn words(&self) -> Vec<String> {
        self.counts.keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.counts.len()
    }

    fn total(&self) -> i64 {
        sum_tallies(self.counts.values().copied())
    }
}

/// Factory producing [`HashWordCounts`].
pub fn default_word_counts_factory() -> WordCountsFactory {
    Arc::new(|| Box::new(HashWordCounts::new()) as Box<dyn WordCounts>)
}

/// Factory producing [`OrderedWordCounts`].
pub fn ordered_word_counts_factory() -> WordCountsFactory {
    Arc::new(|| Box::new(OrderedWordCounts::new()) as Box<dyn WordCounts>)
}
