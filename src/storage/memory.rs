//! In-memory category store.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::storage::traits::{CategoryStore, StorageError, WordCounts, WordCountsFactory};
use crate::storage::word_counts::default_word_counts_factory;

/// Plain nested-map view of a store's contents.
pub type StoreSnapshot = BTreeMap<String, BTreeMap<String, i64>>;

/// An in-memory category store.
///
/// Categories are kept in a `BTreeMap`, so they are always listed in name
/// order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    categories: BTreeMap<String, Box<dyn WordCounts>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled from a nested map.
    ///
    /// Values are copied as-is, including zero or negative tallies, so a
    /// store can be seeded with data written by another process.
    pub fn from_snapshot(snapshot: StoreSnapshot, factory: &WordCountsFactory) -> Self {
        let categories = snapshot
            .into_iter()
            .map(|(category, words)| {
                let mut counts = factory();
                for (word, count) in words {
                    counts.set(&word, count);
                }
                (category, counts)
            })
            .collect();

        MemoryStore { categories }
    }

    /// Copy the store's contents into a nested map.
    pub fn snapshot(&self) -> StoreSnapshot {
        self.categories
            .iter()
            .map(|(category, counts)| {
                let words = counts
                    .words()
                    .into_iter()
                    .filter_map(|word| counts.get(&word).map(|count| (word, count)))
                    .collect();
                (category.clone(), words)
            })
            .collect()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the store holds no category.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl From<StoreSnapshot> for MemoryStore {
    fn from(snapshot: StoreSnapshot) -> Self {
        Self::from_snapshot(snapshot, &default_word_counts_factory())
    }
}

impl CategoryStore for MemoryStore {
    fn contains_category(&self, category: &str) -> Result<bool> {
        Ok(self.categories.contains_key(category))
    }

    fn create_category(&mut self, category: &str, counts: Box<dyn WordCounts>) -> Result<()> {
        self.categories.insert(category.to_string(), counts);
        Ok(())
    }

    fn get_count(&self, category: &str, word: &str) -> Result<Option<i64>> {
        Ok(self
            .categories
            .get(category)
            .and_then(|counts| counts.get(word)))
    }

    fn set_count(&mut self, category: &str, word: &str, count: i64) -> Result<()> {
        let counts = self
            .categories
            .get_mut(category)
            .ok_or_else(|| StorageError::CategoryNotFound(category.to_string()))?;
        counts.set(word, count);
        Ok(())
    }

    fn delete_word(&mut self, category: &str, word: &str) -> Result<()> {
        if let Some(counts) = self.categories.get_mut(category) {
            counts.remove(word);
        }
        Ok(())
    }

    fn delete_category(&mut self, category: &str) -> Result<()> {
        self.categories.remove(category);
        Ok(())
    }

    fn list_categories(&self) -> Result<Vec<String>> {
        Ok(self.categories.keys().cloned().collect())
    }

    fn sum_counts(&self, category: &str) -> Result<i64> {
        Ok(self
            .categories
            .get(category)
            .map_or(0, |counts| counts.total()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::word_counts::HashWordCounts;

    #[test]
    fn test_memory_store_basic_operations() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(!store.contains_category("good").unwrap());

        store
            .create_category("good", Box::new(HashWordCounts::new()))
            .unwrap();
        store.set_count("good", "sloth", 2).unwrap();
        store.set_count("good", "love", 3).unwrap();

        assert!(store.contains_category("good").unwrap());
        assert_eq!(store.get_count("good", "sloth").unwrap(), Some(2));
        assert_eq!(store.get_count("good", "zombie").unwrap(), None);
        assert_eq!(store.get_count("bad", "zombie").unwrap(), None);
        assert_eq!(store.sum_counts("good").unwrap(), 5);
        assert_eq!(store.sum_counts("bad").unwrap(), 0);

        store.delete_word("good", "sloth").unwrap();
        assert_eq!(store.sum_counts("good").unwrap(), 3);

        store.delete_category("good").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_count_requires_category() {
        let mut store = MemoryStore::new();
        let err = store.set_count("ghost", "boo", 1).unwrap_err();
        assert_eq!(err.to_string(), "Storage error: Category not found: ghost");
    }

    #[test]
    fn test_deleting_missing_entries_is_noop() {
        let mut store = MemoryStore::new();
        store.delete_word("ghost", "boo").unwrap();
        store.delete_category("ghost").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_categories_listed_in_order() {
        let mut store = MemoryStore::new();
        for name in ["spam", "ham", "eggs"] {
            store
                .create_category(name, Box::new(HashWordCounts::new()))
                .unwrap();
        }

        assert_eq!(store.list_categories().unwrap(), vec!["eggs", "ham", "spam"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut snapshot = StoreSnapshot::new();
        snapshot
            .entry("bad".to_string())
            .or_default()
            .insert("zombie".to_string(), 4);
        snapshot
            .entry("bad".to_string())
            .or_default()
            .insert("fear".to_string(), 1);

        let store = MemoryStore::from(snapshot.clone());
        assert_eq!(store.sum_counts("bad").unwrap(), 5);
        assert_eq!(store.snapshot(), snapshot);
    }
}
