//! A category store shared between several owners.
//!
//! Each [`CategoryStore`] call takes the lock once. A classifier operation
//! issues many such calls (one read-modify-write per word), so two writers
//! training the same category at the same time can still lose updates.
//! Callers that need whole-operation isolation must serialize their
//! classifier calls themselves.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;
use crate::storage::memory::MemoryStore;
use crate::storage::traits::{CategoryStore, WordCounts};

/// A cloneable handle to a store behind a read-write lock.
#[derive(Debug)]
pub struct SharedStore<S: CategoryStore = MemoryStore> {
    inner: Arc<RwLock<S>>,
}

impl<S: CategoryStore> SharedStore<S> {
    /// Wrap `store`.
    pub fn new(store: S) -> Self {
        SharedStore {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Lock the store for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, S> {
        self.inner.read()
    }

    /// Lock the store for writing.
    pub fn write(&self) -> RwLockWriteGuard<'_, S> {
        self.inner.write()
    }

    /// Number of live handles to the same store.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<S: CategoryStore> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        SharedStore {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: CategoryStore + Default> Default for SharedStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: CategoryStore> CategoryStore for SharedStore<S> {
    fn contains_category(&self, category: &str) -> Result<bool> {
        self.inner.read().contains_category(category)
    }

    fn create_category(&mut self, category: &str, counts: Box<dyn WordCounts>) -> Result<()> {
        self.inner.write().create_category(category, counts)
    }

    fn get_count(&self, category: &str, word: &str) -> Result<Option<i64>> {
        self.inner.read().get_count(category, word)
    }

    fn set_count(&mut self, category: &str, word: &str, count: i64) -> Result<()> {
        self.inner.write().set_count(category, word, count)
    }

    fn delete_word(&mut self, category: &str, word: &str) -> Result<()> {
        self.inner.write().delete_word(category, word)
    }

    fn delete_category(&mut self, category: &str) -> Result<()> {
        self.inner.write().delete_category(category)
    }

    fn list_categories(&self) -> Result<Vec<String>> {
        self.inner.read().list_categories()
    }

    fn sum_counts(&self, category: &str) -> Result<i64> {
        self.inner.read().sum_counts(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::word_counts::HashWordCounts;

    #[test]
    fn test_handles_see_each_others_writes() {
        let mut first: SharedStore = SharedStore::default();
        let second = first.clone();
        assert_eq!(first.handle_count(), 2);

        first
            .create_category("good", Box::new(HashWordCounts::new()))
            .unwrap();
        first.set_count("good", "sloth", 1).unwrap();

        assert_eq!(second.get_count("good", "sloth").unwrap(), Some(1));
        assert_eq!(second.read().len(), 1);
    }

    #[test]
    fn test_shared_across_threads() {
        let store: SharedStore = SharedStore::default();
        store
            .write()
            .create_category("count", Box::new(HashWordCounts::new()))
            .unwrap();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let mut store = store.clone();
                std::thread::spawn(move || {
                    store.set_count("count", &format!("word{i}"), 1).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.sum_counts("count").unwrap(), 4);
    }
}
