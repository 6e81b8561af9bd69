//! Naive Bayes classifier over per-category word tallies.
//!
//! Training adds each word's occurrence count to the category's tally for
//! that word; untraining subtracts it again. Scoring sums, for every
//! distinct query word, `ln(tally / category_total)` per category, using the
//! correction constant in place of the tally of a word the category has
//! never seen.
//!
//! The store must satisfy two invariants, which this type maintains and
//! checks:
//!
//! - no word tally is negative, and a tally of zero is stored as absence;
//! - no category total is negative.
//!
//! A negative value read back from the store can only come from outside
//! interference, and is reported as [`BayesError::CorruptStore`].

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use tracing::{debug, trace, warn};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::occurrences::occurrences;
use crate::classifier::classifier::Classifier;
use crate::classifier::config::ClassifierConfig;
use crate::error::{BayesError, Result};
use crate::storage::accessor::StoreAccessor;
use crate::storage::memory::MemoryStore;
use crate::storage::traits::{CategoryStore, WordCountsFactory};

/// Log-likelihood score per category.
pub type Scores = BTreeMap<String, f64>;

/// A naive Bayesian text classifier.
///
/// The classifier reads and writes a caller-supplied [`CategoryStore`] and
/// keeps no other state besides the set of categories present at
/// construction, which [`reset`](Self::reset) leaves untouched.
///
/// Operations are not atomic across words. When several classifiers share a
/// backend (see [`SharedStore`](crate::storage::SharedStore)), concurrent
/// training of the same category can lose updates.
pub struct NaiveBayesClassifier<S: CategoryStore = MemoryStore> {
    accessor: StoreAccessor<S>,
    analyzer: Arc<dyn Analyzer>,
    correction: f64,
    initial_categories: HashSet<String>,
}

impl NaiveBayesClassifier<MemoryStore> {
    /// Create a classifier over a fresh, empty in-memory store.
    pub fn in_memory() -> Result<Self> {
        Self::new(MemoryStore::new())
    }
}

impl<S: CategoryStore> NaiveBayesClassifier<S> {
    /// Create a classifier over `store` with the default configuration.
    pub fn new(store: S) -> Result<Self> {
        Self::with_config(store, ClassifierConfig::default())
    }

    /// Create a classifier over `store`.
    ///
    /// Fails with [`BayesError::InvalidConfig`] if the correction is not a
    /// finite positive number.
    pub fn with_config(store: S, config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        let analyzer: Arc<dyn Analyzer> = Arc::new(config.build_analyzer()?);

        let accessor = StoreAccessor::new(store);
        let initial_categories: HashSet<String> = accessor.categories()?.into_iter().collect();
        debug!(
            existing_categories = initial_categories.len(),
            correction = config.correction,
            "created naive bayes classifier"
        );

        Ok(NaiveBayesClassifier {
            accessor,
            analyzer,
            correction: config.correction,
            initial_categories,
        })
    }

    /// Use `analyzer` instead of the configured English tokenizer.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Create new categories with sub-mappings from `factory`.
    pub fn with_word_counts_factory(mut self, factory: WordCountsFactory) -> Self {
        self.accessor.set_factory(factory);
        self
    }

    /// The correction constant.
    pub fn correction(&self) -> f64 {
        self.correction
    }

    /// The analyzer turning text into words.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Categories that existed when this classifier was created.
    pub fn initial_categories(&self) -> &HashSet<String> {
        &self.initial_categories
    }

    /// Borrow the backing store.
    pub fn store(&self) -> &S {
        self.accessor.store()
    }

    /// Give the backing store back to the caller.
    pub fn into_store(self) -> S {
        self.accessor.into_inner()
    }

    /// All category names currently in the store.
    pub fn categories(&self) -> Result<Vec<String>> {
        self.accessor.categories()
    }

    /// Add the words of `text` to `category`.
    ///
    /// The category is created if absent, even when `text` yields no words.
    /// Training the same text twice doubles its counts.
    pub fn train<T: AsRef<[u8]> + ?Sized>(&mut self, category: &str, text: &T) -> Result<()> {
        let counts = self.count_words(text)?;
        self.accessor.ensure_category(category)?;

        for (word, count) in counts.iter() {
            let current = self.accessor.word_count(category, word, 0)?;
            let current = Self::non_negative(category, word, current)?;
            let updated = current.saturating_add(Self::as_tally(*count));
            self.accessor.set_word_count(category, word, updated)?;
        }

        debug!(category, words = counts.len(), "trained category");
        Ok(())
    }

    /// Remove the words of `text` from `category`.
    ///
    /// Words whose tally drops to zero or below are deleted, and the
    /// category itself is deleted once its total reaches zero. Untraining
    /// words or categories that were never trained is a no-op.
    pub fn untrain<T: AsRef<[u8]> + ?Sized>(&mut self, category: &str, text: &T) -> Result<()> {
        let counts = self.count_words(text)?;

        for (word, count) in counts.iter() {
            let Some(current) = self.checked_word_count(category, word)? else {
                continue;
            };

            let remaining = current.saturating_sub(Self::as_tally(*count));
            if remaining > 0 {
                self.accessor.set_word_count(category, word, remaining)?;
            } else {
                self.accessor.delete_word(category, word)?;
            }
        }

        if self.accessor.has_category(category)? && self.tally(category)? == 0 {
            self.accessor.delete_category(category)?;
            debug!(category, "removed emptied category");
        }

        debug!(category, words = counts.len(), "untrained category");
        Ok(())
    }

    /// Score `text` against every category with a non-zero total.
    ///
    /// Each distinct query word contributes one `ln(tally / total)` term,
    /// however often it occurs in the query. A query without any word scores
    /// `0.0` in every trained category. Categories with a zero total are left
    /// out of the result.
    pub fn score<T: AsRef<[u8]> + ?Sized>(&self, text: &T) -> Result<Scores> {
        let mut words: Vec<String> = self
            .count_words(text)?
            .into_iter()
            .map(|(word, _)| word)
            .collect();
        words.sort_unstable();

        let mut scores = Scores::new();
        for category in self.accessor.categories()? {
            let tally = self.tally(&category)?;
            if tally == 0 {
                continue;
            }

            let mut score = 0.0;
            for word in &words {
                let count = match self.checked_word_count(&category, word)? {
                    Some(count) if count > 0 => count as f64,
                    _ => self.correction,
                };
                score += (count / tally as f64).ln();
            }

            trace!(category = %category, score, "scored category");
            scores.insert(category, score);
        }

        Ok(scores)
    }

    /// Score `text` and order the categories best first.
    ///
    /// Equal scores are ordered by category name.
    pub fn ranked<T: AsRef<[u8]> + ?Sized>(&self, text: &T) -> Result<Vec<(String, f64)>> {
        let mut ranked: Vec<(String, f64)> = self.score(text)?.into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(ranked)
    }

    /// Pick the category scoring highest for `text`.
    ///
    /// Returns `None` when no category has any trained data. Ties go to the
    /// category whose name sorts first.
    pub fn classify<T: AsRef<[u8]> + ?Sized>(&self, text: &T) -> Result<Option<String>> {
        Ok(self
            .ranked(text)?
            .into_iter()
            .next()
            .map(|(category, _)| category))
    }

    /// Remove every category added since this classifier was created.
    ///
    /// Categories present at construction survive, with whatever data they
    /// hold now.
    pub fn reset(&mut self) -> Result<()> {
        let mut removed = 0;
        for category in self.accessor.categories()? {
            if !self.initial_categories.contains(&category) {
                self.accessor.delete_category(&category)?;
                removed += 1;
            }
        }

        debug!(removed, "reset classifier");
        Ok(())
    }

    /// Remove every category, including those present at construction.
    ///
    /// Afterwards all data counts as added by this classifier, so a later
    /// [`reset`](Self::reset) removes it too.
    pub fn clear(&mut self) -> Result<()> {
        let categories = self.accessor.categories()?;
        for category in &categories {
            self.accessor.delete_category(category)?;
        }
        self.initial_categories.clear();

        debug!(removed = categories.len(), "cleared classifier");
        Ok(())
    }

    /// Sum of all word tallies of `category`; zero if it does not exist.
    pub fn tally(&self, category: &str) -> Result<i64> {
        let tally = self.accessor.sum(category)?;
        if tally < 0 {
            warn!(category, tally, "negative category total in store");
            return Err(BayesError::corrupt_store(format!(
                "category '{category}' has negative total {tally}"
            )));
        }
        Ok(tally)
    }

    fn count_words<T: AsRef<[u8]> + ?Sized>(&self, text: &T) -> Result<AHashMap<String, u64>> {
        let text = std::str::from_utf8(text.as_ref())?;
        Ok(occurrences(self.analyzer.words(text)?))
    }

    fn checked_word_count(&self, category: &str, word: &str) -> Result<Option<i64>> {
        self.accessor
            .get_word_count(category, word)?
            .map(|count| Self::non_negative(category, word, count))
            .transpose()
    }

    fn non_negative(category: &str, word: &str, count: i64) -> Result<i64> {
        if count < 0 {
            warn!(category, word, count, "negative word tally in store");
            return Err(BayesError::corrupt_store(format!(
                "word '{word}' in category '{category}' has negative tally {count}"
            )));
        }
        Ok(count)
    }

    fn as_tally(count: u64) -> i64 {
        i64::try_from(count).unwrap_or(i64::MAX)
    }
}

impl<S: CategoryStore> Classifier for NaiveBayesClassifier<S> {
    fn classify(&self, text: &str) -> Result<Option<String>> {
        NaiveBayesClassifier::classify(self, text)
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}

impl<S: CategoryStore> fmt::Debug for NaiveBayesClassifier<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("store", self.accessor.store())
            .field("analyzer", &self.analyzer.name())
            .field("correction", &self.correction)
            .field("initial_categories", &self.initial_categories)
            .finish()
    }
}
