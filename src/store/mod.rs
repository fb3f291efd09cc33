//! Canonical dictionary storage
//!
//! A [`WordStore`] owns the set of known words. Lookups that need the whole
//! dictionary (anagrams, palindromes, spelling from a letter pool, prefix
//! correction, random draws) live here and hand back a
//! [`WordQuery`](crate::query::WordQuery) for further chaining.

mod lookup;

use std::path::Path;

use log::debug;
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::error::{QueryError, Result};
use crate::query::WordQuery;
use crate::wordlists::load_from_file;

/// Deduplicated set of words with a stable, sorted snapshot
///
/// The set answers membership; the snapshot gives positional access and a
/// deterministic iteration order. Both are rebuilt together whenever the set
/// changes.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    words: FxHashSet<String>,
    snapshot: Vec<String>,
}

impl WordStore {
    /// Load a store from a word list file
    ///
    /// Lines are trimmed, blank lines are skipped, and duplicates collapse.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Io`] if the file cannot be read.
    ///
    /// # Examples
    /// ```no_run
    /// use word_query::store::WordStore;
    ///
    /// let store = WordStore::load("data/words.txt").unwrap();
    /// let palindromes = store.palindromes().sort_by_length(false);
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let store = Self::from_words(load_from_file(path)?);
        debug!("Loaded {} words from {}", store.len(), path.display());
        Ok(store)
    }

    /// Build a store from any sequence of words, collapsing duplicates
    ///
    /// # Examples
    /// ```
    /// use word_query::store::WordStore;
    ///
    /// let store = WordStore::from_words(["cat", "dog", "cat"]);
    /// assert_eq!(store.len(), 2);
    /// assert!(store.is_valid("dog"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_set(words.into_iter().map(Into::into).collect())
    }

    fn from_set(words: FxHashSet<String>) -> Self {
        let mut snapshot: Vec<String> = words.iter().cloned().collect();
        snapshot.sort_unstable();
        Self { words, snapshot }
    }

    /// Replace every word with its lowercase form
    ///
    /// Words that differ only by case collapse into one entry.
    pub fn force_lowercase(&mut self) {
        let before = self.words.len();
        let lowered: FxHashSet<String> = self.words.drain().map(|w| w.to_lowercase()).collect();
        *self = Self::from_set(lowered);
        debug!(
            "Lowercased store: {before} -> {} distinct words",
            self.words.len()
        );
    }

    /// Exact, case-sensitive membership test
    #[inline]
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in snapshot (sorted) order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.snapshot
    }

    /// Every word, as the start of a query chain
    #[must_use]
    pub fn all_words(&self) -> WordQuery {
        WordQuery::new(self.snapshot.clone())
    }

    /// Draw `amount` words uniformly at random, with replacement
    ///
    /// The same word may appear more than once. Uses the thread-local
    /// generator; see [`random_words_with`](Self::random_words_with).
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyStore`] if the store has no words.
    pub fn random_words(&self, amount: usize) -> Result<WordQuery> {
        self.random_words_with(amount, &mut rand::rng())
    }

    /// Draw `amount` words uniformly at random, with replacement, using `rng`
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyStore`] if the store has no words.
    pub fn random_words_with<R: Rng + ?Sized>(
        &self,
        amount: usize,
        rng: &mut R,
    ) -> Result<WordQuery> {
        if self.snapshot.is_empty() {
            return Err(QueryError::EmptyStore);
        }

        let words: WordQuery = (0..amount)
            .map(|_| self.snapshot[rng.random_range(0..self.snapshot.len())].clone())
            .collect();

        debug!("Drew {amount} random words from {}", self.snapshot.len());
        Ok(words)
    }

    /// Snapshot words accepted by `keep`, in snapshot order
    fn select<F>(&self, mut keep: F) -> WordQuery
    where
        F: FnMut(&str) -> bool,
    {
        self.snapshot
            .iter()
            .filter(|word| keep(word.as_str()))
            .cloned()
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for WordStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
