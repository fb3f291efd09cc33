//! Chainable word queries
//!
//! A [`WordQuery`] is an ordered list of words that may contain duplicates.
//! Every transform borrows the receiver and returns a new query, so any stage
//! of a chain can be kept and reused:
//!
//! ```
//! use word_query::query::WordQuery;
//!
//! let words: WordQuery = ["crane", "crate", "slate", "cat"].into_iter().collect();
//! let five = words.fixed_length(5).unwrap();
//! let cr = five.starts_with("cr");
//!
//! assert_eq!(cr.to_vec(), vec!["crane", "crate"]);
//! assert_eq!(five.count(), 3); // unchanged
//! ```

mod filter;
mod order;
mod sets;

use std::fmt;
use std::path::Path;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{QueryError, Result};
use crate::wordlists::save_to_file;

/// Immutable, ordered collection of words
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WordQuery {
    items: Vec<String>,
}

impl WordQuery {
    /// Wrap an existing list of words, keeping order and duplicates
    #[must_use]
    pub const fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Number of words, duplicates included
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`count`](Self::count)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Word at position `index`
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::IndexOutOfRange`] if `index >= count()`.
    pub fn index(&self, index: usize) -> Result<&str> {
        self.items
            .get(index)
            .map(String::as_str)
            .ok_or(QueryError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.items.last().map(String::as_str)
    }

    /// Iterate over the words in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Copy the words into a vector, order and duplicates preserved
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }

    /// Collect the distinct words into a set
    #[must_use]
    pub fn to_set(&self) -> FxHashSet<String> {
        self.items.iter().cloned().collect()
    }

    /// How many times each distinct word occurs
    #[must_use]
    pub fn occurrences(&self) -> FxHashMap<&str, usize> {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for word in &self.items {
            *counts.entry(word.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Apply `f` to every word
    ///
    /// The result has the same length and order; duplicates produced by `f`
    /// are kept.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        Self {
            items: self.iter().map(f).collect(),
        }
    }

    /// First `amount` words
    #[must_use]
    pub fn take(&self, amount: usize) -> Self {
        Self {
            items: self.items.iter().take(amount).cloned().collect(),
        }
    }

    /// Sample up to `amount` distinct words without replacement
    ///
    /// Uses the thread-local generator; see [`random_with`](Self::random_with)
    /// to supply one.
    #[must_use]
    pub fn random(&self, amount: usize) -> Self {
        self.random_with(amount, &mut rand::rng())
    }

    /// Sample up to `amount` distinct words without replacement using `rng`
    ///
    /// Duplicates in the receiver are collapsed before drawing, so the result
    /// never repeats a word. Fewer than `amount` words are returned when fewer
    /// distinct words exist. The result is in draw order.
    #[must_use]
    pub fn random_with<R: Rng + ?Sized>(&self, amount: usize, rng: &mut R) -> Self {
        let pool = self.distinct();
        let items: Vec<String> = pool.items.choose_multiple(rng, amount).cloned().collect();

        debug!(
            "Sampled {} of {} distinct words (requested {amount})",
            items.len(),
            pool.len()
        );

        Self { items }
    }

    /// Write the words to `path`, one per line, replacing existing content
    ///
    /// Duplicates are written as-is.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Io`] if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        save_to_file(path, &self.items)?;
        debug!("Saved {} words to {}", self.items.len(), path.display());
        Ok(())
    }

    /// Keep the words accepted by `keep`, preserving order
    fn retain<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        Self {
            items: self
                .items
                .iter()
                .filter(|word| keep(word.as_str()))
                .cloned()
                .collect(),
        }
    }
}

impl From<Vec<String>> for WordQuery {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl<S: Into<String>> FromIterator<S> for WordQuery {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for WordQuery {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordQuery {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for WordQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.items.join("\n"))
    }
}
