//! Ordering transforms
//!
//! Sorts are stable in both directions: descending order reverses the
//! comparison, not the result, so equal keys keep their input order.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;

use super::WordQuery;
use crate::core::word::char_len;

impl WordQuery {
    /// Sort by code-point order
    ///
    /// # Examples
    /// ```
    /// use word_query::query::WordQuery;
    ///
    /// let words: WordQuery = ["pear", "apple", "fig"].into_iter().collect();
    /// assert_eq!(words.sort_alphabetically(true).to_vec(), vec!["apple", "fig", "pear"]);
    /// assert_eq!(words.sort_alphabetically(false).to_vec(), vec!["pear", "fig", "apple"]);
    /// ```
    #[must_use]
    pub fn sort_alphabetically(&self, ascending: bool) -> Self {
        self.sorted_by(ascending, |a, b| a.cmp(b))
    }

    /// Sort by length in characters
    #[must_use]
    pub fn sort_by_length(&self, ascending: bool) -> Self {
        self.sorted_by(ascending, |a, b| char_len(a).cmp(&char_len(b)))
    }

    /// Sort by how often each word occurs in this query
    #[must_use]
    pub fn sort_by_occurrence(&self, ascending: bool) -> Self {
        let counts = self.occurrences();
        self.sorted_by(ascending, |a, b| counts[a].cmp(&counts[b]))
    }

    /// Drop repeated words, keeping the first occurrence of each
    #[must_use]
    pub fn distinct(&self) -> Self {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        Self {
            items: self
                .items
                .iter()
                .filter(|word| seen.insert(word.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Reverse the order of the words
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            items: self.items.iter().rev().cloned().collect(),
        }
    }

    fn sorted_by<F>(&self, ascending: bool, mut compare: F) -> Self
    where
        F: FnMut(&str, &str) -> Ordering,
    {
        let mut items = self.items.clone();
        if ascending {
            items.sort_by(|a, b| compare(a, b));
        } else {
            items.sort_by(|a, b| compare(b, a));
        }
        Self { items }
    }
}
