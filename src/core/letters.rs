//! Letter-frequency tables
//!
//! A `LetterCounts` is the multiset of characters in a piece of text. It backs
//! the "which words can I spell from these letters" search and the repeated
//! letter checks.

use rustc_hash::FxHashMap;

/// Multiset of the characters in a string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
}

impl LetterCounts {
    /// Count every character of `text`
    ///
    /// # Examples
    /// ```
    /// use word_query::core::LetterCounts;
    ///
    /// let counts = LetterCounts::new("speed");
    /// assert_eq!(counts.count('e'), 2);
    /// assert_eq!(counts.count('z'), 0);
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of times `letter` occurs
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Number of distinct characters
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of characters, repeats included
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// True if any character occurs more than once
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        self.counts.values().any(|&count| count > 1)
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Each character of the word consumes one occurrence from the pool; the
    /// word fails as soon as a character is missing or used up.
    ///
    /// # Examples
    /// ```
    /// use word_query::core::LetterCounts;
    ///
    /// let pool = LetterCounts::new("abctdog");
    /// assert!(pool.can_spell("cat"));
    /// assert!(!pool.can_spell("cats"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut available = self.counts.clone();
        for ch in word.chars() {
            match available.get_mut(&ch) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }
}
