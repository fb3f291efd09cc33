//! Filtering transforms
//!
//! All filters are stable: surviving words keep their relative order.

use regex::Regex;

use super::WordQuery;
use crate::core::WordPattern;
use crate::core::word::{char_len, has_unique_letters};
use crate::error::{QueryError, Result};

impl WordQuery {
    /// Keep words starting with `prefix`; an empty prefix keeps everything
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> Self {
        if prefix.is_empty() {
            return self.clone();
        }
        self.retain(|word| word.starts_with(prefix))
    }

    /// Keep words ending with `suffix`; an empty suffix keeps everything
    #[must_use]
    pub fn ends_with(&self, suffix: &str) -> Self {
        if suffix.is_empty() {
            return self.clone();
        }
        self.retain(|word| word.ends_with(suffix))
    }

    /// Keep words containing `substring`; an empty substring keeps everything
    #[must_use]
    pub fn contains(&self, substring: &str) -> Self {
        if substring.is_empty() {
            return self.clone();
        }
        self.retain(|word| word.contains(substring))
    }

    /// Keep words with at least `n` characters
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidLength`] if `n` is zero.
    pub fn min_length(&self, n: usize) -> Result<Self> {
        let n = positive(n)?;
        Ok(self.retain(|word| char_len(word) >= n))
    }

    /// Keep words with at most `n` characters
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidLength`] if `n` is zero.
    pub fn max_length(&self, n: usize) -> Result<Self> {
        let n = positive(n)?;
        Ok(self.retain(|word| char_len(word) <= n))
    }

    /// Keep words with exactly `n` characters
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidLength`] if `n` is zero.
    pub fn fixed_length(&self, n: usize) -> Result<Self> {
        let n = positive(n)?;
        Ok(self.retain(|word| char_len(word) == n))
    }

    /// Keep words accepted by a caller-supplied predicate
    #[must_use]
    pub fn filter_custom<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        self.retain(predicate)
    }

    /// Keep words containing `letter` at least once
    #[must_use]
    pub fn with_letter(&self, letter: char) -> Self {
        self.retain(|word| word.contains(letter))
    }

    /// Keep words that never contain `letter`
    #[must_use]
    pub fn without_letter(&self, letter: char) -> Self {
        self.retain(|word| !word.contains(letter))
    }

    /// Keep words in which no letter repeats
    #[must_use]
    pub fn with_unique_letters(&self) -> Self {
        self.retain(has_unique_letters)
    }

    /// Keep words with at least one repeated letter
    #[must_use]
    pub fn without_unique_letters(&self) -> Self {
        self.retain(|word| !has_unique_letters(word))
    }

    /// Keep words matching a positional pattern
    ///
    /// `*` matches any character, `?` a vowel, `!` a non-vowel; any other
    /// character must match exactly. Words must be as long as the pattern.
    ///
    /// # Examples
    /// ```
    /// use word_query::query::WordQuery;
    ///
    /// let words: WordQuery = ["cat", "cot", "cup", "dot"].into_iter().collect();
    /// assert_eq!(words.match_pattern("c*t").to_vec(), vec!["cat", "cot"]);
    /// ```
    #[must_use]
    pub fn match_pattern(&self, pattern: &str) -> Self {
        self.match_word_pattern(&WordPattern::parse(pattern))
    }

    /// Keep words matching an already parsed pattern
    #[must_use]
    pub fn match_word_pattern(&self, pattern: &WordPattern) -> Self {
        self.retain(|word| pattern.matches(word))
    }

    /// Keep words in which the regular expression finds a match
    ///
    /// The match may occur anywhere in the word unless the expression is
    /// anchored with `^` / `$`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Regex`] if `pattern` does not compile.
    pub fn match_regex(&self, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(self.match_compiled_regex(&regex))
    }

    /// Keep words in which a compiled regular expression finds a match
    #[must_use]
    pub fn match_compiled_regex(&self, regex: &Regex) -> Self {
        self.retain(|word| regex.is_match(word))
    }
}

fn positive(n: usize) -> Result<usize> {
    if n == 0 {
        Err(QueryError::InvalidLength(n))
    } else {
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(words: &[&str]) -> WordQuery {
        words.iter().copied().collect()
    }

    #[test]
    fn string_relations() {
        let q = query(&["crane", "crate", "slate", "irate", "cat"]);

        assert_eq!(q.starts_with("cr").to_vec(), vec!["crane", "crate"]);
        assert_eq!(q.ends_with("ate").to_vec(), vec!["crate", "slate", "irate"]);
        assert_eq!(q.contains("ra").to_vec(), vec!["crane", "crate", "irate"]);
    }

    #[test]
    fn empty_arguments_are_no_ops() {
        let q = query(&["b", "a", "b"]);

        assert_eq!(q.starts_with(""), q);
        assert_eq!(q.ends_with(""), q);
        assert_eq!(q.contains(""), q);
    }

    #[test]
    fn length_bounds() {
        let q = query(&["a", "ab", "abc", "abcd"]);

        assert_eq!(q.min_length(3).unwrap().to_vec(), vec!["abc", "abcd"]);
        assert_eq!(q.max_length(2).unwrap().to_vec(), vec!["a", "ab"]);
        assert_eq!(q.fixed_length(3).unwrap().to_vec(), vec!["abc"]);
        assert!(q.fixed_length(10).unwrap().is_empty());
    }

    #[test]
    fn length_counts_characters() {
        let q = query(&["café", "cafe", "caf"]);
        assert_eq!(q.fixed_length(4).unwrap().to_vec(), vec!["café", "cafe"]);
    }

    #[test]
    fn zero_length_bound_is_rejected() {
        let q = query(&["a"]);

        assert!(matches!(q.min_length(0), Err(QueryError::InvalidLength(0))));
        assert!(matches!(q.max_length(0), Err(QueryError::InvalidLength(0))));
        assert!(matches!(
            q.fixed_length(0),
            Err(QueryError::InvalidLength(0))
        ));
    }

    #[test]
    fn custom_predicate() {
        let q = query(&["apple", "banana", "avocado", "cherry"]);
        let result = q.filter_custom(|w| w.starts_with('a') && w.len() > 5);
        assert_eq!(result.to_vec(), vec!["avocado"]);
    }

    #[test]
    fn letter_filters() {
        let q = query(&["cat", "dog", "cow", "owl"]);

        assert_eq!(q.with_letter('o').to_vec(), vec!["dog", "cow", "owl"]);
        assert_eq!(q.without_letter('o').to_vec(), vec!["cat"]);
    }

    #[test]
    fn unique_letter_filters() {
        let q = query(&["crane", "speed", "slate", "llama"]);

        assert_eq!(q.with_unique_letters().to_vec(), vec!["crane", "slate"]);
        assert_eq!(q.without_unique_letters().to_vec(), vec!["speed", "llama"]);
    }

    #[test]
    fn pattern_with_wildcard() {
        let q = query(&["cat", "cot", "cup", "dot"]);
        assert_eq!(q.match_pattern("c*t").to_vec(), vec!["cat", "cot"]);
    }

    #[test]
    fn pattern_vowel_and_consonant_positions() {
        let q = query(&["cat", "cot", "cut", "cst", "cab", "cae"]);

        assert_eq!(q.match_pattern("c?t").to_vec(), vec!["cat", "cot", "cut"]);
        assert_eq!(q.match_pattern("ca!").to_vec(), vec!["cat", "cab"]);
        assert_eq!(q.match_pattern("c!t").to_vec(), vec!["cst"]);
    }

    #[test]
    fn pattern_requires_equal_length() {
        let q = query(&["cat", "cats", "ca"]);
        assert_eq!(q.match_pattern("***").to_vec(), vec!["cat"]);
    }

    #[test]
    fn regex_search_semantics() {
        let q = query(&["planet", "plant", "slant", "apple"]);

        assert_eq!(q.match_regex("ant").unwrap().to_vec(), vec!["plant", "slant"]);
        assert_eq!(q.match_regex("^pl").unwrap().to_vec(), vec!["planet", "plant"]);
        assert_eq!(q.match_regex("e$").unwrap().to_vec(), vec!["apple"]);
    }

    #[test]
    fn invalid_regex_is_an_error() {
        let q = query(&["a"]);
        assert!(matches!(q.match_regex("(unclosed"), Err(QueryError::Regex(_))));
    }

    #[test]
    fn filters_keep_duplicates_and_order() {
        let q = query(&["dog", "cat", "dog"]);
        assert_eq!(q.with_letter('d').to_vec(), vec!["dog", "dog"]);
    }
}
