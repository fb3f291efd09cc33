//! Whole-dictionary lookups
//!
//! Each lookup scans the snapshot once and returns matches in snapshot order.

use super::WordStore;
use crate::core::LetterCounts;
use crate::core::word::{anagram_key, char_len, is_palindrome, prefix_mismatches};
use crate::query::WordQuery;

impl WordStore {
    /// Words that can be spelled from the pool `letters`
    ///
    /// A word qualifies when no character occurs in it more often than in the
    /// pool. Letters need not all be used.
    ///
    /// # Examples
    /// ```
    /// use word_query::store::WordStore;
    ///
    /// let store = WordStore::from_words(["cat", "dog", "bat", "cats"]);
    /// let found = store.words_with_letters("abctdog");
    /// assert_eq!(found.to_vec(), vec!["bat", "cat", "dog"]);
    /// ```
    #[must_use]
    pub fn words_with_letters(&self, letters: &str) -> WordQuery {
        let pool = LetterCounts::new(letters);
        self.select(|word| pool.can_spell(word))
    }

    /// Words at most `max_corrections` substitutions away from `invalid_word`
    ///
    /// Only the first `len(invalid_word)` characters of each candidate are
    /// compared, position by position; candidates shorter than
    /// `invalid_word` are skipped and trailing characters are free. This is a
    /// prefix-anchored Hamming distance, not an edit distance.
    ///
    /// # Examples
    /// ```
    /// use word_query::store::WordStore;
    ///
    /// let store = WordStore::from_words(["cat", "cast", "dog", "ca"]);
    /// assert_eq!(store.autocomplete("cas", 1).to_vec(), vec!["cast", "cat"]);
    /// ```
    #[must_use]
    pub fn autocomplete(&self, invalid_word: &str, max_corrections: usize) -> WordQuery {
        self.select(|word| {
            prefix_mismatches(invalid_word, word).is_some_and(|count| count <= max_corrections)
        })
    }

    /// Words made of exactly the same letters as `word`, including `word` itself
    #[must_use]
    pub fn anagrams(&self, word: &str) -> WordQuery {
        let length = char_len(word);
        let key = anagram_key(word);
        self.select(|candidate| char_len(candidate) == length && anagram_key(candidate) == key)
    }

    /// Words that read the same backwards
    #[must_use]
    pub fn palindromes(&self) -> WordQuery {
        self.select(is_palindrome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_respect_counts() {
        let store = WordStore::from_words(["cat", "dog", "bat", "cats"]);
        let found = store.words_with_letters("abctdog").to_set();

        assert_eq!(found.len(), 3);
        for word in ["cat", "dog", "bat"] {
            assert!(found.contains(word));
        }
        assert!(!found.contains("cats"));
    }

    #[test]
    fn letters_reject_overused_letter() {
        let store = WordStore::from_words(["all", "al", "la", "lull"]);

        assert_eq!(store.words_with_letters("alx").to_vec(), vec!["al", "la"]);
        assert_eq!(
            store.words_with_letters("lla").to_vec(),
            vec!["al", "all", "la"]
        );
    }

    #[test]
    fn letters_empty_pool() {
        let store = WordStore::from_words(["a", "b"]);
        assert!(store.words_with_letters("").is_empty());
    }

    #[test]
    fn autocomplete_one_correction() {
        let store = WordStore::from_words(["cat", "cast", "cot", "dog", "ca"]);
        let found = store.autocomplete("cas", 1).to_set();

        assert!(found.contains("cat"));
        assert!(found.contains("cast"));
        assert!(!found.contains("cot")); // two positions differ
        assert!(!found.contains("ca")); // too short
        assert!(!found.contains("dog"));
    }

    #[test]
    fn autocomplete_zero_corrections_is_prefix_match() {
        let store = WordStore::from_words(["cat", "catalog", "cut", "ca"]);
        assert_eq!(
            store.autocomplete("cat", 0).to_vec(),
            vec!["cat", "catalog"]
        );
    }

    #[test]
    fn autocomplete_ignores_trailing_characters() {
        let store = WordStore::from_words(["bxxxxxxxxx"]);
        assert_eq!(store.autocomplete("ax", 1).count(), 1);
        assert!(store.autocomplete("ay", 1).is_empty());
    }

    #[test]
    fn anagrams_of_silent() {
        let store = WordStore::from_words(["listen", "silent", "tinsel", "lisnet", "cat"]);
        let found = store.anagrams("silent").to_set();

        for word in ["listen", "silent", "tinsel", "lisnet"] {
            assert!(found.contains(word), "missing {word}");
        }
        assert!(!found.contains("cat"));
    }

    #[test]
    fn anagrams_need_equal_multiplicity() {
        let store = WordStore::from_words(["aab", "abb", "ab", "baa"]);
        assert_eq!(store.anagrams("aba").to_vec(), vec!["aab", "baa"]);
    }

    #[test]
    fn anagrams_include_word_not_in_store() {
        let store = WordStore::from_words(["act", "cat"]);
        assert_eq!(store.anagrams("tac").to_vec(), vec!["act", "cat"]);
    }

    #[test]
    fn palindromes_in_store() {
        let store = WordStore::from_words(["racecar", "hello", "level", "noon"]);
        let found = store.palindromes().to_set();

        assert_eq!(found.len(), 3);
        for word in ["racecar", "level", "noon"] {
            assert!(found.contains(word));
        }
    }

    #[test]
    fn lookups_on_empty_store() {
        let store = WordStore::default();

        assert!(store.palindromes().is_empty());
        assert!(store.anagrams("cat").is_empty());
        assert!(store.autocomplete("cat", 3).is_empty());
        assert!(store.words_with_letters("abc").is_empty());
    }
}
