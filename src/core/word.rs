//! Per-word predicates
//!
//! Small, allocation-light checks on a single word. Lengths and positions are
//! counted in characters, not bytes, so multi-byte letters occupy one slot.

use super::LetterCounts;

/// Length of a word in characters
#[inline]
#[must_use]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Check if a word reads the same in both directions
///
/// Compares characters from both ends moving toward the center.
///
/// # Examples
/// ```
/// use word_query::core::word::is_palindrome;
///
/// assert!(is_palindrome("racecar"));
/// assert!(!is_palindrome("hello"));
/// ```
#[must_use]
pub fn is_palindrome(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return true;
    }

    let (mut left, mut right) = (0, chars.len() - 1);
    while left < right {
        if chars[left] != chars[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

/// Sorted characters of a word
///
/// Two words are anagrams exactly when their keys are equal.
#[must_use]
pub fn anagram_key(word: &str) -> Vec<char> {
    let mut key: Vec<char> = word.chars().collect();
    key.sort_unstable();
    key
}

/// Count index-aligned mismatches between `prefix` and the start of `word`
///
/// Returns `None` if `word` is shorter than `prefix`. Characters of `word`
/// beyond the prefix length are ignored.
///
/// # Examples
/// ```
/// use word_query::core::word::prefix_mismatches;
///
/// assert_eq!(prefix_mismatches("cas", "cat"), Some(1));
/// assert_eq!(prefix_mismatches("cas", "cast"), Some(0));
/// assert_eq!(prefix_mismatches("cas", "ca"), None);
/// ```
#[must_use]
pub fn prefix_mismatches(prefix: &str, word: &str) -> Option<usize> {
    let mut word_chars = word.chars();
    let mut mismatches = 0;

    for expected in prefix.chars() {
        let actual = word_chars.next()?;
        if actual != expected {
            mismatches += 1;
        }
    }

    Some(mismatches)
}

/// True if no character occurs more than once
#[must_use]
pub fn has_unique_letters(word: &str) -> bool {
    !LetterCounts::new(word).has_repeats()
}
