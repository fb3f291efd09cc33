//! Dictionary lookup commands
//!
//! Thin wrappers that pick a [`WordStore`] lookup by name.

use crate::core::word::char_len;
use crate::error::Result;
use crate::query::WordQuery;
use crate::store::WordStore;

/// Maximum number of suggestions offered for an unknown word
const MAX_SUGGESTIONS: usize = 10;

/// A whole-dictionary lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Anagrams(String),
    Palindromes,
    Letters(String),
    Correct { word: String, max_corrections: usize },
    Random(usize),
}

/// Run a lookup against the store
///
/// # Errors
///
/// Returns an error if a random draw is requested from an empty store.
pub fn run_lookup(store: &WordStore, lookup: &Lookup) -> Result<WordQuery> {
    let words = match lookup {
        Lookup::Anagrams(word) => store.anagrams(word),
        Lookup::Palindromes => store.palindromes(),
        Lookup::Letters(pool) => store.words_with_letters(pool).sort_by_length(false),
        Lookup::Correct {
            word,
            max_corrections,
        } => store.autocomplete(word, *max_corrections),
        Lookup::Random(amount) => store.random_words(*amount)?,
    };
    Ok(words)
}

/// Result of checking a single word
pub struct CheckResult {
    pub word: String,
    pub valid: bool,
    /// Close matches, empty when the word is valid
    pub suggestions: WordQuery,
}

/// Check whether `word` is known, suggesting corrections if it is not
///
/// Suggestions are words of the same length one substitution away.
#[must_use]
pub fn check_word(store: &WordStore, word: &str) -> CheckResult {
    let valid = store.is_valid(word);
    let suggestions = if valid {
        WordQuery::default()
    } else {
        let length = char_len(word);
        store
            .autocomplete(word, 1)
            .filter_custom(|candidate| char_len(candidate) == length)
            .take(MAX_SUGGESTIONS)
    };

    CheckResult {
        word: word.to_string(),
        valid,
        suggestions,
    }
}
