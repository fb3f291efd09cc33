//! Positional word patterns
//!
//! A pattern is a string where each character constrains the letter at the
//! same position of a candidate word:
//! - `*` = any character
//! - `?` = a vowel (`a e i o u`)
//! - `!` = anything that is not a vowel
//! - anything else = that exact character
//!
//! A word matches only if it has exactly as many characters as the pattern.

use std::fmt;
use std::str::FromStr;

/// Check if a character is one of `a e i o u`, ignoring ASCII case
#[inline]
#[must_use]
pub fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// A single position in a [`WordPattern`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// `*`
    Any,
    /// `?`
    Vowel,
    /// `!`
    Consonant,
    /// Exact character match
    Literal(char),
}

impl Slot {
    /// Parse a single pattern character
    #[inline]
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        match ch {
            '*' => Self::Any,
            '?' => Self::Vowel,
            '!' => Self::Consonant,
            other => Self::Literal(other),
        }
    }

    /// Check whether `ch` is allowed at this position
    #[inline]
    #[must_use]
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Self::Any => true,
            Self::Vowel => is_vowel(ch),
            Self::Consonant => !is_vowel(ch),
            Self::Literal(expected) => ch == expected,
        }
    }

    const fn as_char(self) -> char {
        match self {
            Self::Any => '*',
            Self::Vowel => '?',
            Self::Consonant => '!',
            Self::Literal(ch) => ch,
        }
    }
}

/// Fixed-length positional pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPattern {
    slots: Vec<Slot>,
}

impl WordPattern {
    /// Parse a pattern string
    ///
    /// Every character is valid, so parsing cannot fail.
    ///
    /// # Examples
    /// ```
    /// use word_query::core::WordPattern;
    ///
    /// let pattern = WordPattern::parse("c?!");
    /// assert!(pattern.matches("cat"));
    /// assert!(!pattern.matches("cats"));
    /// assert!(!pattern.matches("cue"));
    /// ```
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        Self {
            slots: pattern.chars().map(Slot::from_char).collect(),
        }
    }

    /// Number of positions in the pattern
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for the empty pattern, which matches only the empty word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Parsed positions
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Check whether `word` has the pattern's length and every position is accepted
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let mut chars = word.chars();
        for slot in &self.slots {
            match chars.next() {
                Some(ch) if slot.accepts(ch) => {}
                _ => return false,
            }
        }
        chars.next().is_none()
    }
}

impl FromStr for WordPattern {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for WordPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.as_char())?;
        }
        Ok(())
    }
}
