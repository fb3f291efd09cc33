//! Core word-level building blocks
//!
//! Pure helpers with no I/O: letter-frequency tables, positional patterns, and
//! single-word predicates shared by the store and the query chain.

mod letters;
mod pattern;
pub mod word;

pub use letters::LetterCounts;
pub use pattern::{Slot, WordPattern, is_vowel};
