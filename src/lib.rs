//! Word Query
//!
//! In-memory word-list queries: load a dictionary once, then filter, sort,
//! combine, and pattern-match words through an immutable query chain.
//!
//! # Quick Start
//!
//! ```rust
//! use word_query::store::WordStore;
//!
//! let store = WordStore::from_words(["listen", "silent", "tinsel", "cat", "noon"]);
//!
//! // Whole-dictionary lookups
//! assert_eq!(store.anagrams("silent").count(), 3);
//! assert_eq!(store.palindromes().to_vec(), vec!["noon"]);
//!
//! // Query chains
//! let six = store
//!     .all_words()
//!     .fixed_length(6)
//!     .unwrap()
//!     .starts_with("s")
//!     .sort_alphabetically(true);
//! assert_eq!(six.to_vec(), vec!["silent"]);
//! ```

// Core word-level helpers
pub mod core;

// Error types
pub mod error;

// Canonical word storage
pub mod store;

// Chainable queries
pub mod query;

// Word list files
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{QueryError, Result};
pub use query::WordQuery;
pub use store::WordStore;
