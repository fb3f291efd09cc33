//! Error types for word-list queries
//!
//! Every fallible operation in the crate returns [`Result`], whose error side is
//! [`QueryError`].

use std::io;

use thiserror::Error;

/// Errors produced by [`WordStore`](crate::store::WordStore) and
/// [`WordQuery`](crate::query::WordQuery) operations
#[derive(Error, Debug)]
pub enum QueryError {
    /// Reading or writing a word list failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A length bound was zero
    #[error("Length bound must be positive, got {0}")]
    InvalidLength(usize),

    /// Positional access outside `[0, len)`
    #[error("Index {index} out of range for {len} words")]
    IndexOutOfRange { index: usize, len: usize },

    /// Sampling was requested from a store with no words
    #[error("Cannot sample from an empty word store")]
    EmptyStore,

    /// A regular expression failed to compile
    #[error("Invalid regular expression: {0}")]
    Regex(#[from] regex::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, QueryError>;
