//! Word list files
//!
//! Flat newline-delimited text is the only persistence format.

pub mod loader;

pub use loader::{load_from_file, parse_words, save_to_file};
