//! Word list file utilities
//!
//! Word lists are plain text, one word per line. Lines are trimmed and blank
//! lines are skipped on read; words are joined with `\n` on write.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns the trimmed, non-empty lines in file order. Duplicates are kept;
/// callers that need a set dedupe themselves.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_query::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Split text into words, one per line
///
/// # Examples
/// ```
/// use word_query::wordlists::loader::parse_words;
///
/// let words = parse_words("  cat \n\ndog\r\n");
/// assert_eq!(words, vec!["cat", "dog"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

/// Write words to a file, one per line, replacing any existing content
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_to_file<P, S>(path: P, words: &[S]) -> io::Result<()>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let content = words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n");
    fs::write(path, content)
}
