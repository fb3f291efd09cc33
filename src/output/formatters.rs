//! Formatting utilities for terminal output

use crate::query::WordQuery;

/// Format a count with a singular or plural noun
#[must_use]
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Lay words out in left-aligned columns
///
/// Every cell is padded to the widest word (in characters). Returns one
/// string per row; `columns` of zero is treated as one.
#[must_use]
pub fn format_columns(words: &WordQuery, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let width = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);

    words
        .as_slice()
        .chunks(columns)
        .map(|row| {
            row.iter()
                .map(|word| format!("{word:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}
