//! Display functions for command results

use std::path::Path;

use super::formatters::{count_label, format_columns};
use crate::commands::CheckResult;
use crate::query::WordQuery;
use colored::Colorize;

/// Words per row in listings
const COLUMNS: usize = 6;

/// Print a titled word listing
pub fn print_words(title: &str, words: &WordQuery) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {}",
        title.bright_cyan().bold(),
        format!("({})", count_label(words.count(), "word")).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    if words.is_empty() {
        println!("{}", "No matching words.".yellow());
        return;
    }

    for row in format_columns(words, COLUMNS) {
        println!("  {row}");
    }
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    if result.valid {
        println!(
            "{} {}",
            "✅".green(),
            format!("'{}' is a known word", result.word).green().bold()
        );
        return;
    }

    println!(
        "{} {}",
        "❌".red(),
        format!("'{}' is not in the word list", result.word)
            .red()
            .bold()
    );

    if !result.suggestions.is_empty() {
        print_words("Did you mean", &result.suggestions);
    }
}

/// Confirm that words were written to a file
pub fn print_saved(path: &Path, words: &WordQuery) {
    println!(
        "💾 Saved {} to {}",
        count_label(words.count(), "word").bright_yellow(),
        path.display()
    );
}
