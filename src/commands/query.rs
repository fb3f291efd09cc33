//! Query command
//!
//! Turns a flat set of options into a filter/sort chain over the store.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::Result;
use crate::query::WordQuery;
use crate::store::WordStore;

/// Sort key for the query command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Alphabetical,
    Length,
    Occurrence,
}

impl SortKey {
    /// Parse a sort key name
    ///
    /// Supported names: "alpha", "alphabetical", "length", "len", "occurrence", "count"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "alpha" | "alphabetical" => Some(Self::Alphabetical),
            "length" | "len" => Some(Self::Length),
            "occurrence" | "count" => Some(Self::Occurrence),
            _ => None,
        }
    }

    fn apply(self, words: &WordQuery, ascending: bool) -> WordQuery {
        match self {
            Self::Alphabetical => words.sort_alphabetically(ascending),
            Self::Length => words.sort_by_length(ascending),
            Self::Occurrence => words.sort_by_occurrence(ascending),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown sort key: {s}"))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Alphabetical => "alpha",
            Self::Length => "length",
            Self::Occurrence => "occurrence",
        };
        write!(f, "{name}")
    }
}

/// Options for a query run
///
/// Stages are applied in a fixed order: string relations, length bounds,
/// letter filters, pattern, regex, distinct, sort, reverse, sample, limit.
/// Unset options are skipped.
#[derive(Debug, Clone, Default)]
pub struct QueryConfig {
    pub starts_with: Option<String>,
    pub ends_with: Option<String>,
    pub contains: Option<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub length: Option<usize>,
    pub with_letters: Vec<char>,
    pub without_letters: Vec<char>,
    /// `Some(true)` keeps words without repeated letters, `Some(false)` keeps
    /// words with at least one repeat
    pub unique_letters: Option<bool>,
    pub pattern: Option<String>,
    pub regex: Option<String>,
    pub distinct: bool,
    pub sort: Option<SortKey>,
    pub descending: bool,
    pub reverse: bool,
    pub sample: Option<usize>,
    pub limit: Option<usize>,
}

impl QueryConfig {
    /// Apply the configured stages to `words`
    ///
    /// # Errors
    ///
    /// Returns an error if a length bound is zero or the regex is invalid.
    pub fn apply(&self, words: &WordQuery) -> Result<WordQuery> {
        self.apply_with(words, &mut rand::rng())
    }

    /// Apply the configured stages, sampling with `rng`
    ///
    /// # Errors
    ///
    /// Returns an error if a length bound is zero or the regex is invalid.
    pub fn apply_with<R: Rng + ?Sized>(&self, words: &WordQuery, rng: &mut R) -> Result<WordQuery> {
        let mut result = words.clone();

        if let Some(prefix) = &self.starts_with {
            result = result.starts_with(prefix);
        }
        if let Some(suffix) = &self.ends_with {
            result = result.ends_with(suffix);
        }
        if let Some(substring) = &self.contains {
            result = result.contains(substring);
        }

        if let Some(n) = self.min_length {
            result = result.min_length(n)?;
        }
        if let Some(n) = self.max_length {
            result = result.max_length(n)?;
        }
        if let Some(n) = self.length {
            result = result.fixed_length(n)?;
        }

        for &letter in &self.with_letters {
            result = result.with_letter(letter);
        }
        for &letter in &self.without_letters {
            result = result.without_letter(letter);
        }
        match self.unique_letters {
            Some(true) => result = result.with_unique_letters(),
            Some(false) => result = result.without_unique_letters(),
            None => {}
        }

        if let Some(pattern) = &self.pattern {
            result = result.match_pattern(pattern);
        }
        if let Some(regex) = &self.regex {
            result = result.match_regex(regex)?;
        }

        if self.distinct {
            result = result.distinct();
        }
        if let Some(key) = self.sort {
            result = key.apply(&result, !self.descending);
        }
        if self.reverse {
            result = result.reverse();
        }
        if let Some(amount) = self.sample {
            result = result.random_with(amount, rng);
        }
        if let Some(limit) = self.limit {
            result = result.take(limit);
        }

        Ok(result)
    }
}

/// Run a query over every word in the store
///
/// # Errors
///
/// Returns an error if a length bound is zero or the regex is invalid.
pub fn run_query(store: &WordStore, config: &QueryConfig) -> Result<WordQuery> {
    config.apply(&store.all_words())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn store() -> WordStore {
        WordStore::from_words([
            "crane", "crate", "slate", "irate", "cat", "cot", "speed", "noon", "level",
        ])
    }

    #[test]
    fn sort_key_names() {
        assert_eq!(SortKey::from_name("alpha"), Some(SortKey::Alphabetical));
        assert_eq!(SortKey::from_name("len"), Some(SortKey::Length));
        assert_eq!(SortKey::from_name("count"), Some(SortKey::Occurrence));
        assert_eq!(SortKey::from_name("bogus"), None);
        assert!("bogus".parse::<SortKey>().is_err());
        assert_eq!("length".parse::<SortKey>().unwrap().to_string(), "length");
    }

    #[test]
    fn empty_config_returns_everything() {
        let store = store();
        let result = run_query(&store, &QueryConfig::default()).unwrap();
        assert_eq!(result, store.all_words());
    }

    #[test]
    fn combined_filters() {
        let config = QueryConfig {
            ends_with: Some("ate".into()),
            length: Some(5),
            without_letters: vec!['s'],
            sort: Some(SortKey::Alphabetical),
            descending: true,
            ..QueryConfig::default()
        };

        let result = run_query(&store(), &config).unwrap();
        assert_eq!(result.to_vec(), vec!["irate", "crate"]);
    }

    #[test]
    fn pattern_and_unique_letters() {
        let config = QueryConfig {
            pattern: Some("?!?!?".into()),
            unique_letters: Some(true),
            ..QueryConfig::default()
        };

        let result = run_query(&store(), &config).unwrap();
        assert_eq!(result.to_vec(), vec!["irate"]);

        let config = QueryConfig {
            pattern: Some("c*t".into()),
            ..QueryConfig::default()
        };
        assert_eq!(run_query(&store(), &config).unwrap().to_vec(), vec!["cat", "cot"]);
    }

    #[test]
    fn repeated_letters() {
        let config = QueryConfig {
            unique_letters: Some(false),
            ..QueryConfig::default()
        };

        let result = run_query(&store(), &config).unwrap();
        assert_eq!(result.to_vec(), vec!["level", "noon", "speed"]);
    }

    #[test]
    fn zero_length_is_rejected() {
        let config = QueryConfig {
            min_length: Some(0),
            ..QueryConfig::default()
        };

        assert!(matches!(
            run_query(&store(), &config),
            Err(QueryError::InvalidLength(0))
        ));
    }

    #[test]
    fn invalid_regex_is_rejected() {
        let config = QueryConfig {
            regex: Some("[".into()),
            ..QueryConfig::default()
        };

        assert!(matches!(
            run_query(&store(), &config),
            Err(QueryError::Regex(_))
        ));
    }

    #[test]
    fn sample_then_limit() {
        let config = QueryConfig {
            sample: Some(5),
            limit: Some(2),
            ..QueryConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(11);

        let result = config.apply_with(&store().all_words(), &mut rng).unwrap();

        assert_eq!(result.count(), 2);
        assert_eq!(result.distinct().count(), 2);
    }
}
