//! Command implementations

pub mod lookup;
pub mod query;

pub use lookup::{CheckResult, Lookup, check_word, run_lookup};
pub use query::{QueryConfig, SortKey, run_query};
