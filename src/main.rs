//! Word Query - CLI
//!
//! Command-line front end for dictionary lookups and query chains.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::Builder;
use log::{LevelFilter, info};
use word_query::{
    commands::{Lookup, QueryConfig, SortKey, check_word, run_lookup, run_query},
    output::{print_check_result, print_saved, print_words},
    store::WordStore,
};

#[derive(Parser)]
#[command(
    name = "wordq",
    about = "Query a word list: anagrams, palindromes, patterns, filters and sorting",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    wordlist: PathBuf,

    /// Lowercase every word after loading (case variants collapse)
    #[arg(long, global = true)]
    lowercase: bool,

    /// Verbosity level (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

impl Cli {
    const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a word is in the list
    Check {
        /// Word to check
        word: String,
    },

    /// List anagrams of a word
    Anagrams {
        /// Word whose letters to rearrange
        word: String,
    },

    /// List palindromes
    Palindromes,

    /// List words that can be spelled from a pool of letters
    Letters {
        /// Available letters (repeat a letter to allow it more than once)
        pool: String,
    },

    /// Suggest words close to a misspelled one
    Correct {
        /// Misspelled word
        word: String,

        /// Maximum number of differing positions
        #[arg(short = 'n', long, default_value = "1")]
        max_corrections: usize,
    },

    /// Draw random words (repeats allowed)
    Random {
        /// Number of words to draw
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Filter and sort the word list
    Query(QueryArgs),
}

#[derive(Args)]
struct QueryArgs {
    /// Keep words starting with this prefix
    #[arg(long)]
    starts_with: Option<String>,

    /// Keep words ending with this suffix
    #[arg(long)]
    ends_with: Option<String>,

    /// Keep words containing this substring
    #[arg(long)]
    contains: Option<String>,

    /// Minimum length
    #[arg(long)]
    min: Option<usize>,

    /// Maximum length
    #[arg(long)]
    max: Option<usize>,

    /// Exact length
    #[arg(short, long)]
    length: Option<usize>,

    /// Keep words containing this letter (repeatable)
    #[arg(long = "with")]
    with_letters: Vec<char>,

    /// Drop words containing this letter (repeatable)
    #[arg(long = "without")]
    without_letters: Vec<char>,

    /// Keep only words without repeated letters
    #[arg(long, conflicts_with = "repeated")]
    unique: bool,

    /// Keep only words with a repeated letter
    #[arg(long)]
    repeated: bool,

    /// Positional pattern: * any, ? vowel, ! consonant, other = exact
    #[arg(short, long)]
    pattern: Option<String>,

    /// Regular expression (matches anywhere unless anchored)
    #[arg(short, long)]
    regex: Option<String>,

    /// Drop duplicate words
    #[arg(long)]
    distinct: bool,

    /// Sort key: alpha, length, occurrence
    #[arg(short, long)]
    sort: Option<SortKey>,

    /// Sort descending
    #[arg(long)]
    desc: bool,

    /// Reverse the final order
    #[arg(long)]
    reverse: bool,

    /// Randomly sample this many distinct words
    #[arg(long)]
    sample: Option<usize>,

    /// Show at most this many words
    #[arg(long)]
    limit: Option<usize>,

    /// Save the result to a file instead of printing it
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl QueryArgs {
    fn config(&self) -> QueryConfig {
        let unique_letters = match (self.unique, self.repeated) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };

        QueryConfig {
            starts_with: self.starts_with.clone(),
            ends_with: self.ends_with.clone(),
            contains: self.contains.clone(),
            min_length: self.min,
            max_length: self.max,
            length: self.length,
            with_letters: self.with_letters.clone(),
            without_letters: self.without_letters.clone(),
            unique_letters,
            pattern: self.pattern.clone(),
            regex: self.regex.clone(),
            distinct: self.distinct,
            sort: self.sort,
            descending: self.desc,
            reverse: self.reverse,
            sample: self.sample,
            limit: self.limit,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(cli.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let mut store = WordStore::load(&cli.wordlist)
        .with_context(|| format!("Failed to load word list {}", cli.wordlist.display()))?;
    if cli.lowercase {
        store.force_lowercase();
    }
    info!("{} words available", store.len());

    match cli.command {
        Commands::Check { word } => {
            print_check_result(&check_word(&store, &word));
            Ok(())
        }
        Commands::Anagrams { word } => run_lookup_command(
            &store,
            &Lookup::Anagrams(word.clone()),
            &format!("Anagrams of {word}"),
        ),
        Commands::Palindromes => run_lookup_command(&store, &Lookup::Palindromes, "Palindromes"),
        Commands::Letters { pool } => run_lookup_command(
            &store,
            &Lookup::Letters(pool.clone()),
            &format!("Words from {pool}"),
        ),
        Commands::Correct {
            word,
            max_corrections,
        } => run_lookup_command(
            &store,
            &Lookup::Correct {
                word: word.clone(),
                max_corrections,
            },
            &format!("Corrections for {word}"),
        ),
        Commands::Random { count } => {
            run_lookup_command(&store, &Lookup::Random(count), "Random words")
        }
        Commands::Query(args) => run_query_command(&store, &args),
    }
}

fn run_lookup_command(store: &WordStore, lookup: &Lookup, title: &str) -> Result<()> {
    let words = run_lookup(store, lookup)?;
    print_words(title, &words);
    Ok(())
}

fn run_query_command(store: &WordStore, args: &QueryArgs) -> Result<()> {
    let words = run_query(store, &args.config())?;

    if let Some(path) = &args.output {
        words
            .save(path)
            .with_context(|| format!("Failed to save results to {}", path.display()))?;
        print_saved(path, &words);
    } else {
        print_words("Query results", &words);
    }
    Ok(())
}
