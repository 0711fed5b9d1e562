//! Command-line interface definition for mots-filter
//!
//! Provides argument parsing and validation for the word filtering tool.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Corpus file used when `--input` is not given
pub const DEFAULT_CORPUS: &str = "corpus.txt";

/// Word filtering over a French dictionary
///
/// Load a word list (one word per line) and query it by length, substring,
/// prefix/suffix or a combination of criteria.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "mots-filter",
    version,
    about = "Word filtering over a French dictionary",
    long_about = r#"
Load a word list (one word per line, UTF-8) and run a single query on it.
Results are printed one word per line.

EXAMPLES:
    # Words of 17 letters
    mots-filter -i corpus.txt length 17

    # Words containing "oo"
    mots-filter contains oo

    # 7-letter words starting and ending with "z"
    mots-filter affix --start z --end z --length 7

    # 16-letter words starting with "a", containing "b", ending with "z"
    mots-filter multi --start a --contains b --end z --min 16 --max 16

    # Check which candidates are dictionary words
    mots-filter lookup chronophage procrastinateur gratifiant
"#
)]
pub struct Args {
    /// Corpus file, one word per line
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CORPUS)]
    pub input: PathBuf,

    /// Write results to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Sort results alphabetically
    #[arg(long, default_value_t = false)]
    pub sort: bool,

    /// Print at most this many results
    #[arg(long, value_name = "NUM")]
    pub limit: Option<usize>,

    /// Show corpus and query statistics
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - results only
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Query to run against the corpus
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Words of exactly N letters
    Length {
        #[arg(value_name = "N")]
        length: usize,
    },

    /// Words containing a substring
    Contains {
        #[arg(value_name = "SUBSTRING")]
        substring: String,
    },

    /// Words of N letters with a given prefix and suffix
    Affix {
        /// Required prefix (empty matches all)
        #[arg(short, long, default_value = "")]
        start: String,

        /// Required suffix (empty matches all)
        #[arg(short, long, default_value = "")]
        end: String,

        /// Exact length
        #[arg(short, long, value_name = "N")]
        length: usize,
    },

    /// Multi-criteria search
    Multi {
        /// Accepted prefixes (any of), repeatable or comma-separated
        #[arg(short, long = "start", value_delimiter = ',', required = true)]
        starts: Vec<String>,

        /// Required substrings (all of), repeatable or comma-separated
        #[arg(short, long = "contains", value_delimiter = ',', required = true)]
        contains: Vec<String>,

        /// Accepted suffixes (any of), repeatable or comma-separated
        #[arg(short, long = "end", value_delimiter = ',', required = true)]
        ends: Vec<String>,

        /// Minimum length (inclusive)
        #[arg(long, value_name = "N", default_value_t = 0)]
        min: usize,

        /// Maximum length (inclusive)
        #[arg(long, value_name = "N", default_value_t = usize::MAX)]
        max: usize,
    },

    /// Words matching a regex pattern
    Pattern {
        #[arg(value_name = "REGEX")]
        pattern: String,
    },

    /// Check which words are in the corpus
    Lookup {
        #[arg(value_name = "WORD", required = true)]
        words: Vec<String>,
    },
}

impl Args {
    /// Reject option combinations that can only produce an empty answer by mistake
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Command::Multi { min, max, .. } = &self.command {
            if min > max {
                anyhow::bail!("Invalid length range: min ({}) must be <= max ({})", min, max);
            }
        }

        if let Command::Pattern { pattern } = &self.command {
            crate::filter::PatternFilter::new(pattern)?;
        }

        if self.limit == Some(0) {
            anyhow::bail!("--limit must be at least 1");
        }

        Ok(())
    }
}
