//! Query session
//!
//! Loads the corpus once, runs the requested query and writes the results.

use crate::cli::{Args, Command};
use crate::corpus;
use crate::filter::{
    filter_by_affix, filter_by_length, filter_containing, filter_matching, filter_multi,
};
use crate::output::OutputWriter;
use crate::progress::{create_spinner, print_header, print_info, print_success, print_warning, QueryStats};
use crate::wordset::WordSet;

use bytesize::ByteSize;
use colored::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub command: Command,
    pub sort_output: bool,
    pub limit: Option<usize>,
    pub quiet: bool,
    pub verbose: bool,
}

impl SessionConfig {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        args.validate()?;

        Ok(Self {
            input: args.input.clone(),
            output: args.output.clone(),
            command: args.command.clone(),
            sort_output: args.sort,
            limit: args.limit,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}

/// Result of running a query: matching words in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub words: Vec<String>,
    /// Lookup candidates absent from the corpus
    pub missing: Vec<String>,
}

/// Runs one query against one corpus
pub struct Session {
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Load, query, write; returns the run statistics
    pub fn run(&self) -> anyhow::Result<QueryStats> {
        let mut stats = QueryStats::new();
        let words = self.load(&mut stats)?;

        let outcome = self.execute(&words)?;
        stats.matches = outcome.words.len() as u64;

        let mut output = match self.config.output {
            Some(ref path) => OutputWriter::to_file(path.clone())?,
            None => OutputWriter::to_stdout(),
        };
        stats.printed = output.write_all(outcome.words.iter().map(String::as_str), self.config.limit)?;
        output.flush()?;

        if !self.config.quiet {
            for word in &outcome.missing {
                print_warning(&format!("Not in corpus: {}", word));
            }
            if let Some(path) = output.path() {
                print_success(&format!("{} words written to {:?}", stats.printed, path));
            }
        }

        Ok(stats)
    }

    fn load(&self, stats: &mut QueryStats) -> anyhow::Result<WordSet> {
        let input = &self.config.input;
        let started = Instant::now();

        if !self.config.quiet {
            print_header("Loading corpus...");
        }

        let pb = if self.config.quiet {
            indicatif::ProgressBar::hidden()
        } else {
            create_spinner(&format!("Reading {:?}", input))
        };

        let lines = corpus::load(input)?;
        stats.corpus_bytes = fs::metadata(input).map(|m| m.len()).unwrap_or(0);
        stats.corpus_lines = lines.len() as u64;

        let (words, _) = WordSet::from_words(lines);
        stats.unique_words = words.len() as u64;
        stats.load_time = started.elapsed();

        pb.finish_and_clear();

        if !self.config.quiet {
            print_info(&format!(
                "{} unique words from {:?} ({})",
                words.len(),
                corpus::display_path(input),
                ByteSize(stats.corpus_bytes)
            ));
        }

        Ok(words)
    }

    /// Run the configured query on an already loaded word set
    pub fn execute(&self, words: &WordSet) -> anyhow::Result<QueryOutcome> {
        if self.config.verbose {
            print_info(&format!("Query: {:?}", self.config.command));
        }

        let result = match &self.config.command {
            Command::Length { length } => filter_by_length(words, *length),
            Command::Contains { substring } => filter_containing(words, substring),
            Command::Affix { start, end, length } => filter_by_affix(words, start, end, *length),
            Command::Multi { starts, contains, ends, min, max } => {
                filter_multi(words, starts.as_slice(), contains.as_slice(), ends.as_slice(), *min, *max)
            }
            Command::Pattern { pattern } => filter_matching(words, pattern)?,
            Command::Lookup { words: candidates } => return Ok(lookup(words, candidates)),
        };

        log::debug!("{} matches", result.len());

        let words = if self.config.sort_output {
            result.sorted().into_iter().map(str::to_string).collect()
        } else {
            result.into_iter().collect()
        };

        Ok(QueryOutcome {
            words,
            missing: Vec::new(),
        })
    }
}

/// Split candidates into corpus words and unknown words, keeping argument order
fn lookup(words: &WordSet, candidates: &[String]) -> QueryOutcome {
    let (found, missing): (Vec<String>, Vec<String>) = candidates
        .iter()
        .cloned()
        .partition(|c| words.contains(c));

    QueryOutcome {
        words: found,
        missing,
    }
}

/// One-line description of a query, for the banner
pub fn describe(command: &Command) -> String {
    match command {
        Command::Length { length } => format!("words of {} letters", length),
        Command::Contains { substring } => format!("words containing {:?}", substring),
        Command::Affix { start, end, length } => {
            format!("words of {} letters, {:?}…{:?}", length, start, end)
        }
        Command::Multi { starts, contains, ends, min, max } => format!(
            "words of {}-{} letters, start {:?}, contain {:?}, end {:?}",
            min, max, starts, contains, ends
        ),
        Command::Pattern { pattern } => format!("words matching /{}/", pattern),
        Command::Lookup { words } => format!("lookup of {} words", words.len()),
    }
    .cyan()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn config(command: Command) -> SessionConfig {
        SessionConfig {
            input: PathBuf::from("corpus.txt"),
            output: None,
            command,
            sort_output: true,
            limit: None,
            quiet: true,
            verbose: false,
        }
    }

    fn sample() -> WordSet {
        ["chat", "chien", "chacal", "chaton"].into_iter().collect()
    }

    #[test]
    fn test_execute_sorted() {
        let session = Session::new(config(Command::Contains {
            substring: "cha".to_string(),
        }));

        let outcome = session.execute(&sample()).unwrap();
        assert_eq!(outcome.words, vec!["chacal", "chat", "chaton"]);
        assert!(outcome.missing.is_empty());
    }

    #[test]
    fn test_execute_multi() {
        let session = Session::new(config(Command::Multi {
            starts: vec!["c".to_string()],
            contains: vec!["a".to_string()],
            ends: vec!["t".to_string(), "l".to_string()],
            min: 4,
            max: 6,
        }));

        let outcome = session.execute(&sample()).unwrap();
        assert_eq!(outcome.words, vec!["chacal", "chat"]);
    }

    #[test]
    fn test_execute_lookup_keeps_order() {
        let session = Session::new(config(Command::Lookup {
            words: vec!["loup".to_string(), "chien".to_string(), "chat".to_string()],
        }));

        let outcome = session.execute(&sample()).unwrap();
        assert_eq!(outcome.words, vec!["chien", "chat"]);
        assert_eq!(outcome.missing, vec!["loup"]);
    }

    #[test]
    fn test_execute_invalid_pattern() {
        let session = Session::new(config(Command::Pattern {
            pattern: "[".to_string(),
        }));
        assert!(session.execute(&sample()).is_err());
    }

    #[test]
    fn test_run_writes_file() {
        let mut corpus = NamedTempFile::new().unwrap();
        write!(corpus, "chat\nchien\nchacal\nchaton\nchat\n").unwrap();
        let out_dir = TempDir::new().unwrap();
        let out_path = out_dir.path().join("result.txt");

        let mut cfg = config(Command::Affix {
            start: "cha".to_string(),
            end: String::new(),
            length: 6,
        });
        cfg.input = corpus.path().to_path_buf();
        cfg.output = Some(out_path.clone());

        let stats = Session::new(cfg).run().unwrap();

        assert_eq!(stats.corpus_lines, 5);
        assert_eq!(stats.unique_words, 4);
        assert_eq!(stats.duplicates(), 1);
        assert_eq!(stats.matches, 2);
        assert_eq!(std::fs::read_to_string(&out_path).unwrap(), "chacal\nchaton\n");
    }

    #[test]
    fn test_run_missing_corpus() {
        let mut cfg = config(Command::Length { length: 4 });
        cfg.input = PathBuf::from("/nonexistent/corpus.txt");

        let err = Session::new(cfg).run().unwrap_err();
        assert!(err.to_string().contains("corpus not found"));
    }
}
