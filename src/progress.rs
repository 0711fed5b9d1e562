//! Progress display module
//!
//! Status messages, the corpus loading spinner and the statistics summary.
//! Everything here writes to stderr so stdout carries only results.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    eprintln!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    eprintln!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Create a styled spinner for indeterminate progress
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Counters for one run
#[derive(Debug)]
pub struct QueryStats {
    pub corpus_bytes: u64,
    pub corpus_lines: u64,
    pub unique_words: u64,
    pub matches: u64,
    pub printed: u64,
    pub load_time: Duration,
    pub start_time: Instant,
}

impl QueryStats {
    pub fn new() -> Self {
        Self {
            corpus_bytes: 0,
            corpus_lines: 0,
            unique_words: 0,
            matches: 0,
            printed: 0,
            load_time: Duration::ZERO,
            start_time: Instant::now(),
        }
    }

    pub fn duplicates(&self) -> u64 {
        self.corpus_lines.saturating_sub(self.unique_words)
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
        eprintln!("{}", "                      QUERY COMPLETE".green().bold());
        eprintln!("{}", "═".repeat(60).green());
        eprintln!();

        eprintln!("  {} {}", "Corpus size:    ".green(), ByteSize(self.corpus_bytes));
        eprintln!("  {} {}", "Lines read:     ".green(), format_number(self.corpus_lines));
        eprintln!("  {} {}", "Unique words:   ".green(), format_number(self.unique_words));
        eprintln!("  {} {}", "Duplicates:     ".yellow(), format_number(self.duplicates()));
        eprintln!(
            "  {} {}",
            "Matches:        ".green().bold(),
            format_number(self.matches).green().bold()
        );
        if self.printed < self.matches {
            eprintln!("  {} {}", "Printed:        ".green(), format_number(self.printed));
        }

        eprintln!();
        eprintln!("  {} {:?}", "Load time:      ".green(), self.load_time);
        eprintln!("  {} {:?}", "Total time:     ".green(), self.elapsed());
        eprintln!();
        eprintln!("{}", "═".repeat(60).green());
    }
}

impl Default for QueryStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
