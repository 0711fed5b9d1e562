//! Word filtering module
//!
//! Each filter is a small predicate struct; the `filter_*` functions scan a
//! word collection once and collect the matching words into a new
//! [`WordSet`]. Lengths are counted in characters, not bytes.

use crate::error::FilterError;
use crate::wordset::WordSet;
use regex::Regex;

/// A test applied to every word of a collection
pub trait WordPredicate {
    fn matches(&self, word: &str) -> bool;
}

/// Character count of a word, with a byte-length fast path for ASCII
#[inline]
pub fn char_len(word: &str) -> usize {
    if word.is_ascii() {
        word.len()
    } else {
        word.chars().count()
    }
}

/// Collect every word of `words` accepted by `predicate`
pub fn select<I, S, P>(words: I, predicate: &P) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: WordPredicate + ?Sized,
{
    let mut result = WordSet::new();
    for word in words {
        let word = word.as_ref();
        if predicate.matches(word) && !result.contains(word) {
            result.insert(word.to_string());
        }
    }
    result
}

/// Exact length filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthFilter {
    pub length: usize,
}

impl LengthFilter {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl WordPredicate for LengthFilter {
    #[inline]
    fn matches(&self, word: &str) -> bool {
        // A word never has more characters than bytes
        word.len() >= self.length && char_len(word) == self.length
    }
}

/// Substring filter; the empty substring matches every word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsFilter {
    pub substring: String,
}

impl ContainsFilter {
    pub fn new(substring: impl Into<String>) -> Self {
        Self {
            substring: substring.into(),
        }
    }
}

impl WordPredicate for ContainsFilter {
    #[inline]
    fn matches(&self, word: &str) -> bool {
        word.contains(self.substring.as_str())
    }
}

/// Prefix + suffix + exact length filter
///
/// Prefix and suffix may overlap in short words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixFilter {
    pub start: String,
    pub stop: String,
    pub length: usize,
}

impl AffixFilter {
    pub fn new(start: impl Into<String>, stop: impl Into<String>, length: usize) -> Self {
        Self {
            start: start.into(),
            stop: stop.into(),
            length,
        }
    }
}

impl WordPredicate for AffixFilter {
    #[inline]
    fn matches(&self, word: &str) -> bool {
        word.starts_with(self.start.as_str())
            && word.ends_with(self.stop.as_str())
            && char_len(word) == self.length
    }
}

/// Multi-criteria filter
///
/// A word matches when its length is in `min_len..=max_len`, it starts with
/// one of `start_options`, ends with one of `stop_options` and contains every
/// entry of `contains_all`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiFilter {
    pub start_options: Vec<String>,
    pub contains_all: Vec<String>,
    pub stop_options: Vec<String>,
    pub min_len: usize,
    pub max_len: usize,
}

impl MultiFilter {
    pub fn new<S: Into<String>>(
        start_options: impl IntoIterator<Item = S>,
        contains_all: impl IntoIterator<Item = S>,
        stop_options: impl IntoIterator<Item = S>,
        min_len: usize,
        max_len: usize,
    ) -> Self {
        Self {
            start_options: start_options.into_iter().map(Into::into).collect(),
            contains_all: contains_all.into_iter().map(Into::into).collect(),
            stop_options: stop_options.into_iter().map(Into::into).collect(),
            min_len,
            max_len,
        }
    }

    /// An empty option list can never be satisfied
    pub fn is_degenerate(&self) -> bool {
        self.start_options.is_empty() || self.contains_all.is_empty() || self.stop_options.is_empty()
    }
}

impl WordPredicate for MultiFilter {
    fn matches(&self, word: &str) -> bool {
        let len = char_len(word);
        if len < self.min_len || len > self.max_len {
            return false;
        }

        if !self.start_options.iter().any(|s| word.starts_with(s.as_str())) {
            return false;
        }

        if !self.stop_options.iter().any(|s| word.ends_with(s.as_str())) {
            return false;
        }

        self.contains_all.iter().all(|s| word.contains(s.as_str()))
    }
}

/// Regex filter
#[derive(Debug, Clone)]
pub struct PatternFilter {
    pattern: Regex,
}

impl PatternFilter {
    pub fn new(pattern: &str) -> Result<Self, FilterError> {
        let regex = Regex::new(pattern).map_err(|e| FilterError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;

        Ok(Self { pattern: regex })
    }
}

impl WordPredicate for PatternFilter {
    #[inline]
    fn matches(&self, word: &str) -> bool {
        self.pattern.is_match(word)
    }
}

/// Words of exactly `n` characters
pub fn filter_by_length<I, S>(words: I, n: usize) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    select(words, &LengthFilter::new(n))
}

/// Words containing `substring` anywhere
pub fn filter_containing<I, S>(words: I, substring: &str) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    select(words, &ContainsFilter::new(substring))
}

/// Words of `n` characters starting with `start` and ending with `stop`
pub fn filter_by_affix<I, S>(words: I, start: &str, stop: &str, n: usize) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    select(words, &AffixFilter::new(start, stop, n))
}

/// Multi-criteria search
///
/// Returns an empty set without scanning when any of `start_options`,
/// `contains_all` or `stop_options` is empty.
pub fn filter_multi<I, S, T>(
    words: I,
    start_options: &[T],
    contains_all: &[T],
    stop_options: &[T],
    min_len: usize,
    max_len: usize,
) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let owned = |list: &[T]| list.iter().map(|s| s.as_ref().to_string()).collect::<Vec<_>>();
    let filter = MultiFilter::new(
        owned(start_options),
        owned(contains_all),
        owned(stop_options),
        min_len,
        max_len,
    );

    if filter.is_degenerate() {
        return WordSet::new();
    }

    select(words, &filter)
}

/// Words matching the regular expression `pattern`
pub fn filter_matching<I, S>(words: I, pattern: &str) -> Result<WordSet, FilterError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let filter = PatternFilter::new(pattern)?;
    Ok(select(words, &filter))
}

/// Letter classes of the French alphabet (unaccented)
pub mod alphabet {
    pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

    pub const VOWELS: &str = "aeiouy";

    pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxz";
}
