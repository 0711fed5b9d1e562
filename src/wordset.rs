//! Deduplicated word set
//!
//! Folds the ordered corpus into an unordered collection of unique words.

use crate::corpus;
use crate::error::Result;
use ahash::RandomState;
use hashbrown::HashSet;
use std::path::Path;

/// Unordered set of unique words
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String, RandomState>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Build a set from any sequence of words, returning it together with the
    /// number of duplicate entries that were collapsed
    pub fn from_words<I, S>(words: I) -> (Self, usize)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let iter = words.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        let mut duplicates = 0;

        for word in iter {
            if !set.insert(word.into()) {
                duplicates += 1;
            }
        }

        (set, duplicates)
    }

    /// Insert a word; returns true if it was not present yet
    pub fn insert(&mut self, word: String) -> bool {
        self.words.insert(word)
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in lexicographic order, for display
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// True if every word of `self` is also in `other`
    pub fn is_subset(&self, other: &WordSet) -> bool {
        self.words.is_subset(&other.words)
    }
}

/// Load the corpus at `path` and deduplicate it
pub fn to_set(path: &Path) -> Result<WordSet> {
    let words = corpus::load(path)?;
    let total = words.len();
    let (set, duplicates) = WordSet::from_words(words);

    if duplicates > 0 {
        log::warn!("{} duplicate entries collapsed in {:?}", duplicates, path);
    }
    log::debug!("Word set: {} unique of {} lines", set.len(), total);

    Ok(set)
}

impl PartialEq for WordSet {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for WordSet {}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter).0
    }
}

impl IntoIterator for WordSet {
    type Item = String;
    type IntoIter = hashbrown::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a String;
    type IntoIter = hashbrown::hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_words_counts_duplicates() {
        let (set, duplicates) = WordSet::from_words(["chat", "chien", "chat", "chat"]);

        assert_eq!(set.len(), 2);
        assert_eq!(duplicates, 2);
        assert!(set.contains("chat"));
        assert!(!set.contains("loup"));
    }

    #[test]
    fn test_to_set() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "chat\nchien\nchacal\nchaton\nchat\n").unwrap();

        let words = corpus::load(file.path()).unwrap();
        let set = to_set(file.path()).unwrap();

        assert_eq!(words.len(), 5);
        assert_eq!(set.len(), 4);
        assert!(set.len() <= words.len());
    }

    #[test]
    fn test_to_set_without_duplicates_keeps_count() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "glomérules\nà\nvaincre\n").unwrap();

        let words = corpus::load(file.path()).unwrap();
        let set = to_set(file.path()).unwrap();

        assert_eq!(set.len(), words.len());
        assert!(set.contains("glomérules"));
        assert!(!set.contains("glycosudrique"));
    }

    #[test]
    fn test_diacritics_are_distinct() {
        let set: WordSet = ["ou", "où", "Où"].into_iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_sorted() {
        let set: WordSet = ["chien", "chat", "chacal"].into_iter().collect();
        assert_eq!(set.sorted(), vec!["chacal", "chat", "chien"]);
    }
}
