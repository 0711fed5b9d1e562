//! Corpus loading module
//!
//! Reads a word list (one word per line) into memory, preserving file order
//! and duplicates.

use crate::error::{CorpusError, Result};
use chardetng::EncodingDetector;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Load the corpus at `path` as an ordered list of words.
///
/// Each line loses its terminator (`\n`, `\r\n` or a lone `\r`) and its
/// surrounding whitespace. Blank lines are kept as empty strings.
pub fn load(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|e| CorpusError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut words = Vec::new();
    for (index, line) in LineIterator::new(&mmap).enumerate() {
        match std::str::from_utf8(line) {
            Ok(s) => words.push(s.trim_matches(is_line_space).to_string()),
            Err(_) => {
                return Err(CorpusError::Decode {
                    path: path.to_path_buf(),
                    line: index + 1,
                    detected: guess_encoding(&mmap),
                })
            }
        }
    }

    log::debug!(
        "Loaded {} lines ({} bytes) from {:?}",
        words.len(),
        mmap.len(),
        path
    );

    Ok(words)
}

/// Unicode whitespace plus the ASCII information separators 0x1C-0x1F
#[inline]
fn is_line_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn open_error(path: &Path, err: std::io::Error) -> CorpusError {
    if err.kind() == ErrorKind::NotFound {
        CorpusError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        CorpusError::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Best guess of the real encoding of a non UTF-8 corpus, for error reporting
fn guess_encoding(content: &[u8]) -> &'static str {
    // 64KB is plenty for a word list
    let sample = &content[..content.len().min(64 * 1024)];

    let mut detector = EncodingDetector::new();
    detector.feed(sample, sample.len() == content.len());
    let encoding = detector.guess(None, true);

    if encoding == encoding_rs::UTF_8 {
        // Detector gave up; the bytes are simply broken
        "corrupt UTF-8"
    } else {
        encoding.name()
    }
}

/// Iterator over the raw lines of a buffer, terminators removed
pub struct LineIterator<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> LineIterator<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        let position = if data.starts_with(&UTF8_BOM) { 3 } else { 0 };
        Self { data, position }
    }
}

impl<'a> Iterator for LineIterator<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.data.len() {
            return None;
        }

        let remaining = &self.data[self.position..];
        match memchr::memchr2(b'\n', b'\r', remaining) {
            Some(i) => {
                let line = &remaining[..i];
                let terminator = if remaining[i] == b'\r' && remaining.get(i + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.position += i + terminator;
                Some(line)
            }
            None => {
                self.position = self.data.len();
                Some(remaining)
            }
        }
    }
}

/// Canonical path of the corpus for display, or the path as given if it cannot be resolved
pub fn display_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn corpus(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_preserves_order_and_duplicates() {
        let file = corpus("chat\nchien\nchat\nà\n".as_bytes());

        let words = load(file.path()).unwrap();
        assert_eq!(words, vec!["chat", "chien", "chat", "à"]);
    }

    #[test]
    fn test_load_trims_whitespace() {
        let file = corpus(b"  chat \r\n\tchien\t\n");

        let words = load(file.path()).unwrap();
        assert_eq!(words, vec!["chat", "chien"]);
    }

    #[test]
    fn test_load_trims_separator_controls() {
        let file = corpus(b"\x1cchat\x1f\n\x1d\x1echien \xc2\xa0\n");

        let words = load(file.path()).unwrap();
        assert_eq!(words, vec!["chat", "chien"]);
    }

    #[test]
    fn test_load_keeps_inner_separators() {
        let file = corpus(b"porte\x1fmanteau\n");

        assert_eq!(load(file.path()).unwrap(), vec!["porte\u{1f}manteau"]);
    }

    #[test]
    fn test_display_path_falls_back_to_input() {
        let missing = Path::new("nowhere/corpus.txt");
        assert_eq!(display_path(missing), PathBuf::from("nowhere/corpus.txt"));
    }

    #[test]
    fn test_load_keeps_blank_lines() {
        let file = corpus(b"chat\n\n   \nchien");

        let words = load(file.path()).unwrap();
        assert_eq!(words, vec!["chat", "", "", "chien"]);
    }

    #[test]
    fn test_load_lone_carriage_return() {
        let file = corpus(b"chat\rchien\r\nloup");

        let words = load(file.path()).unwrap();
        assert_eq!(words, vec!["chat", "chien", "loup"]);
    }

    #[test]
    fn test_load_skips_bom() {
        let file = corpus(b"\xEF\xBB\xBFchat\nchien\n");

        let words = load(file.path()).unwrap();
        assert_eq!(words, vec!["chat", "chien"]);
    }

    #[test]
    fn test_load_empty_file() {
        let file = corpus(b"");

        assert!(load(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/corpus.txt")).unwrap_err();
        assert!(matches!(err, CorpusError::NotFound { .. }));
    }

    #[test]
    fn test_load_invalid_utf8() {
        // "été" in windows-1252
        let file = corpus(b"chat\n\xE9t\xE9\n");

        let err = load(file.path()).unwrap_err();
        match err {
            CorpusError::Decode { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_line_iterator() {
        let lines: Vec<_> = LineIterator::new(b"a\nb\r\nc").collect();
        assert_eq!(lines, vec![&b"a"[..], &b"b"[..], &b"c"[..]]);
    }
}
