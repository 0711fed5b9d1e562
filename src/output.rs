//! Output management module
//!
//! Writes query results, one word per line, to a file or to stdout.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const BUFFER_SIZE: usize = 64 * 1024;

/// Buffered line writer over a file or stdout
pub struct OutputWriter {
    writer: Box<dyn Write>,
    path: Option<PathBuf>,
    lines_written: u64,
}

impl OutputWriter {
    /// Create (or truncate) `path`, creating missing parent directories
    pub fn to_file(path: PathBuf) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            ensure_output_dir(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        Ok(Self {
            writer: Box::new(BufWriter::with_capacity(BUFFER_SIZE, file)),
            path: Some(path),
            lines_written: 0,
        })
    }

    pub fn to_stdout() -> Self {
        Self {
            writer: Box::new(BufWriter::with_capacity(BUFFER_SIZE, io::stdout())),
            path: None,
            lines_written: 0,
        }
    }

    /// Write a line to the output
    pub fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.lines_written += 1;
        Ok(())
    }

    /// Write every word, stopping after `limit` lines if given
    pub fn write_all<'a, I>(&mut self, words: I, limit: Option<usize>) -> anyhow::Result<u64>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let limit = limit.unwrap_or(usize::MAX);
        let before = self.lines_written;

        for word in words.into_iter().take(limit) {
            self.write_line(word)?;
        }

        Ok(self.lines_written - before)
    }

    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// File path, or None for stdout
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Ensure output directory exists
pub fn ensure_output_dir(path: &Path) -> anyhow::Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_writer() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mots.txt");

        let mut writer = OutputWriter::to_file(path.clone()).unwrap();
        writer.write_line("chat").unwrap();
        writer.write_line("été").unwrap();
        writer.flush().unwrap();

        assert_eq!(writer.lines_written(), 2);
        assert_eq!(writer.path(), Some(path.as_path()));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "chat\nété\n");
    }

    #[test]
    fn test_write_all_with_limit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out.txt");

        let mut writer = OutputWriter::to_file(path.clone()).unwrap();
        let written = writer.write_all(["a", "b", "c"], Some(2)).unwrap();
        writer.flush().unwrap();

        assert_eq!(written, 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
    }
}
