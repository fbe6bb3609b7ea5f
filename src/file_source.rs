//! Bounded line reader over the resolver configuration file.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Upper bound on a single configuration line, in bytes.
///
/// A physical line longer than this is split: the first `MAX_LINE_LEN`
/// bytes come back as one line and the remainder is consumed by the next
/// read, re-evaluated as an independent line. This mirrors reading into a
/// fixed-size buffer and is part of the contract, not an accident.
pub(crate) const MAX_LINE_LEN: usize = 80;

/// Read-only, single-pass line source over the configuration file.
///
/// The file handle is scoped to the source and released exactly once on
/// drop, whether the lines were exhausted, the caller stopped early, or a
/// read failed.
#[derive(Debug)]
pub(crate) struct ConfigFileSource {
    reader: BufReader<File>,
    line: Vec<u8>,
}

impl ConfigFileSource {
    /// Opens the configuration file in read mode.
    ///
    /// # Errors
    ///
    /// Propagates the OS error (file missing, permission denied, ...)
    /// without producing any lines.
    pub(crate) fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            reader: BufReader::new(file),
            line: Vec::with_capacity(MAX_LINE_LEN),
        })
    }

    /// Yields the next line with its terminating newline stripped, or
    /// `None` at end of file.
    ///
    /// At most [`MAX_LINE_LEN`] bytes are returned per call; see the
    /// constant for the over-long-line contract. A final line without a
    /// trailing newline is still yielded.
    pub(crate) fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.line.clear();
        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                break;
            }

            let room = MAX_LINE_LEN - self.line.len();
            let take = available.len().min(room);
            if let Some(pos) = available[..take].iter().position(|&b| b == b'\n') {
                self.line.extend_from_slice(&available[..pos]);
                self.reader.consume(pos + 1);
                return Ok(Some(&self.line));
            }

            self.line.extend_from_slice(&available[..take]);
            self.reader.consume(take);
            if self.line.len() == MAX_LINE_LEN {
                return Ok(Some(&self.line));
            }
        }

        if self.line.is_empty() {
            Ok(None)
        } else {
            Ok(Some(&self.line))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn source_with(content: &[u8]) -> (tempfile::TempDir, ConfigFileSource) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolv.conf");
        let mut file = File::create(&path).unwrap();
        file.write_all(content).unwrap();
        drop(file);
        (dir, ConfigFileSource::open(&path).unwrap())
    }

    fn collect_lines(source: &mut ConfigFileSource) -> Vec<Vec<u8>> {
        let mut lines = Vec::new();
        while let Some(line) = source.next_line().unwrap() {
            lines.push(line.to_vec());
        }
        lines
    }

    #[test]
    fn yields_lines_without_newline() {
        let (_dir, mut source) = source_with(b"one\ntwo\nthree\n");
        assert_eq!(collect_lines(&mut source), vec![b"one".to_vec(), b"two".to_vec(), b"three".to_vec()]);
    }

    #[test]
    fn final_line_without_newline_is_yielded() {
        let (_dir, mut source) = source_with(b"one\ntwo");
        assert_eq!(collect_lines(&mut source), vec![b"one".to_vec(), b"two".to_vec()]);
    }

    #[test]
    fn empty_file_yields_nothing() {
        let (_dir, mut source) = source_with(b"");
        assert!(source.next_line().unwrap().is_none());
    }

    #[test]
    fn blank_lines_are_preserved() {
        let (_dir, mut source) = source_with(b"\n\nx\n");
        assert_eq!(collect_lines(&mut source), vec![b"".to_vec(), b"".to_vec(), b"x".to_vec()]);
    }

    #[test]
    fn long_line_is_split_at_bound() {
        let mut content = vec![b'a'; MAX_LINE_LEN + 10];
        content.push(b'\n');
        let (_dir, mut source) = source_with(&content);

        let lines = collect_lines(&mut source);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), MAX_LINE_LEN);
        assert_eq!(lines[1], vec![b'a'; 10]);
    }

    #[test]
    fn line_at_exact_bound_leaves_empty_remainder() {
        let mut content = vec![b'a'; MAX_LINE_LEN];
        content.push(b'\n');
        content.extend_from_slice(b"next\n");
        let (_dir, mut source) = source_with(&content);

        let lines = collect_lines(&mut source);
        assert_eq!(lines[0].len(), MAX_LINE_LEN);
        assert_eq!(lines[1], b"".to_vec());
        assert_eq!(lines[2], b"next".to_vec());
    }

    #[test]
    fn missing_file_propagates_os_error() {
        let err = ConfigFileSource::open(Path::new("/nonexistent/resolv.conf")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
