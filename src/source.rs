//! Line-oriented word list input.
//!
//! One word per line. Only the line ending (`\n` or `\r\n`) is stripped; every
//! other character, whitespace included, is part of the word. Empty lines are
//! skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Error;

/// Opens a word list file for reading.
pub fn open_word_list(path: impl AsRef<Path>) -> Result<BufReader<File>, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Returns an iterator over the words of a line-oriented reader, in input order.
///
/// # Examples
///
/// ```
/// use compound_words::source::read_words;
///
/// let input = "cat\r\n\ndog\n";
/// let words: Vec<String> = read_words(input.as_bytes()).collect::<Result<_, _>>().unwrap();
/// assert_eq!(words, ["cat", "dog"]);
/// ```
pub fn read_words<R: BufRead>(reader: R) -> Words<R> {
    Words {
        reader,
        buf: String::with_capacity(80),
        line: 0,
    }
}

/// Iterator returned by [`read_words`].
pub struct Words<R> {
    reader: R,
    buf: String,
    line: usize,
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        // Reuse one buffer instead of allocating per line with BufRead::lines().
        loop {
            self.buf.clear();
            self.line += 1;
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Err(source) => {
                    return Some(Err(Error::Read {
                        line: self.line,
                        source,
                    }));
                }
                Ok(_) => {}
            }
            let word = strip_line_ending(&self.buf);
            if !word.is_empty() {
                return Some(Ok(word.to_owned()));
            }
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod test {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        read_words(input.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn one_word_per_line_in_order() {
        assert_eq!(words("cat\ndog\ncatdog\n"), ["cat", "dog", "catdog"]);
    }

    #[test]
    fn last_line_without_newline() {
        assert_eq!(words("cat\ndog"), ["cat", "dog"]);
    }

    #[test]
    fn only_line_endings_are_stripped() {
        assert_eq!(words("cat\r\ndog \t\r\n"), ["cat", "dog \t"]);
        assert_eq!(words("  cat\n"), ["  cat"]);
    }

    #[test]
    fn empty_lines_are_skipped() {
        assert_eq!(words("\ncat\n\n\r\ndog\n\n"), ["cat", "dog"]);
    }

    #[test]
    fn whitespace_only_line_is_a_word() {
        assert_eq!(words("cat\n \ndog\n"), ["cat", " ", "dog"]);
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(words("cat\ncat\n"), ["cat", "cat"]);
    }

    #[test]
    fn pound_lines_are_words() {
        assert_eq!(words("#\ncat\n#cat\n  # x\n"), ["#", "cat", "#cat", "  # x"]);
    }

    #[test]
    fn invalid_utf8_reports_line() {
        let input: &[u8] = b"cat\n\xff\xfe\ndog\n";
        let mut it = read_words(input);
        assert_eq!(it.next().unwrap().unwrap(), "cat");
        match it.next() {
            Some(Err(Error::Read { line, .. })) => assert_eq!(line, 2),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        match open_word_list(&path) {
            Err(Error::Open { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected open error, got {:?}", other.map(|_| ())),
        }
    }
}
