use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading a word list.
///
/// Not finding a compound word is a normal outcome and never an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The word list could not be opened.
    #[error("failed to open word list {}", path.display())]
    Open {
        /// Path that was passed in.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading failed part way through, including lines that aren't valid UTF-8.
    #[error("failed to read word list at line {line}")]
    Read {
        /// 1-based line number of the line that could not be read.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
