//! Error types for reading and writing word lists.
use std::path::PathBuf;

/// Errors that can occur while loading or saving a word list.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DictionaryError {
    /// The word list could not be opened or created
    #[error("Could not access word list {path:?}")]
    File {
        /// path of the word list
        path: PathBuf,
        /// underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing failed part way through
    #[error("I/O error on word list")]
    Io(#[from] std::io::Error),

    /// A line was not valid UTF-8
    #[error("Line {0} is not valid UTF-8")]
    InvalidUtf8(usize),
}
