//! Plain word lists: one word per line.
//!
//! This is the only storage format. Loading trims every line and skips blank
//! ones; saving writes each stored word exactly once, sorted.
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::trie::Trie;

pub mod error;

pub use self::error::DictionaryError;

/// Builds a trie from a reader yielding one word per line.
pub fn read_dictionary<R: BufRead>(reader: R) -> Result<Trie, DictionaryError> {
    let mut trie = Trie::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => DictionaryError::InvalidUtf8(index + 1),
            _ => DictionaryError::Io(e),
        })?;

        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        trie.insert(word);
    }

    Ok(trie)
}

/// Loads the word list at `path`.
pub fn load_dictionary(path: &Path) -> Result<Trie, DictionaryError> {
    let file = File::open(path).map_err(|source| DictionaryError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let trie = read_dictionary(BufReader::new(file))?;
    log::debug!("Loaded {} words from {}", trie.len(), path.display());
    Ok(trie)
}

/// Writes every word stored in `trie`, one per line.
pub fn write_dictionary<W: Write>(writer: W, trie: &Trie) -> Result<(), DictionaryError> {
    let mut writer = BufWriter::new(writer);

    for word in trie.words() {
        writeln!(writer, "{}", word)?;
    }

    writer.flush()?;
    Ok(())
}

/// Saves `trie` to `path`, replacing any existing file.
pub fn save_dictionary(path: &Path, trie: &Trie) -> Result<(), DictionaryError> {
    let file = File::create(path).map_err(|source| DictionaryError::File {
        path: path.to_path_buf(),
        source,
    })?;

    write_dictionary(file, trie)?;
    log::debug!("Saved {} words to {}", trie.len(), path.display());
    Ok(())
}
