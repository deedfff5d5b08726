// src/persistence.rs
use crate::dictionary::LexicographicTrie;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors from dictionary loading and snapshotting.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding failed: {0}")]
    Encode(bincode::Error),

    #[error("snapshot decoding failed: {0}")]
    Decode(bincode::Error),
}

/// Builds a trie from a plain word list, one word per line.
pub fn load_word_list(path: &Path) -> Result<LexicographicTrie, PersistenceError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut trie = LexicographicTrie::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            trie.insert(word);
        }
    }
    Ok(trie)
}

/// Writes a binary snapshot of the trie, atomically.
///
/// The snapshot is serialized into a temporary file in the target directory
/// and persisted over `path` only once fully written.
pub fn save_trie(trie: &LexicographicTrie, path: &Path) -> Result<(), PersistenceError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, trie).map_err(PersistenceError::Encode)?;
    temp_file.persist(path).map_err(|e| PersistenceError::Io(e.error))?;
    Ok(())
}

/// Reads a trie back from a binary snapshot.
pub fn load_trie(path: &Path) -> Result<LexicographicTrie, PersistenceError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    bincode::deserialize_from(reader).map_err(PersistenceError::Decode)
}
