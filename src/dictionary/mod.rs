// src/dictionary/mod.rs

//! Dictionary abstraction and the lexicographic trie backend.
//!
//! The analysis engine only needs word membership and fixed-length
//! enumeration, so those two queries form the seam; any backend that can
//! answer them plugs in.

pub mod trie;

pub use trie::LexicographicTrie;

/// Read-only word store consulted during analysis.
///
/// Implementations are never mutated by the engine, so one instance may be
/// shared across concurrent analyses.
pub trait Dictionary {
    /// Whether `word` (lowercase letters, possibly with apostrophes or
    /// hyphens) is a stored entry.
    fn contains_word(&self, word: &str) -> bool;

    /// All stored entries of exactly `length` characters. No ordering is
    /// guaranteed; callers needing reproducibility impose their own.
    fn words_of_length(&self, length: usize) -> Vec<String>;
}
