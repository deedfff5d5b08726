// src/core/types.rs
use thiserror::Error;

/// Number of letters in a substitution alphabet.
pub const ALPHABET_LEN: usize = 26;

/// The plain letter table, in ciphertext-rank order (0=A .. 25=Z).
pub const LETTERS: &[u8; ALPHABET_LEN] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Errors reported by the analysis surface.
///
/// A word with no pattern-compatible dictionary entry is a normal skip
/// outcome inside the loop, never an error.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The supplied key is not the 26 letters A-Z, each exactly once.
    #[error("substitution alphabet must contain the letters A-Z exactly once, got {0:?}")]
    InvalidAlphabet(String),

    /// The cryptogram is empty or contains only whitespace.
    #[error("cryptogram text is empty")]
    EmptyCryptogram,
}

/// A convenience `Result` alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
