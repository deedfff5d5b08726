// src/core/alphabet.rs
use crate::core::types::{AnalysisError, Result, ALPHABET_LEN, LETTERS};
use std::fmt;
use std::str::FromStr;

/// A substitution alphabet: a total bijection from ciphertext letters to
/// plaintext letters.
///
/// Index i holds the plaintext letter substituted for ciphertext letter i
/// (0=A .. 25=Z). The table is validated at construction and every update
/// returns a fresh value, so an `Alphabet` in hand is always a bijection
/// over A-Z.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    table: [u8; ALPHABET_LEN],
}

impl Alphabet {
    /// The identity alphabet: every letter maps to itself.
    pub fn identity() -> Self {
        Self { table: *LETTERS }
    }

    /// Plaintext letter substituted for the ciphertext letter of rank `rank`.
    pub fn substitute(&self, rank: usize) -> u8 {
        self.table[rank]
    }

    /// Applies the substitution to a text.
    ///
    /// Letters are substituted through the table (case-insensitively), space
    /// and newline pass through unchanged, every other character is dropped.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                let rank = (c.to_ascii_uppercase() as u8 - b'A') as usize;
                out.push(self.table[rank] as char);
            } else if c == ' ' || c == '\n' {
                out.push(c);
            }
        }
        out
    }

    /// The reverse bijection: decoding with `self` then with `self.inverse()`
    /// reproduces the original letters.
    pub fn inverse(&self) -> Alphabet {
        let mut table = [0u8; ALPHABET_LEN];
        for (rank, &value) in self.table.iter().enumerate() {
            table[(value - b'A') as usize] = LETTERS[rank];
        }
        Alphabet { table }
    }

    /// Folds the pairing of a cipher word with a plaintext candidate into a
    /// new alphabet.
    ///
    /// The word pair defines a partial letter permutation (each cipher
    /// letter goes to the candidate letter in the same position). That
    /// partial map is first completed into a full bijection: whenever a
    /// proposed target is still produced by some other letter, that letter
    /// is re-pointed to the value the proposing one gave up, a permutation
    /// cycle swap. The completed permutation is then composed onto the
    /// existing table, so every prior substitution is rewritten through the
    /// new pairings and the result is again a bijection.
    ///
    /// Both words must have equal length and be uppercase letters only; the
    /// input alphabet is untouched.
    pub fn merge(&self, cipher_word: &str, candidate_word: &str) -> Alphabet {
        debug_assert_eq!(cipher_word.len(), candidate_word.len());
        debug_assert!(cipher_word.bytes().all(|b| b.is_ascii_uppercase()));
        debug_assert!(candidate_word.bytes().all(|b| b.is_ascii_uppercase()));

        // Letter-level permutation induced by the word pair, grown from the
        // identity with swap repair.
        let mut perm = *LETTERS;
        // Inverse index: for each letter, the slot of `perm` producing it.
        let mut producer: [u8; ALPHABET_LEN] = [0; ALPHABET_LEN];
        for rank in 0..ALPHABET_LEN {
            producer[rank] = rank as u8;
        }

        for (cipher, target) in cipher_word.bytes().zip(candidate_word.bytes()) {
            let slot = (cipher - b'A') as usize;
            let displaced = perm[slot];
            if displaced == target {
                continue;
            }
            let other = producer[(target - b'A') as usize] as usize;
            perm[slot] = target;
            perm[other] = displaced;
            producer[(target - b'A') as usize] = slot as u8;
            producer[(displaced - b'A') as usize] = other as u8;
        }

        // Compose: each existing substitution is re-routed through the
        // pair-induced permutation.
        let mut table = [0u8; ALPHABET_LEN];
        for (rank, &value) in self.table.iter().enumerate() {
            table[rank] = perm[(value - b'A') as usize];
        }
        Alphabet { table }
    }

    /// The alphabet as a 26-character string slice.
    pub fn as_str(&self) -> &str {
        // Invariant: the table only ever holds ASCII uppercase letters.
        std::str::from_utf8(&self.table).expect("alphabet table is ASCII")
    }
}

impl FromStr for Alphabet {
    type Err = AnalysisError;

    /// Parses a 26-letter key, case-insensitively. Rejects any string that
    /// is not exactly the letters A-Z, each appearing once.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || AnalysisError::InvalidAlphabet(s.to_string());

        if s.len() != ALPHABET_LEN || !s.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let mut table = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        for (rank, b) in s.bytes().enumerate() {
            let value = b.to_ascii_uppercase();
            let pos = (value - b'A') as usize;
            if seen[pos] {
                return Err(invalid());
            }
            seen[pos] = true;
            table[rank] = value;
        }

        Ok(Alphabet { table })
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({})", self.as_str())
    }
}
