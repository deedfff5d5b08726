// src/core/pattern.rs
use crate::dictionary::Dictionary;

/// Computes the position-equivalence signature of a word.
///
/// Each position receives a group label; positions share a label iff they
/// hold the same character, and labels are assigned in first-occurrence
/// order. Two words are pattern-compatible iff their signatures are equal,
/// regardless of which characters form the groups: "ABAB" and "TOTO" both
/// yield [0, 1, 0, 1].
pub fn signature(word: &str) -> Vec<u8> {
    let mut labels: Vec<char> = Vec::new();
    let mut sig = Vec::with_capacity(word.len());
    for c in word.chars() {
        let label = match labels.iter().position(|&seen| seen == c) {
            Some(pos) => pos,
            None => {
                labels.push(c);
                labels.len() - 1
            }
        };
        sig.push(label as u8);
    }
    sig
}

/// Finds pattern-compatible dictionary candidates for cipher words.
///
/// The working set is processed longest-first, so consecutive queries mostly
/// share a length; the per-length dictionary slice is fetched once, cleaned,
/// and kept until the queried length changes. Entries are sorted so that
/// "first match wins" is reproducible regardless of backend enumeration
/// order.
pub struct CandidateFinder<'a, D: Dictionary> {
    dictionary: &'a D,
    cached_length: Option<usize>,
    // Clean uppercase word plus its precomputed signature.
    cache: Vec<(String, Vec<u8>)>,
}

impl<'a, D: Dictionary> CandidateFinder<'a, D> {
    pub fn new(dictionary: &'a D) -> Self {
        Self {
            dictionary,
            cached_length: None,
            cache: Vec::new(),
        }
    }

    /// Returns the first dictionary word pattern-compatible with
    /// `cipher_word`, as a clean uppercase string of exactly the same
    /// length, or `None` when no entry matches.
    ///
    /// `cipher_word` must already be uppercase letters only (the rendered
    /// form of a working-set word).
    pub fn find(&mut self, cipher_word: &str) -> Option<String> {
        let length = cipher_word.len();
        if length == 0 {
            return None;
        }
        if self.cached_length != Some(length) {
            self.refresh(length);
        }

        let target = signature(cipher_word);
        self.cache
            .iter()
            .find(|(_, sig)| *sig == target)
            .map(|(word, _)| word.clone())
    }

    fn refresh(&mut self, length: usize) {
        let mut entries: Vec<String> = self
            .dictionary
            .words_of_length(length)
            .into_iter()
            .map(|word| clean_form(&word))
            .filter(|clean| clean.len() == length)
            .collect();
        entries.sort();
        entries.dedup();

        self.cache = entries
            .into_iter()
            .map(|word| {
                let sig = signature(&word);
                (word, sig)
            })
            .collect();
        self.cached_length = Some(length);
    }
}

/// Uppercase letter form of a stored entry, with apostrophes, hyphens and
/// any other non-letter stripped.
fn clean_form(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
