// src/core/engine.rs
use crate::core::alphabet::Alphabet;
use crate::core::extract::extract_words;
use crate::core::pattern::CandidateFinder;
use crate::core::types::{AnalysisError, Result};
use crate::dictionary::Dictionary;
use std::sync::Arc;

/// Tunable analysis parameters.
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    /// Defensive bound on loop iterations. Termination already follows from
    /// the commit rule (each commit strictly shrinks the invalid-word count,
    /// and between commits each word is consulted at most once), so this cap
    /// should never fire on correct inputs.
    pub iteration_cap: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            iteration_cap: 1_000_000,
        }
    }
}

/// Outcome of one analysis run.
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    /// The recovered decoding alphabet. Approximate: some letters may still
    /// be wrong when the dictionary could not confirm every word.
    pub alphabet: Alphabet,
    /// True when every extracted word became dictionary-valid. False means
    /// the loop stalled (or hit the iteration cap) and the alphabet is a
    /// best-effort partial result.
    pub converged: bool,
    /// Number of distinct words extracted from the cryptogram.
    pub total_words: usize,
    /// How many of them are dictionary-valid under the final alphabet.
    pub valid_words: usize,
    /// Number of accepted alphabet updates.
    pub commits: usize,
}

/// Dictionary-based cryptanalysis of monoalphabetic substitution ciphers.
///
/// The engine owns a shared, read-only dictionary and is otherwise
/// stateless: each [`guess_alphabet`](Self::guess_alphabet) call works on
/// its own alphabet and working set, so independent analyses may run
/// concurrently against one dictionary instance.
pub struct AnalysisEngine<D: Dictionary> {
    dictionary: Arc<D>,
    config: EngineConfig,
}

impl<D: Dictionary> AnalysisEngine<D> {
    pub fn new(dictionary: Arc<D>) -> Self {
        Self::with_config(dictionary, EngineConfig::default())
    }

    pub fn with_config(dictionary: Arc<D>, config: EngineConfig) -> Self {
        Self { dictionary, config }
    }

    /// Recovers an approximate decoding alphabet for `cryptogram`, starting
    /// the search from `start`.
    ///
    /// Words are consulted longest-first. For each, the current rendering is
    /// matched against same-length dictionary entries by position signature;
    /// a tentative alphabet merged from the match is committed only when it
    /// strictly lowers the number of invalid words over the whole extracted
    /// list. A word leaves the working set only by becoming dictionary-valid
    /// after a commit.
    pub fn guess_alphabet(&self, cryptogram: &str, start: &Alphabet) -> Result<AnalysisReport> {
        if cryptogram.trim().is_empty() {
            return Err(AnalysisError::EmptyCryptogram);
        }

        let words = extract_words(cryptogram);
        let total_words = words.len();
        let mut alphabet = *start;

        // The working set holds indices into `words`, which is already in
        // longest-first order. With a non-identity start some words may be
        // readable from the outset; those are dropped before the loop.
        let mut working: Vec<usize> = if alphabet == Alphabet::identity() {
            (0..total_words).collect()
        } else {
            self.invalid_indices(&words, &alphabet)
        };
        let mut consulted = vec![false; total_words];
        let mut current_invalid = self.invalid_indices(&words, &alphabet).len();

        let mut finder = CandidateFinder::new(&*self.dictionary);
        let mut commits = 0;
        let mut iterations = 0;
        let mut converged = working.is_empty();

        while !working.is_empty() {
            let Some(&index) = working.iter().find(|&&i| !consulted[i]) else {
                // Every remaining word was consulted under this alphabet and
                // none produced an improvement: the loop has stalled.
                break;
            };
            iterations += 1;
            if iterations > self.config.iteration_cap {
                break;
            }

            let rendered = alphabet.apply(&words[index]);
            let Some(candidate) = finder.find(&rendered) else {
                consulted[index] = true;
                continue;
            };

            let tentative = alphabet.merge(&rendered, &candidate);
            let still_invalid = self.invalid_indices(&words, &tentative);
            if still_invalid.len() < current_invalid {
                // Commit. The accepted permutation rewrites every
                // substitution, so renderings of all words may have changed
                // and the consulted marks are cleared with the refresh.
                alphabet = tentative;
                current_invalid = still_invalid.len();
                working = still_invalid;
                consulted = vec![false; total_words];
                commits += 1;
                if working.is_empty() {
                    converged = true;
                }
            } else {
                consulted[index] = true;
            }
        }

        Ok(AnalysisReport {
            alphabet,
            converged,
            total_words,
            valid_words: total_words - current_invalid,
            commits,
        })
    }

    /// Indices of words not dictionary-valid under `alphabet`, in the input
    /// (longest-first) order.
    fn invalid_indices(&self, words: &[String], alphabet: &Alphabet) -> Vec<usize> {
        words
            .iter()
            .enumerate()
            .filter(|(_, word)| !self.is_valid(word, alphabet))
            .map(|(index, _)| index)
            .collect()
    }

    fn is_valid(&self, word: &str, alphabet: &Alphabet) -> bool {
        let rendered = alphabet.apply(word);
        !rendered.is_empty() && self.dictionary.contains_word(&rendered.to_lowercase())
    }
}
