//! End-to-end analysis over the public surface, using small in-memory
//! dictionaries.

use cipher_core::core::pattern::CandidateFinder;
use cipher_core::{Alphabet, AnalysisEngine, AnalysisError, LexicographicTrie};
use std::sync::Arc;

fn engine(words: &[&str]) -> AnalysisEngine<LexicographicTrie> {
    AnalysisEngine::new(Arc::new(LexicographicTrie::from_words(words)))
}

fn assert_bijection(alphabet: &Alphabet) {
    let mut seen = [false; 26];
    for byte in alphabet.as_str().bytes() {
        assert!(byte.is_ascii_uppercase());
        assert!(!seen[(byte - b'A') as usize], "duplicate letter in {alphabet}");
        seen[(byte - b'A') as usize] = true;
    }
}

#[test]
fn recovers_plaintext_for_a_fully_covered_cryptogram() {
    // Words with pairwise distinct lengths and repetition shapes, so every
    // candidate lookup is unambiguous and each commit strictly shrinks the
    // invalid set.
    let plaintext = "MISSISSIPPI BANANA TEST";
    let decoding: Alphabet = "VNSTBIQLWOZUEJMRYGCPDKHXAF".parse().unwrap();
    let cryptogram = decoding.inverse().apply(plaintext);

    let engine = engine(&["mississippi", "banana", "test"]);
    let report = engine
        .guess_alphabet(&cryptogram, &Alphabet::identity())
        .unwrap();

    assert!(report.converged);
    assert_eq!(report.valid_words, report.total_words);
    assert_eq!(report.alphabet.apply(&cryptogram), plaintext);
    assert_bijection(&report.alphabet);
}

#[test]
fn reanalysis_from_own_output_is_a_fixed_point() {
    let plaintext = "MISSISSIPPI BANANA TEST";
    let decoding: Alphabet = "VNSTBIQLWOZUEJMRYGCPDKHXAF".parse().unwrap();
    let cryptogram = decoding.inverse().apply(plaintext);

    let engine = engine(&["mississippi", "banana", "test"]);
    let first = engine
        .guess_alphabet(&cryptogram, &Alphabet::identity())
        .unwrap();
    let second = engine.guess_alphabet(&cryptogram, &first.alphabet).unwrap();

    assert_eq!(second.alphabet, first.alphabet);
    assert_eq!(second.commits, 0);
    assert!(second.converged);
}

#[test]
fn single_word_example_from_identity() {
    let engine = engine(&["cat"]);
    let report = engine
        .guess_alphabet("EIB", &Alphabet::identity())
        .unwrap();
    let alphabet = report.alphabet;

    assert_eq!(alphabet.substitute((b'E' - b'A') as usize), b'C');
    assert_eq!(alphabet.substitute((b'I' - b'A') as usize), b'A');
    assert_eq!(alphabet.substitute((b'B' - b'A') as usize), b'T');
    assert_eq!(alphabet.apply("EIB"), "CAT");
    assert_bijection(&alphabet);
}

#[test]
fn incompatible_dictionary_returns_start_unchanged() {
    let engine = engine(&["toto", "sees", "noon"]);
    let start: Alphabet = "VNSTBIQLWOZUEJMRYGCPDKHXAF".parse().unwrap();
    let report = engine.guess_alphabet("WXYZ QRSTU", &start).unwrap();

    assert_eq!(report.alphabet, start);
    assert_eq!(report.commits, 0);
    assert!(!report.converged);
}

#[test]
fn valid_word_count_never_regresses_from_start() {
    // Monotonicity at the surface: commits only ever lower the invalid
    // count, so the final tally is at least the starting one.
    let engine = engine(&["cat", "dog", "mouse"]);
    let start: Alphabet = "BCDEFGHIJKLMNOPQRSTUVWXYZA".parse().unwrap();
    // "BZS" renders to "CAT" under the start; the rest is noise.
    let report = engine.guess_alphabet("BZS WWWW", &start).unwrap();
    assert!(report.valid_words >= 1);
    assert_bijection(&report.alphabet);
}

#[test]
fn malformed_keys_are_rejected_at_the_parse_boundary() {
    assert!(matches!(
        "ABC".parse::<Alphabet>(),
        Err(AnalysisError::InvalidAlphabet(_))
    ));
    assert!(matches!(
        "AACDEFGHIJKLMNOPQRSTUVWXYZ".parse::<Alphabet>(),
        Err(AnalysisError::InvalidAlphabet(_))
    ));
}

#[test]
fn empty_cryptogram_is_invalid_input() {
    let engine = engine(&["cat"]);
    assert!(matches!(
        engine.guess_alphabet("   \n", &Alphabet::identity()),
        Err(AnalysisError::EmptyCryptogram)
    ));
}

#[test]
fn candidate_finder_respects_shape_and_length_over_a_trie() {
    let trie = LexicographicTrie::from_words(["toto", "test", "abcd", "cat", "it's"]);
    let mut finder = CandidateFinder::new(&trie);

    // Repetition shape is decisive.
    assert_eq!(finder.find("QRQR").as_deref(), Some("TOTO"));
    assert_eq!(finder.find("QRSQ").as_deref(), Some("TEST"));

    // Clean-form length must equal the query length exactly; "it's" cleans
    // to three letters and must never answer a four-letter query.
    for cipher in ["QRQR", "QRSQ", "QRST"] {
        if let Some(candidate) = finder.find(cipher) {
            assert_eq!(candidate.len(), cipher.len());
            assert_ne!(candidate, "ITS");
        }
    }
}

#[test]
fn shared_dictionary_supports_independent_analyses() {
    let dictionary = Arc::new(LexicographicTrie::from_words(["cat", "test"]));
    let engine_a = AnalysisEngine::new(Arc::clone(&dictionary));
    let engine_b = AnalysisEngine::new(Arc::clone(&dictionary));

    let a = engine_a.guess_alphabet("EIB", &Alphabet::identity()).unwrap();
    let b = engine_b.guess_alphabet("QRSQ", &Alphabet::identity()).unwrap();

    assert_eq!(a.alphabet.apply("EIB"), "CAT");
    assert_eq!(b.alphabet.apply("QRSQ"), "TEST");
}
