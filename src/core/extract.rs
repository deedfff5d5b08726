// src/core/extract.rs

/// Minimum token length worth analyzing; shorter words carry too few
/// positional constraints.
const MIN_WORD_LEN: usize = 3;

/// Tokenizes a cryptogram into its working vocabulary.
///
/// The text is uppercased, split on whitespace, and filtered to tokens of
/// three or more characters. Duplicates keep their first occurrence, and the
/// result is stable-sorted by descending length so the most constrained
/// words come first.
pub fn extract_words(text: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for token in text.to_uppercase().split_whitespace() {
        if token.chars().count() >= MIN_WORD_LEN && !words.iter().any(|w| w == token) {
            words.push(token.to_string());
        }
    }
    words.sort_by_key(|w| std::cmp::Reverse(w.len()));
    words
}
