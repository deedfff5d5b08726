// src/dictionary/trie.rs
use crate::dictionary::Dictionary;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bytes a stored word may contain besides lowercase letters.
const APOSTROPHE: u8 = b'\'';
const HYPHEN: u8 = b'-';

#[derive(Clone, Serialize, Deserialize)]
struct TrieNode {
    children: HashMap<u8, usize>,
    end_of_word: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            end_of_word: false,
        }
    }
}

/// A lexicographic prefix trie over lowercase words.
///
/// Nodes live in a flat `Vec` and reference children by index, so the whole
/// structure serializes as one block for snapshotting. Insertion is O(k) in
/// the word length.
#[derive(Clone, Serialize, Deserialize)]
pub struct LexicographicTrie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl LexicographicTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            word_count: 0,
        }
    }

    /// Builds a trie from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Inserts a word, lowercased. Characters other than a-z, apostrophe
    /// and hyphen are dropped; words reduced to nothing are ignored.
    pub fn insert(&mut self, word: &str) {
        let bytes: Vec<u8> = word
            .to_lowercase()
            .bytes()
            .filter(|&b| is_accepted(b))
            .collect();
        if bytes.is_empty() {
            return;
        }

        let mut node_idx = 0;
        for &byte in &bytes {
            node_idx = match self.nodes[node_idx].children.get(&byte) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[node_idx].children.insert(byte, next);
                    next
                }
            };
        }
        if !self.nodes[node_idx].end_of_word {
            self.nodes[node_idx].end_of_word = true;
            self.word_count += 1;
        }
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Whether `prefix` is the prefix of at least one stored word.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// All stored words starting with `prefix`, in alphabetical order. An
    /// empty prefix lists the whole dictionary.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        if let Some(node_idx) = self.walk(prefix) {
            let mut buf = prefix.as_bytes().to_vec();
            self.collect_words(node_idx, &mut buf, &mut words);
        }
        words
    }

    fn walk(&self, path: &str) -> Option<usize> {
        let mut node_idx = 0;
        for byte in path.bytes() {
            node_idx = *self.nodes[node_idx].children.get(&byte)?;
        }
        Some(node_idx)
    }

    /// Child indices in byte order, for deterministic enumeration.
    fn sorted_children(&self, node_idx: usize) -> Vec<(u8, usize)> {
        let mut children: Vec<(u8, usize)> = self.nodes[node_idx]
            .children
            .iter()
            .map(|(&byte, &idx)| (byte, idx))
            .collect();
        children.sort_by_key(|&(byte, _)| byte);
        children
    }

    fn collect_words(&self, node_idx: usize, buf: &mut Vec<u8>, words: &mut Vec<String>) {
        if self.nodes[node_idx].end_of_word {
            words.push(String::from_utf8_lossy(buf).into_owned());
        }
        for (byte, child) in self.sorted_children(node_idx) {
            buf.push(byte);
            self.collect_words(child, buf, words);
            buf.pop();
        }
    }

    fn collect_words_of_length(
        &self,
        node_idx: usize,
        buf: &mut Vec<u8>,
        length: usize,
        words: &mut Vec<String>,
    ) {
        if buf.len() == length {
            if self.nodes[node_idx].end_of_word {
                words.push(String::from_utf8_lossy(buf).into_owned());
            }
            return;
        }
        for (byte, child) in self.sorted_children(node_idx) {
            buf.push(byte);
            self.collect_words_of_length(child, buf, length, words);
            buf.pop();
        }
    }
}

impl Default for LexicographicTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for LexicographicTrie {
    fn contains_word(&self, word: &str) -> bool {
        match self.walk(word) {
            Some(node_idx) => self.nodes[node_idx].end_of_word,
            None => false,
        }
    }

    fn words_of_length(&self, length: usize) -> Vec<String> {
        let mut words = Vec::new();
        if length > 0 {
            let mut buf = Vec::with_capacity(length);
            self.collect_words_of_length(0, &mut buf, length, &mut words);
        }
        words
    }
}

fn is_accepted(byte: u8) -> bool {
    byte.is_ascii_lowercase() || byte == APOSTROPHE || byte == HYPHEN
}
