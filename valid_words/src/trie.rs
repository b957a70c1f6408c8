use serde::Serialize;
use std::collections::HashMap;


/// Prefix tree of a word list, without end-of-word markers.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordTrie {
    entries: HashMap<char, WordTrie>,
}

impl WordTrie {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.add(word.as_ref());
        }
        trie
    }

    pub fn add(&mut self, word: &str) {
        let mut node = self;
        for c in word.chars() {
            node = node.entries.entry(c).or_default();
        }
    }

    pub fn get(&self, c: char) -> Option<&WordTrie> {
        self.entries.get(&c)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of nodes below this one, not counting itself.
    pub fn node_count(&self) -> usize {
        self.entries
            .values()
            .map(|child| 1 + child.node_count())
            .sum()
    }
}
