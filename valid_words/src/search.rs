use crate::trie::WordTrie;
use std::collections::HashSet;
use tracing::{debug, trace};


/// `n^(n-1)` for `n` letters, saturating; zero letters give zero.
pub fn max_perms(num_letters: usize) -> u128 {
    if num_letters == 0 {
        return 0;
    }
    let base = num_letters as u128;
    u32::try_from(num_letters - 1).map_or(u128::MAX, |exp| base.saturating_pow(exp))
}

/// Every word of `words` that can be spelled by picking letters one at a time
/// from `letters`, each position at most once, while staying on a path of
/// `trie`.
pub fn narrow_perms(letters: &[char], trie: &WordTrie, words: &HashSet<String>) -> HashSet<String> {
    let stats = Search::new(letters, words).run(trie);
    debug!(
        found = stats.found.len(),
        descents = stats.descents,
        "search finished"
    );
    stats.found
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStats {
    pub found: HashSet<String>,
    /// How many times the search stepped from a trie node into a child.
    pub descents: usize,
}

/// Depth-first trie walk; `used` marks the positions taken by the current path.
pub struct Search<'a> {
    letters: &'a [char],
    words: &'a HashSet<String>,
    used: Vec<bool>,
    prefix: String,
    found: HashSet<String>,
    descents: usize,
}

impl<'a> Search<'a> {
    pub fn new(letters: &'a [char], words: &'a HashSet<String>) -> Self {
        Self {
            letters,
            words,
            used: vec![false; letters.len()],
            prefix: String::with_capacity(letters.len()),
            found: HashSet::new(),
            descents: 0,
        }
    }

    pub fn run(mut self, trie: &WordTrie) -> SearchStats {
        debug!(letters = self.letters.len(), "starting search");
        self.narrow(trie);
        SearchStats {
            found: self.found,
            descents: self.descents,
        }
    }

    fn narrow(&mut self, node: &WordTrie) {
        // Positions are tried left to right; skipping used ones leaves the
        // rest in their original order.
        for index in 0..self.letters.len() {
            if self.used[index] {
                continue;
            }

            let letter = self.letters[index];
            let Some(child) = node.get(letter) else {
                continue;
            };

            self.descents += 1;
            self.used[index] = true;
            self.prefix.push(letter);

            if self.words.contains(self.prefix.as_str()) {
                trace!(word = %self.prefix, "found");
                self.found.insert(self.prefix.clone());
            }
            self.narrow(child);

            self.prefix.pop();
            self.used[index] = false;
        }
    }
}
