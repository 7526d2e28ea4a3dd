// src/generators/candidates.rs
use std::collections::HashSet;

/// Deduplicating set of candidate strings that remembers insertion order.
///
/// Enumeration follows first insertion, so sampling "the first N words" of
/// the set is reproducible across runs.
#[derive(Debug, Default, Clone)]
pub struct CandidateSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the word was not already present.
    pub fn insert(&mut self, word: String) -> bool {
        if self.seen.contains(&word) {
            return false;
        }
        self.seen.insert(word.clone());
        self.order.push(word);
        true
    }

    #[cfg(test)]
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Copies of the first `n` words in insertion order.
    pub fn sample(&self, n: usize) -> Vec<String> {
        self.order.iter().take(n).cloned().collect()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }

    /// Lexicographically sorted contents, truncated to `limit` entries.
    pub fn into_sorted(self, limit: usize) -> Vec<String> {
        let mut words = self.order;
        words.sort_unstable();
        words.truncate(limit);
        words
    }
}

impl Extend<String> for CandidateSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = CandidateSet::new();
        set.extend(iter);
        set
    }
}
