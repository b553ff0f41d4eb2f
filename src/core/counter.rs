//! Insertion-ordered frequency counter.
//!
//! Rankings must be reproducible, so ties are broken by first appearance:
//! [`FrequencyCounter::most_common`] is a stable sort over insertion order,
//! and [`FrequencyCounter::max`]/[`FrequencyCounter::min`] return the
//! earliest key among equals.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences of keys, remembering first-seen order.
#[derive(Debug, Clone)]
pub struct FrequencyCounter<K> {
    counts: HashMap<K, usize>,
    order: Vec<K>,
}

impl<K> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyCounter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        self.add_n(key, 1);
    }

    /// Adds `n` occurrences of `key`.
    pub fn add_n(&mut self, key: K, n: usize) {
        match self.counts.get_mut(&key) {
            Some(count) => *count += n,
            None => {
                self.order.push(key.clone());
                self.counts.insert(key, n);
            }
        }
    }

    /// Count for `key`, zero if never seen.
    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(key, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.order.iter().map(|key| (key, self.get(key)))
    }

    /// The `n` most frequent keys, ties in first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&K, usize)> {
        let mut ranked: Vec<(&K, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Highest-count key; the earliest wins a tie.
    pub fn max(&self) -> Option<(&K, usize)> {
        self.iter().fold(None, |best, (key, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((key, count)),
        })
    }

    /// Lowest-count key; the earliest wins a tie.
    pub fn min(&self) -> Option<(&K, usize)> {
        self.iter().fold(None, |best, (key, count)| match best {
            Some((_, best_count)) if best_count <= count => best,
            _ => Some((key, count)),
        })
    }
}
