// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! A multiset backed by `FxHashMap`.
//!
//! Values map to how many times they occur. An entry whose count drops to
//! zero is removed, so two counters are equal exactly when they hold the
//! same multiset.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Occurrence counts for hashable values.
#[derive(Clone, Debug)]
pub struct Counter<T> {
    counts: FxHashMap<T, usize>,
}

impl<T: Hash + Eq> Counter<T> {
    /// Create an empty counter.
    pub fn new() -> Counter<T> {
        return Counter {
            counts: FxHashMap::default(),
        };
    }

    /// Record one more occurrence of `item`.
    pub fn add(&mut self, item: T) {
        *self.counts.entry(item).or_insert(0) += 1;
    }

    /// How many occurrences of `item` remain. Zero if never seen.
    pub fn count(&self, item: &T) -> usize {
        return self.counts.get(item).copied().unwrap_or(0);
    }

    /// Remove one occurrence of `item`.
    ///
    /// Returns false, leaving the counter untouched, if none remain.
    pub fn take(&mut self, item: &T) -> bool {
        let Some(count) = self.counts.get_mut(item) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.counts.remove(item);
        }
        return true;
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        return self.counts.len();
    }

    /// Total number of occurrences across all values.
    pub fn total(&self) -> usize {
        return self.counts.values().sum();
    }

    pub fn is_empty(&self) -> bool {
        return self.counts.is_empty();
    }

    /// Iterate over `(value, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        return self.counts.iter().map(|(item, count)| (item, *count));
    }
}

impl<T: Hash + Eq> Default for Counter<T> {
    fn default() -> Counter<T> {
        return Counter::new();
    }
}

impl<T: Hash + Eq> PartialEq for Counter<T> {
    fn eq(&self, other: &Counter<T>) -> bool {
        return self.counts == other.counts;
    }
}

impl<T: Hash + Eq> Eq for Counter<T> {}

impl<T: Hash + Eq> Extend<T> for Counter<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for Counter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Counter<T> {
        let mut counter = Counter::new();
        counter.extend(iter);
        return counter;
    }
}
