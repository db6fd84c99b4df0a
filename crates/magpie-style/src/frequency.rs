//! Frequency tables with stable top-N queries.
//!
//! One table per token kind, owned by a single extraction run and passed
//! explicitly through the pipeline - write-once-then-read, no removal, no
//! shared mutable state. Membership order is first-insertion order, which
//! doubles as the tie-break for `top(n)`: among equal counts, the token
//! recorded first ranks higher, deterministically across repeated calls.

use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts per token, with first-insertion ordering preserved.
///
/// Each `record` call increments a count - occurrences are not deduplicated
/// per source, so a color appearing three times in one stylesheet counts
/// three times.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T: Eq + Hash + Clone> {
    counts: HashMap<T, usize>,
    order: Vec<T>,
}

impl<T: Eq + Hash + Clone> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> FrequencyTable<T> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Record one occurrence of `token`.
    pub fn record(&mut self, token: T) {
        let count = self.counts.entry(token.clone()).or_insert(0);
        if *count == 0 {
            self.order.push(token);
        }
        *count += 1;
    }

    /// The occurrence count for `token` (zero when never recorded).
    #[must_use]
    pub fn count(&self, token: &T) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// The `n` highest-count tokens, count descending; ties are broken by
    /// first-insertion order (the stable sort preserves it).
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<T> {
        let mut ranked = self.order.clone();
        ranked.sort_by(|a, b| self.count(b).cmp(&self.count(a)));
        ranked.truncate(n);
        ranked
    }

    /// All distinct tokens in first-insertion order (the full membership
    /// set).
    pub fn members(&self) -> impl Iterator<Item = &T> {
        self.order.iter()
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate() {
        let mut table = FrequencyTable::new();
        table.record("a");
        table.record("a");
        table.record("b");
        assert_eq!(table.count(&"a"), 2);
        assert_eq!(table.count(&"b"), 1);
        assert_eq!(table.count(&"c"), 0);
    }

    #[test]
    fn test_top_orders_by_count() {
        let mut table = FrequencyTable::new();
        table.record("rare");
        table.record("common");
        table.record("common");
        assert_eq!(table.top(2), vec!["common", "rare"]);
    }

    #[test]
    fn test_tie_break_is_first_insertion() {
        let mut table = FrequencyTable::new();
        table.record("a");
        table.record("b");
        table.record("c");
        for _ in 0..10 {
            assert_eq!(table.top(2), vec!["a", "b"]);
        }
    }

    #[test]
    fn test_members_in_insertion_order() {
        let mut table = FrequencyTable::new();
        table.record("x");
        table.record("y");
        table.record("x");
        let members: Vec<_> = table.members().copied().collect();
        assert_eq!(members, vec!["x", "y"]);
    }
}
