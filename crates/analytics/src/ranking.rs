//! Frequency counting with a stable tie-break.

use crate::types::RankedEntry;
use std::collections::HashMap;

/// Number of entries kept in each ranking
pub const TOP_K: usize = 5;

/// Counts names as they are seen.
///
/// Ties are broken by first occurrence: a name seen earlier ranks higher.
#[derive(Debug, Default)]
pub struct Ranking<'a> {
    /// name -> (count, first occurrence)
    counts: HashMap<&'a str, (usize, usize)>,
}

impl<'a> Ranking<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &'a str) {
        let next_seen = self.counts.len();
        self.counts.entry(name).or_insert((0, next_seen)).0 += 1;
    }

    /// Number of distinct names seen
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// The `k` highest counts, descending
    pub fn top(self, k: usize) -> Vec<RankedEntry> {
        let mut entries: Vec<(&str, usize, usize)> = self
            .counts
            .into_iter()
            .map(|(name, (count, first_seen))| (name, count, first_seen))
            .collect();

        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        entries.truncate(k);

        entries
            .into_iter()
            .map(|(name, count, _)| RankedEntry::new(name, count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_orders_by_count_then_first_seen() {
        let mut ranking = Ranking::new();
        for name in ["b", "a", "c", "a", "c", "d"] {
            ranking.record(name);
        }
        assert_eq!(ranking.distinct(), 4);

        let top = ranking.top(3);
        assert_eq!(
            top,
            vec![
                RankedEntry::new("a", 2),
                RankedEntry::new("c", 2),
                RankedEntry::new("b", 1),
            ]
        );
    }

    #[test]
    fn test_ranking_empty() {
        assert!(Ranking::new().top(TOP_K).is_empty());
    }
}
