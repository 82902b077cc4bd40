//! Character boundary candidates inside one same-row run.
//!
//! A press that follows a long enough pause may start a new character. Every
//! subset of those positions is a candidate split; the filter drops splits
//! whose segments exceed the row's run limit and the ranker orders the rest.

mod filter;
mod rank;

use std::ops::Range;

use serde::Serialize;
use tracing::warn;

use crate::press::Press;

pub use filter::{filter_valid, is_valid};
pub use rank::{mean_delay, rank};

/// Strictly increasing boundary positions inside `(0, len)` of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SplitIndexSet(Vec<usize>);

impl SplitIndexSet {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build from positions; returns `None` unless they are strictly increasing
    /// and lie strictly inside `(0, len)`.
    pub fn new(indices: Vec<usize>, len: usize) -> Option<Self> {
        let in_range = indices.iter().all(|&i| i > 0 && i < len);
        let increasing = indices.windows(2).all(|w| w[0] < w[1]);
        (in_range && increasing).then_some(Self(indices))
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Press ranges of each segment of a group of `len` presses.
    pub fn segments(&self, len: usize) -> Vec<Range<usize>> {
        let mut out = Vec::with_capacity(self.0.len() + 1);
        let mut start = 0;
        for &end in self.0.iter().chain(std::iter::once(&len)) {
            out.push(start..end);
            start = end;
        }
        out
    }
}

/// Positions (never 0) whose press delay reaches `min_threshold_ms`.
///
/// At most `max_flagged` positions are returned; past the cap the longest
/// pauses win, ties going to the earlier press.
pub fn flagged_indices(presses: &[Press], min_threshold_ms: u64, max_flagged: usize) -> Vec<usize> {
    let mut flagged: Vec<usize> = presses
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, p)| p.delay_ms >= min_threshold_ms)
        .map(|(i, _)| i)
        .collect();

    if flagged.len() > max_flagged {
        warn!(
            flagged = flagged.len(),
            max_flagged, "too many pauses in one run, keeping the longest"
        );
        flagged.sort_by(|&a, &b| {
            presses[b]
                .delay_ms
                .cmp(&presses[a].delay_ms)
                .then(a.cmp(&b))
        });
        flagged.truncate(max_flagged);
        flagged.sort_unstable();
    }
    flagged
}

/// Every subset of `flagged` (assumed ascending), including the empty one.
///
/// Sets come out by size. Each size is built from the previous one by taking
/// the positions in turn and appending each to every smaller set ending
/// below it, so `[1, 2]`, `[1, 3]`, `[2, 3]`, `[1, 4]` and so on. Ranking ties
/// keep this order.
pub fn generate(flagged: &[usize]) -> Vec<SplitIndexSet> {
    let mut sets = Vec::with_capacity(1usize << flagged.len());
    sets.push(SplitIndexSet::empty());

    let mut layer: Vec<Vec<usize>> = flagged.iter().map(|&i| vec![i]).collect();
    while !layer.is_empty() {
        let mut next = Vec::new();
        for &i in flagged {
            for set in &layer {
                if set.last().is_some_and(|&last| last < i) {
                    let mut longer = set.clone();
                    longer.push(i);
                    next.push(longer);
                }
            }
        }
        sets.extend(layer.into_iter().map(SplitIndexSet));
        layer = next;
    }
    sets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presses(delays: &[u64]) -> Vec<Press> {
        delays.iter().map(|&d| Press::new('k', d)).collect()
    }

    fn indices(sets: &[SplitIndexSet]) -> Vec<Vec<usize>> {
        sets.iter().map(|s| s.indices().to_vec()).collect()
    }

    #[test]
    fn test_flagged_skips_first_press() {
        let p = presses(&[5000, 500, 3000, 400]);
        assert_eq!(flagged_indices(&p, 1800, 12), vec![2]);
    }

    #[test]
    fn test_flagged_threshold_is_inclusive() {
        let p = presses(&[0, 1800, 1799]);
        assert_eq!(flagged_indices(&p, 1800, 12), vec![1]);
    }

    #[test]
    fn test_flagged_cap_keeps_longest_pauses() {
        let p = presses(&[0, 2000, 5000, 2000, 4000, 2000]);
        assert_eq!(flagged_indices(&p, 1800, 2), vec![2, 4]);
        // Equal delays: earlier press wins.
        assert_eq!(flagged_indices(&p, 1800, 4), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_generate_empty_flagged() {
        let sets = generate(&[]);
        assert_eq!(indices(&sets), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_generate_order() {
        let sets = generate(&[2, 4, 7]);
        assert_eq!(
            indices(&sets),
            vec![
                vec![],
                vec![2],
                vec![4],
                vec![7],
                vec![2, 4],
                vec![2, 7],
                vec![4, 7],
                vec![2, 4, 7],
            ]
        );
    }

    #[test]
    fn test_generate_pairs_by_last_position() {
        let sets = generate(&[1, 2, 3, 4]);
        let pairs: Vec<Vec<usize>> = indices(&sets)
            .into_iter()
            .filter(|s| s.len() == 2)
            .collect();
        assert_eq!(
            pairs,
            vec![
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
                vec![1, 4],
                vec![2, 4],
                vec![3, 4],
            ]
        );
        let triples: Vec<Vec<usize>> = indices(&sets)
            .into_iter()
            .filter(|s| s.len() == 3)
            .collect();
        assert_eq!(
            triples,
            vec![vec![1, 2, 3], vec![1, 2, 4], vec![1, 3, 4], vec![2, 3, 4]]
        );
    }

    #[test]
    fn test_generate_counts_power_of_two() {
        for k in 0..10 {
            let flagged: Vec<usize> = (1..=k).collect();
            assert_eq!(generate(&flagged).len(), 1 << k, "k = {k}");
        }
    }

    #[test]
    fn test_segments() {
        let set = SplitIndexSet::new(vec![2, 3], 6).unwrap();
        assert_eq!(set.segments(6), vec![0..2, 2..3, 3..6]);
        assert_eq!(SplitIndexSet::empty().segments(4), vec![0..4]);
    }

    #[test]
    fn test_new_rejects_outer_and_unsorted() {
        assert!(SplitIndexSet::new(vec![0], 4).is_none());
        assert!(SplitIndexSet::new(vec![4], 4).is_none());
        assert!(SplitIndexSet::new(vec![3, 2], 4).is_none());
        assert!(SplitIndexSet::new(vec![2, 2], 4).is_none());
        assert!(SplitIndexSet::new(vec![1, 3], 4).is_some());
    }
}
