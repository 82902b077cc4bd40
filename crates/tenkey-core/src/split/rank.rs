use std::cmp::Ordering;

use tracing::debug_span;

use super::SplitIndexSet;
use crate::policy::DecodePolicy;
use crate::press::Press;
use crate::settings::{EmptySplitRank, RankStrategy};

/// Exact arithmetic mean, compared by cross-multiplication.
#[derive(Debug, Clone, Copy)]
struct Mean {
    sum: u128,
    count: u128,
}

impl Mean {
    const ZERO: Mean = Mean { sum: 0, count: 1 };

    fn of(values: impl Iterator<Item = u64>) -> Option<Mean> {
        let (sum, count) = values.fold((0u128, 0u128), |(s, c), v| (s + v as u128, c + 1));
        (count > 0).then_some(Mean { sum, count })
    }
}

impl PartialEq for Mean {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Mean {}

impl PartialOrd for Mean {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Mean {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.sum * other.count).cmp(&(other.sum * self.count))
    }
}

/// Mean of `f(delay)` over the boundary presses; `None` sorts below every
/// `Some`, which is how the empty split goes last.
fn boundary_mean(
    set: &SplitIndexSet,
    presses: &[Press],
    empty_split: EmptySplitRank,
    f: impl Fn(u64) -> u64,
) -> Option<Mean> {
    if set.is_empty() {
        return match empty_split {
            EmptySplitRank::Last => None,
            EmptySplitRank::Zero => Some(Mean::ZERO),
        };
    }
    Mean::of(set.indices().iter().map(|&i| f(presses[i].delay_ms)))
}

/// Mean delay of the presses that open each boundary, for display.
/// `None` for the empty split.
pub fn mean_delay(set: &SplitIndexSet, presses: &[Press]) -> Option<f64> {
    Mean::of(set.indices().iter().map(|&i| presses[i].delay_ms))
        .map(|m| m.sum as f64 / m.count as f64)
}

/// Order valid sets best first. The sort is stable, so equal scores keep
/// generation order.
pub fn rank(sets: &mut [SplitIndexSet], presses: &[Press], policy: &DecodePolicy) {
    let _span = debug_span!("rank", sets = sets.len(), strategy = ?policy.strategy).entered();
    if sets.len() <= 1 {
        return;
    }

    let delay_key = |s: &SplitIndexSet| boundary_mean(s, presses, policy.empty_split, |d| d);
    match policy.strategy {
        RankStrategy::MeanDelay => {
            sets.sort_by_cached_key(|s| std::cmp::Reverse(delay_key(s)));
        }
        RankStrategy::SplitConfidence => {
            let confidence_key = |s: &SplitIndexSet| {
                boundary_mean(s, presses, policy.empty_split, |d| {
                    policy.split_confidence(d)
                })
            };
            sets.sort_by_cached_key(|s| std::cmp::Reverse((confidence_key(s), delay_key(s))));
        }
    }
}
