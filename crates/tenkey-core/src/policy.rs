use crate::settings::{settings, EmptySplitRank, RankStrategy, Settings};

/// Thresholds and ranking choices that fully determine a decode.
///
/// Two decodes of the same timeline under equal policies produce identical
/// output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodePolicy {
    /// Minimum delay before a press may start a new character.
    pub min_threshold_ms: u64,
    /// Cap on boundary positions considered per group.
    pub max_flagged: usize,
    pub strategy: RankStrategy,
    pub empty_split: EmptySplitRank,
    /// Upper edges of the confidence bands (min < threshold < max).
    pub threshold_ms: u64,
    pub max_threshold_ms: u64,
}

impl DecodePolicy {
    pub fn from_settings(s: &Settings) -> Self {
        Self {
            min_threshold_ms: s.split.min_threshold_ms,
            max_flagged: s.split.max_flagged,
            strategy: s.ranking.strategy,
            empty_split: s.ranking.empty_split,
            threshold_ms: s.confidence.threshold_ms,
            max_threshold_ms: s.confidence.max_threshold_ms,
        }
    }

    pub fn with_min_threshold(mut self, min_threshold_ms: u64) -> Self {
        self.min_threshold_ms = min_threshold_ms;
        self
    }

    pub fn with_strategy(mut self, strategy: RankStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_empty_split(mut self, empty_split: EmptySplitRank) -> Self {
        self.empty_split = empty_split;
        self
    }

    pub fn with_max_flagged(mut self, max_flagged: usize) -> Self {
        self.max_flagged = max_flagged;
        self
    }

    /// Likelihood (0-100) that a boundary before a press of this delay was
    /// intended, from the four delay bands.
    pub fn split_confidence(&self, delay_ms: u64) -> u64 {
        let continuation = if delay_ms > self.max_threshold_ms {
            0
        } else if delay_ms > self.threshold_ms {
            30
        } else if delay_ms > self.min_threshold_ms {
            70
        } else {
            100
        };
        100 - continuation
    }
}

impl Default for DecodePolicy {
    fn default() -> Self {
        Self::from_settings(settings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_settings() {
        let p = DecodePolicy::default();
        assert_eq!(p.min_threshold_ms, 1800);
        assert_eq!(p.max_flagged, 12);
        assert_eq!(p.strategy, RankStrategy::MeanDelay);
        assert_eq!(p.empty_split, EmptySplitRank::Last);
    }

    #[test]
    fn test_confidence_bands() {
        let p = DecodePolicy::default();
        assert_eq!(p.split_confidence(500), 0);
        assert_eq!(p.split_confidence(1800), 0);
        assert_eq!(p.split_confidence(1801), 30);
        assert_eq!(p.split_confidence(2500), 30);
        assert_eq!(p.split_confidence(3000), 70);
        assert_eq!(p.split_confidence(4000), 70);
        assert_eq!(p.split_confidence(4001), 100);
    }
}
