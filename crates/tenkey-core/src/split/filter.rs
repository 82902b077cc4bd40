use super::SplitIndexSet;

/// True when every segment of a `len`-press group is at most `max_run` long.
pub fn is_valid(set: &SplitIndexSet, len: usize, max_run: usize) -> bool {
    set.segments(len).iter().all(|r| r.len() <= max_run)
}

/// Keep the sets that respect the run limit, in their original order.
pub fn filter_valid(sets: Vec<SplitIndexSet>, len: usize, max_run: usize) -> Vec<SplitIndexSet> {
    sets.into_iter()
        .filter(|s| is_valid(s, len, max_run))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::generate;
    use super::*;

    #[test]
    fn test_empty_split_within_limit() {
        assert!(is_valid(&SplitIndexSet::empty(), 5, 5));
        assert!(!is_valid(&SplitIndexSet::empty(), 6, 5));
    }

    #[test]
    fn test_inner_segment_too_long() {
        let set = SplitIndexSet::new(vec![1], 6).unwrap();
        // segments 1 and 5
        assert!(is_valid(&set, 6, 5));
        // segments 1 and 5 against a 3-press row
        assert!(!is_valid(&set, 6, 3));
    }

    #[test]
    fn test_filter_preserves_order() {
        // 7 presses, row limit 3, pauses before presses 3 and 4.
        let sets = generate(&[3, 4]);
        let valid = filter_valid(sets, 7, 3);
        let got: Vec<Vec<usize>> = valid.iter().map(|s| s.indices().to_vec()).collect();
        // [] -> 7, [3] -> 3+4, [4] -> 4+3, [3,4] -> 3+1+3
        assert_eq!(got, vec![vec![3, 4]]);
    }

    #[test]
    fn test_filter_everything_invalid() {
        let sets = generate(&[]);
        assert!(filter_valid(sets, 4, 3).is_empty());
    }
}
