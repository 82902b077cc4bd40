use std::collections::HashMap;

/// Per-row minimum interval between accepted presses.
///
/// Every press refreshes the row's timestamp, accepted or not, so a key
/// that chatters keeps being suppressed until it goes quiet for the full
/// interval.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval_ms: u64,
    last_seen: HashMap<char, u64>,
}

impl Debouncer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_seen: HashMap::new(),
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Returns false when `row` fired less than the interval ago.
    pub fn accept(&mut self, row: char, now_ms: u64) -> bool {
        let previous = self.last_seen.insert(row, now_ms);
        match previous {
            Some(prev) => now_ms.saturating_sub(prev) >= self.interval_ms,
            None => true,
        }
    }

    pub fn reset(&mut self) {
        self.last_seen.clear();
    }
}
