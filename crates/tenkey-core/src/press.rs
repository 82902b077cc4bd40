//! Timestamped key presses.

use serde::Serialize;

/// One key press: the row it belongs to and the time since the previous
/// press anywhere in the session (0 for the first press).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Press {
    pub row: char,
    pub delay_ms: u64,
}

impl Press {
    pub fn new(row: char, delay_ms: u64) -> Self {
        Self { row, delay_ms }
    }
}

/// Append-only press history for one session.
#[derive(Debug, Default, Clone)]
pub struct PressRecorder {
    presses: Vec<Press>,
    last_press_ms: Option<u64>,
}

impl PressRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press at `now_ms` and return it.
    ///
    /// A clock that runs backwards yields a zero delay rather than wrapping.
    pub fn record(&mut self, row: char, now_ms: u64) -> Press {
        let delay_ms = match self.last_press_ms {
            Some(prev) => now_ms.saturating_sub(prev),
            None => 0,
        };
        self.last_press_ms = Some(now_ms);
        let press = Press::new(row, delay_ms);
        self.presses.push(press);
        press
    }

    pub fn presses(&self) -> &[Press] {
        &self.presses
    }

    pub fn len(&self) -> usize {
        self.presses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    /// Drop the whole history and the time marker.
    pub fn clear(&mut self) {
        self.presses.clear();
        self.last_press_ms = None;
    }
}
