//! Plain-text press timelines: one `row delay_ms` pair per line.
//!
//! ```text
//! # きき or け
//! k 0
//! k 500
//! k 3000
//! k 400
//! ```
//!
//! Blank lines and `#` comments are skipped. Rows are not checked against
//! the table; unknown rows decode as unresolvable.

use tenkey_core::Press;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TimelineError {
    #[error("line {line}: expected `row delay_ms`, got {content:?}")]
    Malformed { line: usize, content: String },
    #[error("line {line}: row must be a single character, got {row:?}")]
    InvalidRow { line: usize, row: String },
    #[error("line {line}: invalid delay {delay:?}")]
    InvalidDelay { line: usize, delay: String },
}

pub fn parse_timeline(input: &str) -> Result<Vec<Press>, TimelineError> {
    let mut presses = Vec::new();
    for (i, raw) in input.lines().enumerate() {
        let line = i + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let mut fields = content.split_whitespace();
        let (Some(row), Some(delay), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(TimelineError::Malformed {
                line,
                content: content.to_string(),
            });
        };

        let mut chars = row.chars();
        let (Some(symbol), None) = (chars.next(), chars.next()) else {
            return Err(TimelineError::InvalidRow {
                line,
                row: row.to_string(),
            });
        };
        let delay_ms = delay
            .parse::<u64>()
            .map_err(|_| TimelineError::InvalidDelay {
                line,
                delay: delay.to_string(),
            })?;
        presses.push(Press::new(symbol, delay_ms));
    }
    Ok(presses)
}
