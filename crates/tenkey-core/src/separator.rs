//! Deterministic composer driven by an explicit separator key.
//!
//! Instead of inferring boundaries from pauses, every character is a pair of
//! counters (row, vowel) stepped by dedicated keys, and a separator key starts
//! the next character. Counters wrap around the table in both directions.

use crate::rows::RowTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeOp {
    NextRow,
    PrevRow,
    NextVowel,
    /// Start a new character.
    Separate,
    Clear,
}

#[derive(Debug, Clone)]
pub struct SeparatorComposer {
    rows: Vec<Vec<char>>,
    /// `None` until the character's first key; then (row, vowel) counters.
    cells: Vec<Option<(i64, i64)>>,
}

impl SeparatorComposer {
    pub fn new(table: &RowTable) -> Self {
        Self {
            rows: table.rows().iter().map(|r| r.kana().to_vec()).collect(),
            cells: Vec::new(),
        }
    }

    pub fn apply(&mut self, op: ComposeOp) {
        if op == ComposeOp::Clear {
            self.cells.clear();
            return;
        }
        if self.cells.is_empty() {
            self.cells.push(None);
        }
        if op == ComposeOp::Separate {
            self.cells.push(None);
            return;
        }

        let Some(cell) = self.cells.last_mut() else {
            return;
        };
        match cell {
            // The first key of a character only lands on the table origin.
            None => *cell = Some((0, 0)),
            Some((row, vowel)) => match op {
                ComposeOp::NextRow => *row += 1,
                ComposeOp::PrevRow => *row -= 1,
                ComposeOp::NextVowel => *vowel += 1,
                ComposeOp::Separate | ComposeOp::Clear => {}
            },
        }
    }

    fn char_at(&self, row: i64, vowel: i64) -> Option<char> {
        let kana = self.rows.get(row.rem_euclid(self.rows.len() as i64) as usize)?;
        if kana.is_empty() {
            return None;
        }
        kana.get(vowel.rem_euclid(kana.len() as i64) as usize).copied()
    }

    /// Characters composed so far; untouched cells are skipped.
    pub fn chars(&self) -> Vec<char> {
        if self.rows.is_empty() {
            return Vec::new();
        }
        self.cells
            .iter()
            .flatten()
            .filter_map(|&(row, vowel)| self.char_at(row, vowel))
            .collect()
    }

    pub fn text(&self) -> String {
        self.chars().into_iter().collect()
    }
}
