//! Segment lengths to kana.

use std::fmt;

use serde::Serialize;

use crate::press::Press;
use crate::rows::Row;
use crate::split::SplitIndexSet;

/// What one segment of presses renders to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Glyph {
    Kana { kana: char },
    /// More presses than the row allows; shown as `k*6`.
    Overflow { row: char, count: usize },
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Kana { kana } => write!(f, "{kana}"),
            Glyph::Overflow { row, count } => write!(f, "{row}*{count}"),
        }
    }
}

/// One rendered segment and the delay of the press that opened it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub glyph: Glyph,
    pub presses: usize,
    pub boundary_delay_ms: u64,
}

/// One interpretation of a run under a specific split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub split: SplitIndexSet,
    pub segments: Vec<Segment>,
}

impl Candidate {
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.glyph.to_string()).collect()
    }
}

pub fn render_segment(row: &Row, count: usize) -> Glyph {
    match row.kana_for(count) {
        Some(kana) => Glyph::Kana { kana },
        None => Glyph::Overflow {
            row: row.symbol(),
            count,
        },
    }
}

/// Render every segment of `split` over the run `presses`.
pub fn render_split(row: &Row, presses: &[Press], split: &SplitIndexSet) -> Candidate {
    let segments = split
        .segments(presses.len())
        .into_iter()
        .map(|r| Segment {
            glyph: render_segment(row, r.len()),
            presses: r.len(),
            boundary_delay_ms: presses[r.start].delay_ms,
        })
        .collect();
    Candidate {
        split: split.clone(),
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::RowTable;

    fn k_row() -> &'static Row {
        RowTable::global().get('k').unwrap()
    }

    #[test]
    fn test_render_segment_in_range() {
        assert_eq!(render_segment(k_row(), 1), Glyph::Kana { kana: 'か' });
        assert_eq!(render_segment(k_row(), 5), Glyph::Kana { kana: 'こ' });
    }

    #[test]
    fn test_render_segment_overflow() {
        let g = render_segment(k_row(), 6);
        assert_eq!(g, Glyph::Overflow { row: 'k', count: 6 });
        assert_eq!(g.to_string(), "k*6");
    }

    #[test]
    fn test_render_split_boundary_delays() {
        let presses: Vec<Press> = [0, 500, 3000, 400]
            .iter()
            .map(|&d| Press::new('k', d))
            .collect();
        let split = SplitIndexSet::new(vec![2], 4).unwrap();
        let cand = render_split(k_row(), &presses, &split);
        assert_eq!(cand.text(), "きき");
        let delays: Vec<u64> = cand.segments.iter().map(|s| s.boundary_delay_ms).collect();
        assert_eq!(delays, vec![0, 3000]);
        let lens: Vec<usize> = cand.segments.iter().map(|s| s.presses).collect();
        assert_eq!(lens, vec![2, 2]);
    }
}
