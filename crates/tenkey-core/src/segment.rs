use crate::press::Press;

/// A maximal run of consecutive presses on the same row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressGroup<'a> {
    pub row: char,
    pub presses: &'a [Press],
}

impl PressGroup<'_> {
    pub fn len(&self) -> usize {
        self.presses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    pub fn delays(&self) -> impl Iterator<Item = u64> + '_ {
        self.presses.iter().map(|p| p.delay_ms)
    }
}

/// Partition the press timeline into same-row runs, in session order.
pub fn segment(presses: &[Press]) -> Vec<PressGroup<'_>> {
    let mut groups = Vec::new();
    let mut start = 0;
    for i in 1..=presses.len() {
        if i == presses.len() || presses[i].row != presses[start].row {
            groups.push(PressGroup {
                row: presses[start].row,
                presses: &presses[start..i],
            });
            start = i;
        }
    }
    groups
}
