//! Press timeline to ranked kana readings.
//!
//! Each same-row run is decoded on its own: pauses inside the run propose
//! character boundaries, splits that overrun the row are dropped, the rest
//! are ranked and rendered. Runs are then joined in press order.

mod assemble;


use std::fmt;

use serde::Serialize;
use tracing::{debug, debug_span, warn};

use crate::policy::DecodePolicy;
use crate::press::Press;
use crate::render::{render_split, Candidate};
use crate::rows::RowTable;
use crate::segment::{segment, PressGroup};
use crate::split::{filter_valid, flagged_indices, generate, rank};

use assemble::assemble;

/// Display form of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedGroup {
    /// Every valid split reads the same.
    Resolved { text: String },
    /// Distinct readings, best first.
    Alternatives { texts: Vec<String> },
    /// No split fits the row limit.
    Unresolvable { row: char, presses: usize },
}

impl RenderedGroup {
    /// Best reading, or the overflow marker for an unresolvable run.
    pub fn best(&self) -> String {
        match self {
            RenderedGroup::Resolved { text } => text.clone(),
            RenderedGroup::Alternatives { texts } => texts[0].clone(),
            RenderedGroup::Unresolvable { .. } => self.to_string(),
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, RenderedGroup::Alternatives { .. })
    }
}

impl fmt::Display for RenderedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedGroup::Resolved { text } => f.write_str(text),
            RenderedGroup::Alternatives { texts } => write!(f, "{{{}}}", texts.join("|")),
            RenderedGroup::Unresolvable { row, presses } => write!(f, "[{row}*{presses}]"),
        }
    }
}

/// A decoded run with its ranked (pre-dedup) candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedGroup {
    pub row: char,
    pub presses: usize,
    pub candidates: Vec<Candidate>,
    pub rendered: RenderedGroup,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodedOutput {
    pub groups: Vec<DecodedGroup>,
}

impl DecodedOutput {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Best reading of every run, concatenated.
    pub fn best_text(&self) -> String {
        self.groups.iter().map(|g| g.rendered.best()).collect()
    }

    pub fn rendered(&self) -> impl Iterator<Item = &RenderedGroup> {
        self.groups.iter().map(|g| &g.rendered)
    }
}

impl fmt::Display for DecodedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for g in &self.groups {
            write!(f, "{}", g.rendered)?;
        }
        Ok(())
    }
}

/// Decode a whole press timeline.
pub fn decode(presses: &[Press], table: &RowTable, policy: &DecodePolicy) -> DecodedOutput {
    let _span = debug_span!("decode", presses = presses.len()).entered();
    let groups = segment(presses)
        .iter()
        .map(|g| decode_group(g, table, policy))
        .collect();
    DecodedOutput { groups }
}

/// Decode one same-row run using only its own presses' delays.
pub fn decode_group(group: &PressGroup<'_>, table: &RowTable, policy: &DecodePolicy) -> DecodedGroup {
    let _span = debug_span!("decode_group", row = %group.row, len = group.len()).entered();

    let Some(row) = table.get(group.row) else {
        warn!(row = %group.row, "row missing from table");
        return DecodedGroup {
            row: group.row,
            presses: group.len(),
            candidates: Vec::new(),
            rendered: RenderedGroup::Unresolvable {
                row: group.row,
                presses: group.len(),
            },
        };
    };

    let flagged = flagged_indices(group.presses, policy.min_threshold_ms, policy.max_flagged);
    let mut valid = filter_valid(generate(&flagged), group.len(), row.max_run());
    rank(&mut valid, group.presses, policy);

    let candidates: Vec<Candidate> = valid
        .iter()
        .map(|split| render_split(row, group.presses, split))
        .collect();
    let rendered = assemble(group.row, group.len(), &candidates);
    debug!(flagged = flagged.len(), valid = candidates.len(), %rendered, "group decoded");

    DecodedGroup {
        row: group.row,
        presses: group.len(),
        candidates,
        rendered,
    }
}
