use std::collections::HashSet;

use super::RenderedGroup;
use crate::render::Candidate;

/// Collapse ranked candidates into the group's display form.
///
/// Identical texts keep only their best-ranked occurrence; no candidates at
/// all means the run could not be split within the row limit.
pub(super) fn assemble(row: char, presses: usize, candidates: &[Candidate]) -> RenderedGroup {
    let mut seen = HashSet::new();
    let mut texts = Vec::new();
    for cand in candidates {
        let text = cand.text();
        if seen.insert(text.clone()) {
            texts.push(text);
        }
    }

    match texts.len() {
        0 => RenderedGroup::Unresolvable { row, presses },
        1 => RenderedGroup::Resolved {
            text: texts.remove(0),
        },
        _ => RenderedGroup::Alternatives { texts },
    }
}
