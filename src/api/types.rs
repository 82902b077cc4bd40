use tenkey_core::{DecodedGroup, DecodedOutput, RenderedGroup};
use tenkey_session::{DisplayAction, KeyResponse};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum TkError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One same-row run. `texts` holds the single reading, the ranked
/// alternatives, or nothing for an unresolvable run.
#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct TkGroup {
    pub row: String,
    pub presses: u32,
    pub kind: TkGroupKind,
    pub texts: Vec<String>,
    /// Marker-formatted display, e.g. `{きき|け}` or `[k*6]`.
    pub display: String,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct TkDecoded {
    pub display: String,
    pub best: String,
    pub groups: Vec<TkGroup>,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct TkKeyResponse {
    pub consumed: bool,
    pub display: TkDisplay,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum TkGroupKind {
    Resolved,
    Alternatives,
    Unresolvable,
}

#[derive(Clone, Debug, PartialEq, uniffi::Enum)]
pub enum TkDisplay {
    Keep,
    Show { decoded: TkDecoded },
    Clear,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<&DecodedGroup> for TkGroup {
    fn from(g: &DecodedGroup) -> Self {
        let (kind, texts) = match &g.rendered {
            RenderedGroup::Resolved { text } => (TkGroupKind::Resolved, vec![text.clone()]),
            RenderedGroup::Alternatives { texts } => (TkGroupKind::Alternatives, texts.clone()),
            RenderedGroup::Unresolvable { .. } => (TkGroupKind::Unresolvable, Vec::new()),
        };
        Self {
            row: g.row.to_string(),
            presses: g.presses as u32,
            kind,
            texts,
            display: g.rendered.to_string(),
        }
    }
}

impl From<&DecodedOutput> for TkDecoded {
    fn from(out: &DecodedOutput) -> Self {
        Self {
            display: out.to_string(),
            best: out.best_text(),
            groups: out.groups.iter().map(TkGroup::from).collect(),
        }
    }
}

impl From<KeyResponse> for TkKeyResponse {
    fn from(resp: KeyResponse) -> Self {
        let display = match resp.display {
            DisplayAction::Keep => TkDisplay::Keep,
            DisplayAction::Show(out) => TkDisplay::Show {
                decoded: TkDecoded::from(&out),
            },
            DisplayAction::Clear => TkDisplay::Clear,
        };
        Self {
            consumed: resp.consumed,
            display,
        }
    }
}
