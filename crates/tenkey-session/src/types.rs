use tenkey_core::DecodedOutput;

/// A key as seen by the session, already mapped from the platform key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// A row key, identified by its row symbol.
    Row(char),
    /// Any key the keymap does not bind.
    Unmapped,
    /// Drop the whole press history.
    Clear,
    /// Speak the full current text.
    AnnounceAll,
}

/// Display action for the composing text.
/// `Keep` leaves whatever is shown; `Clear` empties it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayAction {
    Keep,
    Show(DecodedOutput),
    Clear,
}

/// Response from `handle_key`, returned to the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub consumed: bool,
    pub display: DisplayAction,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            display: DisplayAction::Keep,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }

    pub(crate) fn with_display(mut self, display: DisplayAction) -> Self {
        self.display = display;
        self
    }
}
