mod speech;

use std::sync::Arc;

use tenkey_core::RowTable;

use super::{InputSession, KeyEvent, KeyResponse};

pub(super) fn make_session() -> InputSession {
    let mut session = InputSession::new(Arc::new(RowTable::global().clone()));
    session.set_debounce(None);
    session
}

/// Press `row` at each absolute time in `times`.
pub(super) fn press_at(session: &mut InputSession, row: char, times: &[u64]) -> KeyResponse {
    let mut last = KeyResponse::not_consumed();
    for &t in times {
        last = session.handle_key(KeyEvent::Row(row), t);
    }
    last
}

#[derive(Default)]
pub(super) struct RecordingPlayer {
    pub(super) speaking: bool,
    pub(super) spoken: Vec<String>,
}

impl super::SpeechPlayer for RecordingPlayer {
    fn is_speaking(&self) -> bool {
        self.speaking
    }

    fn speak(&mut self, text: &str) {
        self.spoken.push(text.to_string());
    }
}
