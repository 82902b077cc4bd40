use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use tenkey_core::RowTable;
use tenkey_session::{InputSession, KeyEvent, SpeechPlayer};

use super::types::{TkDecoded, TkKeyResponse};

#[derive(uniffi::Object)]
pub struct TkSession {
    session: Mutex<InputSession>,
    /// Origin of the monotonic clock used by `press`.
    started: Instant,
}

/// Bridges one `speech_tick` call: the host reports whether it is still
/// speaking and speaks whatever text comes back.
struct HostPlayer {
    speaking: bool,
}

impl SpeechPlayer for HostPlayer {
    fn is_speaking(&self) -> bool {
        self.speaking
    }

    fn speak(&mut self, _text: &str) {}
}

fn row_event(row: &str) -> KeyEvent {
    let mut chars = row.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => KeyEvent::Row(c),
        _ => KeyEvent::Unmapped,
    }
}

#[uniffi::export]
impl TkSession {
    #[uniffi::constructor]
    pub(super) fn new() -> Arc<Self> {
        let rows = Arc::new(RowTable::global().clone());
        Arc::new(Self {
            session: Mutex::new(InputSession::new(rows)),
            started: Instant::now(),
        })
    }

    /// Press a row key now. Anything but a single known row symbol is ignored.
    fn press(&self, row: String) -> TkKeyResponse {
        let now_ms = self.started.elapsed().as_millis() as u64;
        self.press_at(row, now_ms)
    }

    /// Press a row key at an explicit time (milliseconds, monotonic).
    fn press_at(&self, row: String, now_ms: u64) -> TkKeyResponse {
        self.lock().handle_key(row_event(&row), now_ms).into()
    }

    /// The clear key: drops the history and announces it.
    fn clear(&self) -> TkKeyResponse {
        self.lock().handle_key(KeyEvent::Clear, 0).into()
    }

    fn announce_all(&self) {
        self.lock().handle_key(KeyEvent::AnnounceAll, 0);
    }

    fn decoded(&self) -> TkDecoded {
        TkDecoded::from(self.lock().decoded())
    }

    /// Silent reset.
    fn reset(&self) {
        self.lock().reset();
    }

    fn set_debounce(&self, interval_ms: Option<u64>) {
        self.lock().set_debounce(interval_ms);
    }

    /// Call every `speech_interval_ms`. Returns text the host should speak now.
    fn speech_tick(&self, is_speaking: bool) -> Option<String> {
        let mut player = HostPlayer {
            speaking: is_speaking,
        };
        self.lock().speech_tick(&mut player)
    }

    fn speech_interval_ms(&self) -> u64 {
        self.lock().speech_interval_ms()
    }
}

impl TkSession {
    fn lock(&self) -> MutexGuard<'_, InputSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{TkDisplay, TkGroupKind};

    #[test]
    fn test_press_at_and_decoded() {
        let s = TkSession::new();
        for (t, row) in [(0, "k"), (500, "k"), (3_500, "k"), (3_900, "k")] {
            s.press_at(row.to_string(), t);
        }
        let d = s.decoded();
        assert_eq!(d.display, "{きき|け}");
        assert_eq!(d.best, "きき");
        assert_eq!(d.groups.len(), 1);
        assert_eq!(d.groups[0].kind, TkGroupKind::Alternatives);
        assert_eq!(d.groups[0].texts, vec!["きき", "け"]);
    }

    #[test]
    fn test_press_returns_show() {
        let s = TkSession::new();
        let resp = s.press_at("a".into(), 0);
        assert!(resp.consumed);
        match resp.display {
            TkDisplay::Show { decoded } => assert_eq!(decoded.display, "あ"),
            other => panic!("expected Show, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_row_string_ignored() {
        let s = TkSession::new();
        assert!(!s.press_at("ka".into(), 0).consumed);
        assert!(!s.press_at(String::new(), 0).consumed);
        assert!(!s.press_at("q".into(), 0).consumed);
        assert!(s.decoded().groups.is_empty());
    }

    #[test]
    fn test_clear_and_speech() {
        let s = TkSession::new();
        s.press_at("s".into(), 0);
        assert_eq!(s.speech_tick(true), None);
        assert_eq!(s.speech_tick(false).as_deref(), Some("さー"));

        let resp = s.clear();
        assert_eq!(resp.display, TkDisplay::Clear);
        assert_eq!(s.speech_tick(false).as_deref(), Some("クリアします"));
        assert!(s.decoded().groups.is_empty());
    }

    #[test]
    fn test_reset_and_announce_all() {
        let s = TkSession::new();
        s.press_at("n".into(), 0);
        s.press_at("n".into(), 200);
        s.announce_all();
        assert_eq!(s.speech_tick(false).as_deref(), Some("に"));

        s.reset();
        s.announce_all();
        assert_eq!(s.speech_tick(false).as_deref(), Some("文字がないです"));
    }

    #[test]
    fn test_debounce_toggle() {
        let s = TkSession::new();
        s.set_debounce(Some(600));
        s.press_at("k".into(), 1_000);
        assert_eq!(s.press_at("k".into(), 1_200).display, TkDisplay::Keep);
        s.set_debounce(None);
        s.press_at("k".into(), 1_300);
        assert_eq!(s.decoded().best, "き");
    }
}
