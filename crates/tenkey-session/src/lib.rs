//! Stateful multi-tap session: owns the press history and turns key events
//! into decoded output plus spoken feedback requests.
//!
//! `InputSession` is single-threaded; the FFI layer serialises callers.

mod debounce;
mod speech;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tenkey_core::settings::{settings, SpeechSettings};
use tenkey_core::{decode, DecodePolicy, DecodedOutput, Press, PressRecorder, RenderedGroup, RowTable};
use tracing::{debug, debug_span};

pub use debounce::Debouncer;
pub use speech::{Announcement, SpeechPlayer, SpeechThrottle};
pub use types::{DisplayAction, KeyEvent, KeyResponse};

pub struct InputSession {
    rows: Arc<RowTable>,
    policy: DecodePolicy,
    recorder: PressRecorder,
    /// `None` when debouncing is off.
    debouncer: Option<Debouncer>,
    speech: SpeechThrottle,
    speech_settings: SpeechSettings,
    /// Decode of the full history, refreshed on every accepted press.
    decoded: DecodedOutput,
}

impl InputSession {
    /// Session with the global settings' policy, debounce and speech options.
    pub fn new(rows: Arc<RowTable>) -> Self {
        let s = settings();
        let debouncer = s
            .input
            .debounce
            .then(|| Debouncer::new(s.input.debounce_ms));
        Self {
            rows,
            policy: DecodePolicy::from_settings(s),
            recorder: PressRecorder::new(),
            debouncer,
            speech: SpeechThrottle::new(s.speech.interval_ms),
            speech_settings: s.speech.clone(),
            decoded: DecodedOutput::default(),
        }
    }

    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self.redecode();
        self
    }

    /// Enable or disable the per-row debounce. `None` turns it off.
    pub fn set_debounce(&mut self, interval_ms: Option<u64>) {
        self.debouncer = interval_ms.map(Debouncer::new);
    }

    pub fn policy(&self) -> &DecodePolicy {
        &self.policy
    }

    pub fn rows(&self) -> &RowTable {
        &self.rows
    }

    /// Process one key at `now_ms` (monotonic milliseconds).
    pub fn handle_key(&mut self, event: KeyEvent, now_ms: u64) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event, now_ms).entered();
        match event {
            KeyEvent::Row(row) => self.handle_row(row, now_ms),
            KeyEvent::Unmapped => KeyResponse::not_consumed(),
            KeyEvent::Clear => {
                self.reset();
                self.announce(Announcement::Notice(self.speech_settings.clear_text.clone()));
                KeyResponse::consumed().with_display(DisplayAction::Clear)
            }
            KeyEvent::AnnounceAll => {
                self.announce(Announcement::All(self.spoken_text()));
                KeyResponse::consumed()
            }
        }
    }

    fn handle_row(&mut self, row: char, now_ms: u64) -> KeyResponse {
        if !self.rows.contains(row) {
            return KeyResponse::not_consumed();
        }
        if let Some(d) = self.debouncer.as_mut() {
            if !d.accept(row, now_ms) {
                debug!(%row, "debounced");
                return KeyResponse::consumed();
            }
        }

        let press = self.recorder.record(row, now_ms);
        debug!(row = %press.row, delay_ms = press.delay_ms, "press recorded");
        self.redecode();
        self.announce(Announcement::Latest(self.spoken_text()));
        KeyResponse::consumed().with_display(DisplayAction::Show(self.decoded.clone()))
    }

    fn redecode(&mut self) {
        self.decoded = decode(self.recorder.presses(), &self.rows, &self.policy);
    }

    fn announce(&mut self, announcement: Announcement) {
        let text = announcement.to_text(&self.speech_settings);
        self.speech.request(text);
    }

    /// Best reading with unresolvable runs left out.
    fn spoken_text(&self) -> String {
        self.decoded
            .rendered()
            .filter(|r| !matches!(r, RenderedGroup::Unresolvable { .. }))
            .map(RenderedGroup::best)
            .collect()
    }

    pub fn decoded(&self) -> &DecodedOutput {
        &self.decoded
    }

    pub fn presses(&self) -> &[Press] {
        self.recorder.presses()
    }

    /// Drop the press history and debounce state. Pending speech is kept.
    pub fn reset(&mut self) {
        self.recorder.clear();
        if let Some(d) = self.debouncer.as_mut() {
            d.reset();
        }
        self.decoded = DecodedOutput::default();
    }

    /// Call every `speech_interval_ms`; hands pending speech to an idle player.
    pub fn speech_tick(&mut self, player: &mut dyn SpeechPlayer) -> Option<String> {
        self.speech.tick(player)
    }

    pub fn speech_interval_ms(&self) -> u64 {
        self.speech.interval_ms()
    }

    pub fn pending_speech(&self) -> Option<&str> {
        self.speech.pending()
    }
}
