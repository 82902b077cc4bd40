//! Spoken feedback, throttled to one utterance at a time.
//!
//! Requests only fill a single pending slot (latest wins); a periodic tick
//! hands the slot to the player once it has gone quiet. Playback itself is
//! the caller's business.

use tenkey_core::settings::SpeechSettings;
use tracing::debug;

/// Playback backend, e.g. the platform speech synthesizer.
pub trait SpeechPlayer {
    fn is_speaking(&self) -> bool;
    fn speak(&mut self, text: &str);
}

/// What to say about the current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    /// The newest character, drawn out with the prolonged sound mark.
    Latest(String),
    /// The whole text.
    All(String),
    /// A fixed message, spoken as is.
    Notice(String),
}

impl Announcement {
    pub fn to_text(&self, speech: &SpeechSettings) -> String {
        match self {
            Announcement::Latest(text) => match text.chars().last() {
                Some(c) => format!("{c}{}", speech.prolong_mark),
                None => speech.empty_text.clone(),
            },
            Announcement::All(text) if text.is_empty() => speech.empty_text.clone(),
            Announcement::All(text) => text.clone(),
            Announcement::Notice(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpeechThrottle {
    interval_ms: u64,
    pending: Option<String>,
}

impl SpeechThrottle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            pending: None,
        }
    }

    /// Period at which the caller should invoke `tick`.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Replace any pending request with `text`.
    pub fn request(&mut self, text: impl Into<String>) {
        self.pending = Some(text.into());
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Dispatch the pending request if the player is idle.
    /// Returns the text handed to the player.
    pub fn tick(&mut self, player: &mut dyn SpeechPlayer) -> Option<String> {
        if self.pending.is_none() || player.is_speaking() {
            return None;
        }
        let text = self.pending.take()?;
        debug!(%text, "speaking");
        player.speak(&text);
        Some(text)
    }
}
