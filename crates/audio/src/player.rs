//! Best-effort cue playback.

use crate::sink::ToneSink;
use crate::types::Cue;

/// Plays cues on an optional sink.
///
/// The player starts locked, like a host that only permits audio after a
/// user gesture; [`TonePlayer::unlock`] is called on the first interaction.
pub struct TonePlayer {
    sink: Option<Box<dyn ToneSink>>,
    unlocked: bool,
    muted: bool,
}

impl TonePlayer {
    pub fn new(sink: Box<dyn ToneSink>) -> Self {
        Self {
            sink: Some(sink),
            unlocked: false,
            muted: false,
        }
    }

    /// A player with no audio capability at all.
    pub fn unavailable() -> Self {
        Self {
            sink: None,
            unlocked: false,
            muted: false,
        }
    }

    pub fn unlock(&mut self) {
        if !self.unlocked {
            log::debug!("audio unlocked");
        }
        self.unlocked = true;
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_available(&self) -> bool {
        self.sink.is_some()
    }

    /// Fire and forget. Never fails.
    pub fn play(&mut self, cue: Cue) {
        if self.muted || !self.unlocked {
            return;
        }
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        if let Err(e) = sink.emit(cue) {
            log::debug!("dropping {} cue: {}", cue.as_str(), e);
        }
    }
}
