//! Tone player - fire-and-forget audible feedback.
//!
//! Three cues (click, match, win). A terminal cannot voice pitch, so every
//! cue is a single bell on the terminal. Playback is best effort: a locked, muted, or broken output is a silent
//! no-op and never reaches the caller.

pub mod error;
pub mod player;
pub mod sink;

pub use tui_memory_types as types;

pub use error::AudioError;
pub use player::TonePlayer;
pub use sink::{TerminalBell, ToneSink};
