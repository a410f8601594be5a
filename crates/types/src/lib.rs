//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (match engine, shell, terminal rendering).
//!
//! # Board Dimensions
//!
//! - **Pairs**: 8 distinct labels, each dealt twice
//! - **Cards**: 16, laid out as a 4x4 grid (indexed row-major 0-15)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SETTLE_DELAY_MS` | 700 | Pause before a mismatched pair is turned back |
//! | `WIN_DELAY_MS` | 450 | Pause between the final match and the win announcement |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{CardLabel, TimerKind, CARD_COUNT, PAIR_COUNT, SETTLE_DELAY_MS};
//!
//! let label = CardLabel::new(3).unwrap();
//! assert_eq!(label.as_char(), '3');
//!
//! assert_eq!(TimerKind::Settle.delay_ms(), SETTLE_DELAY_MS);
//!
//! assert_eq!(CARD_COUNT, 2 * PAIR_COUNT as usize);
//! ```

/// Number of distinct pair-labels on a board.
pub const PAIR_COUNT: u8 = 8;

/// Number of cards on a board (each label is dealt twice).
pub const CARD_COUNT: usize = 2 * PAIR_COUNT as usize;

/// Grid columns.
pub const GRID_COLS: u8 = 4;

/// Grid rows.
pub const GRID_ROWS: u8 = 4;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Time both faces of a mismatched pair stay visible before being turned back.
pub const SETTLE_DELAY_MS: u32 = 700;

/// Time between the final match and the win announcement.
pub const WIN_DELAY_MS: u32 = 450;

/// Largest pair count a [`CardLabel`] can name (digits 1-9, then A-Z).
pub const MAX_PAIR_COUNT: u8 = 35;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_dimensions_are_consistent() {
        assert_eq!(CARD_COUNT, (GRID_COLS as usize) * (GRID_ROWS as usize));
        assert_eq!(CARD_COUNT, 16);
    }

    #[test]
    fn timing_defaults() {
        assert_eq!(SETTLE_DELAY_MS, 700);
        assert_eq!(WIN_DELAY_MS, 450);
    }

    #[test]
    fn label_chars() {
        assert_eq!(CardLabel::new(1).unwrap().as_char(), '1');
        assert_eq!(CardLabel::new(9).unwrap().as_char(), '9');
        assert_eq!(CardLabel::new(10).unwrap().as_char(), 'A');
        assert_eq!(CardLabel::new(35).unwrap().as_char(), 'Z');
        assert!(CardLabel::new(0).is_none());
        assert!(CardLabel::new(36).is_none());
    }
}

/// The symbol two matching cards share.
///
/// Labels are 1-based so they read naturally on a card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardLabel(u8);

impl CardLabel {
    /// Create a label, returning `None` outside `1..=MAX_PAIR_COUNT`.
    pub fn new(value: u8) -> Option<Self> {
        if (1..=MAX_PAIR_COUNT).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Face glyph: `1`-`9`, then `A`-`Z`.
    pub fn as_char(self) -> char {
        match self.0 {
            n @ 1..=9 => (b'0' + n) as char,
            n => (b'A' + (n - 10)) as char,
        }
    }
}

/// Visible state of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardStatus {
    #[default]
    FaceDown,
    FaceUp,
    /// Permanently paired; never reconsidered.
    Matched,
}

/// Audible feedback cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Click,
    Match,
    Win,
}

impl Cue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Click => "click",
            Cue::Match => "match",
            Cue::Win => "win",
        }
    }
}

/// Delayed follow-ups the match engine asks the session to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Turn a mismatched pair back face-down.
    Settle,
    /// Announce the win after the final match.
    WinAnnounce,
}

impl TimerKind {
    pub fn delay_ms(&self) -> u32 {
        match self {
            TimerKind::Settle => SETTLE_DELAY_MS,
            TimerKind::WinAnnounce => WIN_DELAY_MS,
        }
    }
}

/// Instructions emitted by the match engine, in the order they must be carried out.
///
/// The engine never renders, plays audio, or persists anything itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    PlayCue(Cue),
    /// Show the face of the card at this index.
    Reveal(usize),
    /// Turn the card at this index back face-down.
    Conceal(usize),
    MarkMatched(usize, usize),
    /// Moves counter changed; carries the new total.
    IncrementMoves(u32),
    /// Offer a finished session's move count to the best-score store.
    PersistBest(u32),
    AnnounceWin(u32),
    /// Arm a delayed follow-up. Consumed by the session, never seen by the shell.
    Schedule(TimerKind),
}

/// User intents understood by the presentation shell.
///
/// These come from keyboard mapping; pointer input is hit-tested into
/// [`ShellAction::Select`] by the terminal layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Flip the card under the cursor.
    Flip,
    /// Flip the card at an explicit index.
    Select(usize),
    /// Start a game from the menu or win screen.
    Start,
    /// Deal a fresh board immediately.
    Restart,
    /// Return to the menu.
    Menu,
}

/// Which screen the shell is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Menu,
    Game,
    Won,
}
