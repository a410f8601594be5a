//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the dealing rules, the turn/match state machine, and
//! the session timers. It has **zero dependencies** on UI, audio, storage, or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Testable**: Every transition returns the directives it wants carried out
//! - **Portable**: Can drive a terminal, a GUI, or a headless test harness
//!
//! # Module Structure
//!
//! - [`board`]: shuffled deal of paired labels and card statuses
//! - [`engine`]: the match state machine (`Idle` → `OneSelected` → `Evaluating` → `Won`)
//! - [`rng`]: seeded LCG with Fisher-Yates shuffling
//! - [`timers`]: cancellable delays keyed by session generation
//! - [`session`]: engine + timers + restart handling
//!
//! # Example
//!
//! ```
//! use tui_memory_core::Session;
//! use tui_memory_types::{Directive, SETTLE_DELAY_MS};
//!
//! let mut session = Session::standard(12345);
//! let first = session.board().get(0).unwrap().label;
//!
//! // Flip a card that does not match the first one.
//! let other = session
//!     .board()
//!     .cards()
//!     .iter()
//!     .find(|c| c.label != first)
//!     .unwrap()
//!     .index;
//!
//! session.select(0);
//! let out = session.select(other);
//! assert!(out.contains(&Directive::IncrementMoves(1)));
//!
//! // After the settle delay both cards are turned back.
//! let out = session.tick(SETTLE_DELAY_MS);
//! assert_eq!(out.as_slice(), &[Directive::Conceal(0), Directive::Conceal(other)]);
//! ```
//!
//! # Timing
//!
//! The shell calls [`Session::tick`](session::Session::tick) every frame with
//! the elapsed milliseconds; due timers fire from there.

pub mod board;
pub mod engine;
pub mod rng;
pub mod session;
pub mod timers;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::{generate, Board, Card};
pub use engine::{Directives, EngineEvent, MatchEngine, Phase};
pub use rng::SimpleRng;
pub use session::Session;
pub use timers::Timers;
