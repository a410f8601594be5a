//! Terminal input module (shell-facing).
//!
//! Maps `crossterm` key and mouse events into
//! [`ShellAction`](crate::types::ShellAction)s. Pointer presses are reported
//! as raw terminal coordinates; hit-testing them against the card grid is
//! the terminal renderer's job since only it knows the layout.

pub mod map;

pub use tui_memory_types as types;

pub use map::{handle_key_event, pointer_press, should_quit};
