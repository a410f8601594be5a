//! Presentation shell (engine-facing).
//!
//! Composes the session, the best-score store, and the tone player, and
//! turns [`ShellAction`](tui_memory_types::ShellAction)s into game progress.
//! Rendering is left to the terminal layer, which reads a [`ShellSnapshot`].

pub mod shell;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use shell::{FaceView, Shell, ShellSnapshot, MATCH_FLASH_MS};
