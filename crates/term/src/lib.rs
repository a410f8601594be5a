//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget/layout frameworks and renders into a simple framebuffer that is
//! diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw the menu, board, and win screens from a plain snapshot
//! - Share one layout between drawing and pointer hit-testing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_engine as engine;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, GridLayout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
