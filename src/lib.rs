//! TUI Memory (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof and carries the
//! binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_memory_audio as audio;
pub use tui_memory_core as core;
pub use tui_memory_engine as engine;
pub use tui_memory_input as input;
pub use tui_memory_store as store;
pub use tui_memory_term as term;
pub use tui_memory_types as types;

pub use config::AppConfig;
