//! Audio outputs.

use std::io::{self, Write};

use crate::error::AudioError;
use crate::types::Cue;

/// Something that can sound a cue.
pub trait ToneSink {
    fn emit(&mut self, cue: Cue) -> Result<(), AudioError>;
}

/// Rings the terminal bell once per cue.
pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ToneSink for TerminalBell<W> {
    fn emit(&mut self, _cue: Cue) -> Result<(), AudioError> {
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}
