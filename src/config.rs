//! Runtime configuration.
//!
//! Every option can come from a flag or from its `MEMORY_*` environment
//! variable; flags win.

use std::path::PathBuf;

use clap::Parser;

use crate::audio::{ToneSink, TonePlayer};

/// Application directory name under the platform data dir.
const APP_DIR: &str = "tui-memory";

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "tui-memory", version, about = "Flip cards, match pairs, beat your best.")]
pub struct AppConfig {
    /// Seed for the first deal (random when omitted).
    #[arg(long, env = "MEMORY_SEED")]
    pub seed: Option<u32>,

    /// Directory holding the best-score record.
    #[arg(long, env = "MEMORY_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep the best score in memory only.
    #[arg(long, env = "MEMORY_EPHEMERAL")]
    pub ephemeral: bool,

    /// Start with sound muted.
    #[arg(long, env = "MEMORY_MUTE")]
    pub mute: bool,

    /// Write logs to this file (the terminal is owned by the game).
    #[arg(long, env = "MEMORY_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level filter (error, warn, info, debug, trace).
    #[arg(long, env = "MEMORY_LOG_LEVEL", default_value = "info")]
    pub log_level: log::LevelFilter,
}

impl AppConfig {
    /// Data directory, falling back to the platform's local data dir.
    ///
    /// `None` when no directory can be determined; the caller then keeps the
    /// best score in memory.
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|d| d.join(APP_DIR)))
    }

    pub fn seed_or_random(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Player on `sink`; `--mute` silences it without dropping the output.
    pub fn tone_player(&self, sink: impl ToneSink + 'static) -> TonePlayer {
        let mut tones = TonePlayer::new(Box::new(sink));
        tones.set_muted(self.mute);
        tones
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::TerminalBell;

    #[test]
    fn defaults() {
        let cfg = AppConfig::try_parse_from(["tui-memory"]).unwrap();
        assert_eq!(cfg.seed, None);
        assert!(!cfg.mute);
        assert!(!cfg.ephemeral);
        assert_eq!(cfg.log_level, log::LevelFilter::Info);
    }

    #[test]
    fn flags() {
        let cfg = AppConfig::try_parse_from([
            "tui-memory",
            "--seed",
            "42",
            "--data-dir",
            "/tmp/mm",
            "--mute",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.seed_or_random(), 42);
        assert_eq!(cfg.resolved_data_dir(), Some(PathBuf::from("/tmp/mm")));
        assert!(cfg.mute);
        assert_eq!(cfg.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn mute_keeps_the_output() {
        let cfg = AppConfig::try_parse_from(["tui-memory", "--mute"]).unwrap();
        let tones = cfg.tone_player(TerminalBell::new(Vec::new()));
        assert!(tones.is_muted());
        assert!(tones.is_available());

        let cfg = AppConfig::try_parse_from(["tui-memory"]).unwrap();
        assert!(!cfg.tone_player(TerminalBell::new(Vec::new())).is_muted());
    }

    #[test]
    fn rejects_bad_seed() {
        assert!(AppConfig::try_parse_from(["tui-memory", "--seed", "-1"]).is_err());
    }
}
