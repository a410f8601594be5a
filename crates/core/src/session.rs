//! Session module - one playthrough from deal to win or restart
//!
//! Ties the match engine to its timers. The shell only ever talks to a
//! `Session`: it forwards selections, feeds elapsed time, and receives
//! directives with every `Schedule` already turned into an armed timer.

use crate::board::Board;
use crate::engine::{Directives, EngineEvent, MatchEngine};
use crate::rng::SimpleRng;
use crate::timers::Timers;
use crate::types::{Directive, PAIR_COUNT};

#[derive(Debug, Clone)]
pub struct Session {
    engine: MatchEngine,
    timers: Timers,
    rng: SimpleRng,
    pair_count: u8,
    /// Monotonic restart counter; keys every armed timer.
    generation: u32,
    /// RNG state the current board was dealt from.
    deal_seed: u32,
}

impl Session {
    /// Deal the first board of `pair_count` pairs from `seed`.
    pub fn new(seed: u32, pair_count: u8) -> Self {
        let mut rng = SimpleRng::new(seed);
        let deal_seed = rng.state();
        let board = Board::deal(pair_count, &mut rng);

        Self {
            engine: MatchEngine::new(board),
            timers: Timers::new(),
            rng,
            pair_count,
            generation: 0,
            deal_seed,
        }
    }

    /// Standard 8-pair session.
    pub fn standard(seed: u32) -> Self {
        Self::new(seed, PAIR_COUNT)
    }

    /// Start over with a freshly shuffled board.
    ///
    /// Pending timers of the previous game are cancelled and, since the
    /// generation moves on, could not fire into the new game anyway.
    pub fn restart(&mut self) {
        self.timers.cancel_all();
        self.generation = self.generation.wrapping_add(1);
        self.deal_seed = self.rng.state();
        self.engine = MatchEngine::new(Board::deal(self.pair_count, &mut self.rng));
        log::info!(
            "session restarted (generation {}, deal seed {})",
            self.generation,
            self.deal_seed
        );
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn deal_seed(&self) -> u32 {
        self.deal_seed
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Forward a card selection.
    pub fn select(&mut self, index: usize) -> Directives {
        let raw = self.engine.apply(EngineEvent::Select(index));
        self.dispatch(raw)
    }

    /// Advance the session clock, firing any due timers.
    pub fn tick(&mut self, elapsed_ms: u32) -> Directives {
        let mut out = Directives::new();
        for kind in self.timers.advance(elapsed_ms, self.generation) {
            let raw = self.engine.apply(EngineEvent::TimerElapsed(kind));
            for directive in self.dispatch(raw) {
                if out.try_push(directive).is_err() {
                    log::warn!("directive overflow on tick, dropping {:?}", directive);
                }
            }
        }
        out
    }

    /// Arm requested timers and pass everything else through in order.
    fn dispatch(&mut self, raw: Directives) -> Directives {
        let mut out = Directives::new();
        for directive in raw {
            match directive {
                Directive::Schedule(kind) => self.timers.arm(kind, self.generation),
                other => out.push(other),
            }
        }
        out
    }
}
