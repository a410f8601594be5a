//! Match engine - the turn/match state machine
//!
//! The engine owns the board and the session counters. Every transition
//! returns the ordered [`Directive`]s the shell must carry out; the engine
//! itself never renders, plays audio, persists, or keeps time. Delays are
//! requested with [`Directive::Schedule`] and come back as
//! [`EngineEvent::TimerElapsed`].
//!
//! Invalid input (out-of-range index, a card that is not face-down, input
//! while a pair is being evaluated or after the win) is absorbed as a silent
//! no-op: the state is unchanged and no directive is emitted.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{CardStatus, Cue, Directive, TimerKind};

/// Upper bound on directives emitted by a single transition.
pub const MAX_DIRECTIVES: usize = 8;

/// Ordered, allocation-free directive list.
pub type Directives = ArrayVec<Directive, MAX_DIRECTIVES>;

/// Turn phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No card turned.
    Idle,
    /// Exactly one face-up unmatched card.
    OneSelected,
    /// A mismatched pair is showing; waiting for the settle delay.
    Evaluating,
    /// Every pair matched. Terminal.
    Won,
}

/// Inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    Select(usize),
    TimerElapsed(TimerKind),
}

#[derive(Debug, Clone)]
pub struct MatchEngine {
    board: Board,
    selection: ArrayVec<usize, 2>,
    phase: Phase,
    moves: u32,
    matches: u32,
    announced: bool,
}

impl MatchEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            selection: ArrayVec::new(),
            phase: Phase::Idle,
            moves: 0,
            matches: 0,
            announced: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matches(&self) -> u32 {
        self.matches
    }

    /// Face-up, not-yet-matched cards of the current turn (never more than 2).
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    fn pair_count(&self) -> u32 {
        self.board.pair_count() as u32
    }

    /// Single transition entry point.
    pub fn apply(&mut self, event: EngineEvent) -> Directives {
        match event {
            EngineEvent::Select(index) => self.select(index),
            EngineEvent::TimerElapsed(TimerKind::Settle) => self.resolve_settle(),
            EngineEvent::TimerElapsed(TimerKind::WinAnnounce) => self.announce_win(),
        }
    }

    /// Turn a card face-up.
    pub fn select(&mut self, index: usize) -> Directives {
        let mut out = Directives::new();

        if matches!(self.phase, Phase::Evaluating | Phase::Won) || self.selection.is_full() {
            return out;
        }
        let Some(card) = self.board.get(index) else {
            return out;
        };
        if card.status != CardStatus::FaceDown {
            return out;
        }

        self.board.set_status(index, CardStatus::FaceUp);
        self.selection.push(index);
        out.push(Directive::PlayCue(Cue::Click));
        out.push(Directive::Reveal(index));

        if self.selection.len() < 2 {
            self.phase = Phase::OneSelected;
            return out;
        }

        self.moves = self.moves.saturating_add(1);
        out.push(Directive::IncrementMoves(self.moves));

        let (a, b) = (self.selection[0], self.selection[1]);
        let same = match (self.board.get(a), self.board.get(b)) {
            (Some(ca), Some(cb)) => ca.label == cb.label,
            _ => false,
        };

        if same {
            self.board.set_status(a, CardStatus::Matched);
            self.board.set_status(b, CardStatus::Matched);
            self.selection.clear();
            self.matches += 1;
            out.push(Directive::PlayCue(Cue::Match));
            out.push(Directive::MarkMatched(a, b));

            if self.matches >= self.pair_count() {
                self.phase = Phase::Won;
                out.push(Directive::Schedule(TimerKind::WinAnnounce));
                log::debug!("all {} pairs matched in {} moves", self.matches, self.moves);
            } else {
                self.phase = Phase::Idle;
            }
        } else {
            self.phase = Phase::Evaluating;
            out.push(Directive::Schedule(TimerKind::Settle));
        }

        out
    }

    /// Settle delay elapsed: turn a mismatched pair back face-down.
    pub fn resolve_settle(&mut self) -> Directives {
        let mut out = Directives::new();
        if self.phase != Phase::Evaluating {
            return out;
        }

        for &index in &self.selection {
            self.board.set_status(index, CardStatus::FaceDown);
            out.push(Directive::Conceal(index));
        }
        self.selection.clear();
        self.phase = Phase::Idle;
        out
    }

    /// Win delay elapsed: announce exactly once.
    pub fn announce_win(&mut self) -> Directives {
        let mut out = Directives::new();
        if self.phase != Phase::Won || self.announced {
            return out;
        }

        self.announced = true;
        out.push(Directive::PlayCue(Cue::Win));
        out.push(Directive::PersistBest(self.moves));
        out.push(Directive::AnnounceWin(self.moves));
        out
    }
}
