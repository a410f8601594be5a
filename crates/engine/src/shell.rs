//! Presentation shell - screens, cursor, and directive interpretation
//!
//! The shell owns the session context (session, best-score store, tone
//! player) and is the only place directives are carried out. It keeps its own
//! view model of the cards, updated purely from directives, which the
//! terminal layer renders through [`ShellSnapshot`].

use tui_memory_audio::TonePlayer;
use tui_memory_core::{Directives, Session};
use tui_memory_store::{BestScore, KeyValueStore};

use crate::types::{CardLabel, Cue, Directive, Screen, ShellAction, GRID_COLS, PAIR_COUNT};

/// Duration of the highlight on a freshly matched pair.
pub const MATCH_FLASH_MS: u32 = 360;

/// What the player currently sees of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceView {
    pub label: CardLabel,
    pub shown: bool,
    pub matched: bool,
    /// Remaining match highlight time.
    pub flash_ms: u32,
}

/// Render-ready copy of the shell state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShellSnapshot {
    pub screen: Screen,
    pub faces: Vec<FaceView>,
    pub cols: u16,
    pub cursor: usize,
    pub moves: u32,
    pub best: Option<u32>,
    /// Final move count once the win has been announced.
    pub win_moves: Option<u32>,
    /// The announced win set a new best score.
    pub new_record: bool,
    pub muted: bool,
}

impl ShellSnapshot {
    pub fn rows(&self) -> u16 {
        let cols = self.cols.max(1) as usize;
        self.faces.len().div_ceil(cols) as u16
    }
}

pub struct Shell<S> {
    screen: Screen,
    session: Session,
    best: BestScore<S>,
    tones: TonePlayer,
    faces: Vec<FaceView>,
    cursor: usize,
    moves: u32,
    best_cached: Option<u32>,
    win_moves: Option<u32>,
    new_record: bool,
}

impl<S: KeyValueStore> Shell<S> {
    /// Build the shell on the menu screen.
    pub fn new(seed: u32, store: S, tones: TonePlayer) -> Self {
        Self::with_session(Session::new(seed, PAIR_COUNT), store, tones)
    }

    pub fn with_session(session: Session, store: S, tones: TonePlayer) -> Self {
        let best = BestScore::new(store);
        let best_cached = best.read();
        let mut shell = Self {
            screen: Screen::Menu,
            session,
            best,
            tones,
            faces: Vec::new(),
            cursor: 0,
            moves: 0,
            best_cached,
            win_moves: None,
            new_record: false,
        };
        shell.reset_faces();
        shell
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn best(&self) -> Option<u32> {
        self.best_cached
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn faces(&self) -> &[FaceView] {
        &self.faces
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            screen: self.screen,
            faces: self.faces.clone(),
            cols: GRID_COLS as u16,
            cursor: self.cursor,
            moves: self.moves,
            best: self.best_cached,
            win_moves: self.win_moves,
            new_record: self.new_record,
            muted: self.tones.is_muted(),
        }
    }

    /// Whether anything on screen is still changing without input.
    pub fn is_animating(&self) -> bool {
        !self.session.timers().is_empty() || self.faces.iter().any(|f| f.flash_ms > 0)
    }

    pub fn handle(&mut self, action: ShellAction) {
        match self.screen {
            Screen::Menu => match action {
                ShellAction::Start
                | ShellAction::Flip
                | ShellAction::Restart
                | ShellAction::Select(_) => {
                    // First user gesture; hosts only permit audio from here on.
                    self.tones.unlock();
                    self.tones.play(Cue::Click);
                    self.begin_game();
                }
                _ => {}
            },
            Screen::Game => match action {
                ShellAction::CursorLeft => self.move_cursor(-1, 0),
                ShellAction::CursorRight => self.move_cursor(1, 0),
                ShellAction::CursorUp => self.move_cursor(0, -1),
                ShellAction::CursorDown => self.move_cursor(0, 1),
                ShellAction::Flip | ShellAction::Start => self.select(self.cursor),
                ShellAction::Select(index) => {
                    if index < self.faces.len() {
                        self.cursor = index;
                        self.select(index);
                    }
                }
                ShellAction::Restart => {
                    self.tones.play(Cue::Click);
                    self.begin_game();
                }
                ShellAction::Menu => self.to_menu(),
            },
            Screen::Won => match action {
                ShellAction::Start | ShellAction::Restart | ShellAction::Flip => {
                    self.tones.play(Cue::Click);
                    self.begin_game();
                }
                ShellAction::Menu => self.to_menu(),
                _ => {}
            },
        }
    }

    /// Advance time: fade highlights and fire due session timers.
    pub fn tick(&mut self, elapsed_ms: u32) {
        for face in &mut self.faces {
            face.flash_ms = face.flash_ms.saturating_sub(elapsed_ms);
        }
        if self.screen == Screen::Menu {
            return;
        }
        let out = self.session.tick(elapsed_ms);
        self.apply(out);
    }

    fn select(&mut self, index: usize) {
        let out = self.session.select(index);
        self.apply(out);
    }

    fn begin_game(&mut self) {
        self.session.restart();
        self.reset_faces();
        self.cursor = 0;
        self.moves = 0;
        self.win_moves = None;
        self.new_record = false;
        self.best_cached = self.best.read();
        self.screen = Screen::Game;
    }

    fn to_menu(&mut self) {
        // Invalidate anything still in flight before leaving the board.
        self.session.restart();
        self.reset_faces();
        self.moves = 0;
        self.screen = Screen::Menu;
    }

    fn reset_faces(&mut self) {
        self.faces = self
            .session
            .board()
            .cards()
            .iter()
            .map(|card| FaceView {
                label: card.label,
                shown: false,
                matched: false,
                flash_ms: 0,
            })
            .collect();
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let len = self.faces.len();
        if len == 0 {
            return;
        }
        let cols = GRID_COLS as i32;
        let rows = len.div_ceil(GRID_COLS as usize) as i32;
        let x = (self.cursor as i32 % cols + dx).rem_euclid(cols);
        let y = (self.cursor as i32 / cols + dy).rem_euclid(rows);
        let next = (y * cols + x) as usize;
        if next < len {
            self.cursor = next;
        }
    }

    fn apply(&mut self, directives: Directives) {
        for directive in directives {
            match directive {
                Directive::PlayCue(cue) => self.tones.play(cue),
                Directive::Reveal(i) => {
                    if let Some(face) = self.faces.get_mut(i) {
                        face.shown = true;
                    }
                }
                Directive::Conceal(i) => {
                    if let Some(face) = self.faces.get_mut(i) {
                        face.shown = false;
                    }
                }
                Directive::MarkMatched(a, b) => {
                    for i in [a, b] {
                        if let Some(face) = self.faces.get_mut(i) {
                            face.shown = true;
                            face.matched = true;
                            face.flash_ms = MATCH_FLASH_MS;
                        }
                    }
                }
                Directive::IncrementMoves(moves) => self.moves = moves,
                Directive::PersistBest(moves) => {
                    if self.best.write_if_better(moves) {
                        self.best_cached = Some(moves);
                        self.new_record = true;
                    }
                }
                Directive::AnnounceWin(moves) => {
                    log::info!("game won in {} moves", moves);
                    self.win_moves = Some(moves);
                    self.screen = Screen::Won;
                }
                Directive::Schedule(kind) => {
                    log::warn!("unexpected schedule directive reached the shell: {:?}", kind);
                }
            }
        }
    }
}
