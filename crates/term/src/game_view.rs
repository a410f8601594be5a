//! GameView: maps a `ShellSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. The same layout is
//! used for drawing and for hit-testing pointer presses, so a click always
//! lands on the card that was drawn under it.

use crate::engine::{FaceView, ShellSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Screen, ShellAction};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Rows above the grid (HUD + spacer).
const HUD_ROWS: u16 = 2;
/// Rows below the grid (spacer + key hints).
const FOOTER_ROWS: u16 = 2;

const RESTART_LABEL: &str = "[r] Restart";

const BACKGROUND: Rgb = Rgb::hex(0x0b0b12);
const CARD_BACK: Rgb = Rgb::hex(0x22223b);

/// Face colours, cycled by label.
const FACE_COLORS: [Rgb; 8] = [
    Rgb::hex(0xf94144),
    Rgb::hex(0xf3722c),
    Rgb::hex(0xf8961e),
    Rgb::hex(0xf9c74f),
    Rgb::hex(0x90be6d),
    Rgb::hex(0x43aa8b),
    Rgb::hex(0x577590),
    Rgb::hex(0x277da1),
];

/// Where the card grid sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub card_w: u16,
    pub card_h: u16,
    pub gap_x: u16,
    pub gap_y: u16,
    pub cols: u16,
    pub rows: u16,
}

impl GridLayout {
    pub fn width(&self) -> u16 {
        self.cols * self.card_w + self.cols.saturating_sub(1) * self.gap_x
    }

    pub fn height(&self) -> u16 {
        self.rows * self.card_h + self.rows.saturating_sub(1) * self.gap_y
    }

    /// Top-left corner of card `index`.
    pub fn card_origin(&self, index: usize) -> (u16, u16) {
        let cols = self.cols.max(1) as usize;
        let col = (index % cols) as u16;
        let row = (index / cols) as u16;
        (
            self.origin_x + col * (self.card_w + self.gap_x),
            self.origin_y + row * (self.card_h + self.gap_y),
        )
    }

    /// Card under terminal cell `(x, y)`; gaps hit nothing.
    pub fn hit_test(&self, x: u16, y: u16, card_count: usize) -> Option<usize> {
        if x < self.origin_x || y < self.origin_y {
            return None;
        }
        let rx = x - self.origin_x;
        let ry = y - self.origin_y;
        let col = rx / (self.card_w + self.gap_x);
        let row = ry / (self.card_h + self.gap_y);
        if col >= self.cols || row >= self.rows {
            return None;
        }
        if rx % (self.card_w + self.gap_x) >= self.card_w
            || ry % (self.card_h + self.gap_y) >= self.card_h
        {
            return None;
        }
        let index = (row as usize) * (self.cols as usize) + col as usize;
        (index < card_count).then_some(index)
    }

    /// Row of the key hints under the grid.
    pub fn footer_y(&self) -> u16 {
        self.origin_y + self.height() + 1
    }

    /// Whether `(x, y)` lands on the restart hint.
    pub fn hits_restart(&self, x: u16, y: u16) -> bool {
        let len = RESTART_LABEL.chars().count() as u16;
        y == self.footer_y() && x >= self.origin_x && x < self.origin_x + len
    }
}

/// A lightweight terminal renderer for the memory game.
pub struct GameView {
    /// Card width in terminal columns.
    card_w: u16,
    /// Card height in terminal rows.
    card_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps cards roughly the 140x200 portrait of a playing card
        // given the usual 1:2 terminal glyph aspect.
        Self {
            card_w: 7,
            card_h: 3,
        }
    }
}

impl GameView {

    pub fn layout(&self, snap: &ShellSnapshot, viewport: Viewport) -> GridLayout {
        let mut grid = GridLayout {
            origin_x: 0,
            origin_y: 0,
            card_w: self.card_w,
            card_h: self.card_h,
            gap_x: 1,
            gap_y: 1,
            cols: snap.cols.max(1),
            rows: snap.rows(),
        };
        let total_h = HUD_ROWS + grid.height() + FOOTER_ROWS;
        grid.origin_x = viewport.width.saturating_sub(grid.width()) / 2;
        grid.origin_y = HUD_ROWS + viewport.height.saturating_sub(total_h) / 2;
        grid
    }

    /// Card under a pointer press, if the game screen is showing.
    pub fn hit_test(&self, snap: &ShellSnapshot, viewport: Viewport, x: u16, y: u16) -> Option<usize> {
        if snap.screen != Screen::Game {
            return None;
        }
        self.layout(snap, viewport).hit_test(x, y, snap.faces.len())
    }

    /// What a left click at `(x, y)` asks the shell to do.
    ///
    /// On the board a card selects itself and the restart hint restarts;
    /// anywhere on the menu or win screen starts a game.
    pub fn pointer_action(
        &self,
        snap: &ShellSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<ShellAction> {
        if snap.screen != Screen::Game {
            return Some(ShellAction::Start);
        }
        let grid = self.layout(snap, viewport);
        if let Some(index) = grid.hit_test(x, y, snap.faces.len()) {
            return Some(ShellAction::Select(index));
        }
        grid.hits_restart(x, y).then_some(ShellAction::Restart)
    }

    /// Render into an existing framebuffer (reused across frames).
    pub fn render_into(&self, snap: &ShellSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        match snap.screen {
            Screen::Menu => self.draw_menu(fb, snap, viewport),
            Screen::Game => self.draw_game(fb, snap, viewport),
            Screen::Won => {
                self.draw_game(fb, snap, viewport);
                self.draw_win_panel(fb, snap, viewport);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &ShellSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, snap: &ShellSnapshot, viewport: Viewport) {
        let text = CellStyle::default();
        let title = text.bold();
        let muted = CellStyle::new(Rgb::new(136, 136, 136), BACKGROUND);
        let accent = CellStyle::new(Rgb::hex(0x00aaff), BACKGROUND).bold();

        let w = viewport.width;
        let top = viewport.height.saturating_sub(9) / 2;

        fb.put_str_centered(0, w, top, "MEMORY MATCH", title);
        fb.put_str_centered(0, w, top + 2, "Match the cards in as few moves as possible", text.dim());
        fb.put_str_centered(0, w, top + 4, "[ Enter ] Start game", accent);

        match snap.best {
            Some(best) => {
                let line = format!("Best: {} moves", best);
                fb.put_str_centered(0, w, top + 6, &line, text);
            }
            None => fb.put_str_centered(0, w, top + 6, "Not played yet", text),
        }

        fb.put_str_centered(
            0,
            w,
            top + 8,
            "Tip: arrows/hjkl move, space flips, or click a card. q quits.",
            muted,
        );
    }

    fn draw_game(&self, fb: &mut FrameBuffer, snap: &ShellSnapshot, viewport: Viewport) {
        let grid = self.layout(snap, viewport);
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        // HUD: moves on the left, best on the right, aligned with the grid.
        let hud_y = grid.origin_y.saturating_sub(HUD_ROWS);
        let x = fb.put_str(grid.origin_x, hud_y, "Moves: ", label);
        fb.put_u32(x, hud_y, snap.moves, value);

        let best_w = 6 + snap.best.map(digit_count).unwrap_or(1);
        let best_x = (grid.origin_x + grid.width()).saturating_sub(best_w);
        let x = fb.put_str(best_x, hud_y, "Best: ", label);
        match snap.best {
            Some(best) => {
                fb.put_u32(x, hud_y, best, value);
            }
            None => {
                fb.put_str(x, hud_y, "-", value);
            }
        }

        for (i, face) in snap.faces.iter().enumerate() {
            let (cx, cy) = grid.card_origin(i);
            let under_cursor = snap.screen == Screen::Game && i == snap.cursor;
            self.draw_card(fb, cx, cy, face, under_cursor);
        }

        let footer_y = grid.footer_y();
        let hint = CellStyle::new(Rgb::new(136, 136, 136), BACKGROUND);
        let restart = CellStyle::new(Rgb::hex(0x00aaff), BACKGROUND);
        let x = fb.put_str(grid.origin_x, footer_y, RESTART_LABEL, restart);
        fb.put_str(x + 2, footer_y, "[esc] Menu", hint);
        if snap.muted {
            fb.put_str(
                (grid.origin_x + grid.width()).saturating_sub(5),
                footer_y,
                "muted",
                hint.dim(),
            );
        }
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, face: &FaceView, under_cursor: bool) {
        let (fill, glyph) = if face.shown || face.matched {
            let color = FACE_COLORS[(face.label.get() as usize - 1) % FACE_COLORS.len()];
            (color, face.label.as_char())
        } else {
            (CARD_BACK, '?')
        };

        let mut body = CellStyle::new(Rgb::new(255, 255, 255), fill);
        if face.matched && face.flash_ms == 0 {
            body = body.dim();
        }
        fb.fill_rect(x, y, self.card_w, self.card_h, ' ', body);

        let border = if under_cursor {
            CellStyle::new(Rgb::new(255, 230, 80), fill).bold()
        } else if face.flash_ms > 0 {
            CellStyle::new(Rgb::new(255, 255, 255), fill).bold()
        } else {
            CellStyle::new(Rgb::new(90, 90, 110), fill)
        };
        fb.draw_box(x, y, self.card_w, self.card_h, border);

        fb.put_char(x + self.card_w / 2, y + self.card_h / 2, glyph, body.bold());
    }

    fn draw_win_panel(&self, fb: &mut FrameBuffer, snap: &ShellSnapshot, viewport: Viewport) {
        let grid = self.layout(snap, viewport);
        let panel_w = grid.width().max(30).min(viewport.width);
        let panel_h = 7;
        let panel_x = viewport.width.saturating_sub(panel_w) / 2;
        let panel_y = grid.origin_y + grid.height().saturating_sub(panel_h) / 2;

        let panel_bg = Rgb::hex(0x101018);
        let body = CellStyle::new(Rgb::new(255, 255, 255), panel_bg);
        fb.fill_rect(panel_x, panel_y, panel_w, panel_h, ' ', body);
        fb.draw_box(panel_x, panel_y, panel_w, panel_h, CellStyle::new(Rgb::new(70, 70, 80), panel_bg));

        let moves = snap.win_moves.unwrap_or(snap.moves);
        let line = format!("You won in {} moves!", moves);
        fb.put_str_centered(panel_x, panel_w, panel_y + 2, &line, body.bold());
        if snap.new_record {
            let gold = CellStyle::new(Rgb::hex(0xf9c74f), panel_bg).bold();
            fb.put_str_centered(panel_x, panel_w, panel_y + 3, "New best!", gold);
        }
        let accent = CellStyle::new(Rgb::hex(0x00aaff), panel_bg);
        fb.put_str_centered(panel_x, panel_w, panel_y + 5, "[Enter] Play again", accent);
    }
}

fn digit_count(v: u32) -> u16 {
    let mut n = v;
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_counts() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(4_000_000_000), 10);
    }

    #[test]
    fn hit_test_skips_gaps() {
        let grid = GridLayout {
            origin_x: 10,
            origin_y: 5,
            card_w: 7,
            card_h: 3,
            gap_x: 1,
            gap_y: 1,
            cols: 4,
            rows: 4,
        };

        assert_eq!(grid.hit_test(10, 5, 16), Some(0));
        assert_eq!(grid.hit_test(16, 7, 16), Some(0));
        assert_eq!(grid.hit_test(17, 5, 16), None);
        assert_eq!(grid.hit_test(18, 5, 16), Some(1));
        assert_eq!(grid.hit_test(10, 8, 16), None);
        assert_eq!(grid.hit_test(10, 9, 16), Some(4));
        assert_eq!(grid.hit_test(9, 5, 16), None);
        assert_eq!(grid.hit_test(50, 5, 16), None);
        assert_eq!(grid.card_origin(5), (18, 9));
    }

    #[test]
    fn hit_test_respects_card_count() {
        let grid = GridLayout {
            origin_x: 0,
            origin_y: 0,
            card_w: 3,
            card_h: 3,
            gap_x: 0,
            gap_y: 0,
            cols: 4,
            rows: 2,
        };
        assert_eq!(grid.hit_test(0, 3, 5), Some(4));
        assert_eq!(grid.hit_test(3, 3, 5), None);
    }

    #[test]
    fn restart_hint_has_its_own_hit_area() {
        let grid = GridLayout {
            origin_x: 10,
            origin_y: 5,
            card_w: 7,
            card_h: 3,
            gap_x: 1,
            gap_y: 1,
            cols: 4,
            rows: 4,
        };
        // Grid spans rows 5..=19; hints sit one spacer row below.
        assert_eq!(grid.footer_y(), 21);
        assert!(grid.hits_restart(10, 21));
        assert!(grid.hits_restart(20, 21));
        assert!(!grid.hits_restart(21, 21));
        assert!(!grid.hits_restart(9, 21));
        assert!(!grid.hits_restart(10, 20));
    }
}
