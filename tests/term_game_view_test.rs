use tui_memory::audio::TonePlayer;
use tui_memory::engine::Shell;
use tui_memory::store::{BestScore, FileStore, MemoryStore};
use tui_memory::term::{GameView, Viewport};
use tui_memory::types::{Screen, ShellAction, CARD_COUNT, TICK_MS, WIN_DELAY_MS};

fn partner<S: tui_memory::store::KeyValueStore>(shell: &Shell<S>, index: usize) -> usize {
    let label = shell.session().board().get(index).unwrap().label;
    shell
        .session()
        .board()
        .cards()
        .iter()
        .find(|c| c.index != index && c.label == label)
        .unwrap()
        .index
}

fn play_perfect_game<S: tui_memory::store::KeyValueStore>(shell: &mut Shell<S>) {
    for index in 0..CARD_COUNT {
        if shell.faces()[index].matched {
            continue;
        }
        let mate = partner(shell, index);
        shell.handle(ShellAction::Select(index));
        shell.handle(ShellAction::Select(mate));
    }
    for _ in 0..(WIN_DELAY_MS / TICK_MS + 2) {
        shell.tick(TICK_MS);
    }
}

#[test]
fn menu_shows_title_and_no_best_yet() {
    let shell = Shell::new(1, MemoryStore::new(), TonePlayer::unavailable());
    let fb = GameView::default().render(&shell.snapshot(), Viewport::new(80, 24));
    let text = fb.text();

    assert!(text.contains("MEMORY MATCH"));
    assert!(text.contains("Not played yet"));
}

#[test]
fn game_screen_hides_every_card() {
    let mut shell = Shell::new(2, MemoryStore::new(), TonePlayer::unavailable());
    shell.handle(ShellAction::Start);

    let view = GameView::default();
    let snap = shell.snapshot();
    let fb = view.render(&snap, Viewport::new(80, 24));
    let text = fb.text();

    assert!(text.contains("Moves: 0"));
    assert!(text.contains("Best: -"));
    assert!(text.contains("[r] Restart"));
    assert_eq!(text.matches('?').count(), CARD_COUNT);
}

#[test]
fn clicking_a_card_reveals_its_label() {
    let mut shell = Shell::new(3, MemoryStore::new(), TonePlayer::unavailable());
    shell.handle(ShellAction::Start);

    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let snap = shell.snapshot();
    let layout = view.layout(&snap, viewport);
    let (x, y) = layout.card_origin(5);

    let hit = view.hit_test(&snap, viewport, x + 1, y + 1);
    assert_eq!(hit, Some(5));
    shell.handle(ShellAction::Select(5));

    let glyph = shell.faces()[5].label.as_char();
    let fb = view.render(&shell.snapshot(), viewport);
    assert!(fb.text().contains(glyph));
    assert_eq!(fb.text().matches('?').count(), CARD_COUNT - 1);
}

#[test]
fn hit_test_is_inert_off_the_board() {
    let shell = Shell::new(4, MemoryStore::new(), TonePlayer::unavailable());
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let snap = shell.snapshot();
    let (x, y) = view.layout(&snap, viewport).card_origin(0);

    // Still on the menu.
    assert_eq!(view.hit_test(&snap, viewport, x + 1, y + 1), None);
}

#[test]
fn win_panel_reports_moves_and_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::new(5, FileStore::new(dir.path()), TonePlayer::unavailable());
    shell.handle(ShellAction::Start);
    play_perfect_game(&mut shell);

    assert_eq!(shell.screen(), Screen::Won);
    let fb = GameView::default().render(&shell.snapshot(), Viewport::new(80, 24));
    let text = fb.text();
    assert!(text.contains("You won in 8 moves!"));
    assert!(text.contains("New best!"));
    assert!(text.contains("[Enter] Play again"));

    // The best score outlives the shell.
    drop(shell);
    assert_eq!(BestScore::new(FileStore::new(dir.path())).read(), Some(8));

    let shell = Shell::new(6, FileStore::new(dir.path()), TonePlayer::unavailable());
    let text = GameView::default()
        .render(&shell.snapshot(), Viewport::new(80, 24))
        .text();
    assert!(text.contains("Best: 8 moves"));
}

#[test]
fn tiny_viewport_does_not_panic() {
    let mut shell = Shell::new(7, MemoryStore::new(), TonePlayer::unavailable());
    let view = GameView::default();
    for (w, h) in [(0, 0), (1, 1), (10, 3), (20, 40)] {
        view.render(&shell.snapshot(), Viewport::new(w, h));
    }
    shell.handle(ShellAction::Start);
    for (w, h) in [(0, 0), (1, 1), (10, 3), (20, 40)] {
        view.render(&shell.snapshot(), Viewport::new(w, h));
    }
}

#[test]
fn clicking_the_restart_hint_deals_a_new_board() {
    let mut shell = Shell::new(8, MemoryStore::new(), TonePlayer::unavailable());
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);

    // Anywhere on the menu starts a game.
    assert_eq!(
        view.pointer_action(&shell.snapshot(), viewport, 0, 0),
        Some(ShellAction::Start)
    );
    shell.handle(ShellAction::Start);

    let snap = shell.snapshot();
    let layout = view.layout(&snap, viewport);
    let (x, y) = layout.card_origin(2);
    let action = view.pointer_action(&snap, viewport, x + 1, y + 1);
    assert_eq!(action, Some(ShellAction::Select(2)));
    shell.handle(ShellAction::Select(2));
    assert!(shell.faces()[2].shown);

    // The hint is drawn where the layout says it is.
    let fb = view.render(&shell.snapshot(), viewport);
    assert!(fb.row_text(layout.footer_y()).contains("[r] Restart"));

    let hint = (layout.origin_x + 2, layout.footer_y());
    let action = view.pointer_action(&shell.snapshot(), viewport, hint.0, hint.1);
    assert_eq!(action, Some(ShellAction::Restart));
    shell.handle(ShellAction::Restart);
    assert_eq!(shell.screen(), Screen::Game);
    assert!(shell.faces().iter().all(|f| !f.shown));

    // Empty space on the board does nothing.
    assert_eq!(view.pointer_action(&shell.snapshot(), viewport, 0, 0), None);
}
