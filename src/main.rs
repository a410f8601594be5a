//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! for output. A fixed 16ms timestep drives the session timers.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_memory::audio::TerminalBell;
use tui_memory::engine::Shell;
use tui_memory::input::{handle_key_event, pointer_press, should_quit};
use tui_memory::store::{FileStore, KeyValueStore, MemoryStore};
use tui_memory::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_memory::types::TICK_MS;
use tui_memory::{logging, AppConfig};

fn main() -> Result<()> {
    let config = AppConfig::parse();
    logging::init(&config)?;

    let mut shell = build_shell(&config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut shell);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn build_shell(config: &AppConfig) -> Shell<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = match config.resolved_data_dir() {
        Some(dir) if !config.ephemeral => {
            log::info!("best score stored under {}", dir.display());
            Box::new(FileStore::new(dir))
        }
        _ => {
            log::info!("best score kept in memory for this run");
            Box::new(MemoryStore::new())
        }
    };

    let tones = config.tone_player(TerminalBell::stdout());

    let seed = config.seed_or_random();
    log::info!("starting with seed {}", seed);
    Shell::new(seed, store, tones)
}

fn run(term: &mut TerminalRenderer, shell: &mut Shell<Box<dyn KeyValueStore>>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let snap = shell.snapshot();
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        shell.handle(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some((x, y)) = pointer_press(mouse) {
                        if let Some(action) = view.pointer_action(&snap, viewport, x, y) {
                            shell.handle(action);
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            shell.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
