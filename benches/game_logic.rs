use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_memory::audio::TonePlayer;
use tui_memory::core::{generate, Session, SimpleRng};
use tui_memory::engine::Shell;
use tui_memory::store::MemoryStore;
use tui_memory::term::{FrameBuffer, GameView, Viewport};
use tui_memory::types::{ShellAction, CARD_COUNT, MAX_PAIR_COUNT, PAIR_COUNT, TICK_MS};

fn bench_deal(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("deal_standard_board", |b| {
        b.iter(|| generate(black_box(PAIR_COUNT), &mut rng))
    });

    c.bench_function("deal_largest_board", |b| {
        b.iter(|| generate(black_box(MAX_PAIR_COUNT), &mut rng))
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::standard(12345);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| session.tick(black_box(TICK_MS)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("perfect_game", |b| {
        b.iter(|| {
            let mut session = Session::standard(black_box(777));
            for index in 0..CARD_COUNT {
                let Some(card) = session.board().get(index) else {
                    continue;
                };
                let label = card.label;
                let Some(mate) = session
                    .board()
                    .cards()
                    .iter()
                    .skip(index + 1)
                    .find(|c| c.label == label)
                    .map(|c| c.index)
                else {
                    continue;
                };
                session.select(index);
                session.select(mate);
            }
            session.tick(1_000)
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let view = GameView::default();
    let mut shell = Shell::new(12345, MemoryStore::new(), TonePlayer::unavailable());
    shell.handle(ShellAction::Start);
    let snap = shell.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("render_game_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(benches, bench_deal, bench_tick, bench_full_game, bench_render);
criterion_main!(benches);
