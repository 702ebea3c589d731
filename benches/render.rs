use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_maze::core::GameState;
use tui_maze::engine::{RayCaster, RaycastConfig};
use tui_maze::term::{FrameBuffer, MazeView};
use tui_maze::types::DEFAULT_SKY_SEED;

fn bench_cast_column(c: &mut Criterion) {
    let game = GameState::new();
    let caster = RayCaster::new(RaycastConfig::default());

    c.bench_function("cast_center_column", |b| {
        b.iter(|| caster.cast_column(&game.map, &game.player, black_box(40), 80))
    });
}

fn bench_cast_column_fan(c: &mut Criterion) {
    let game = GameState::new();
    let caster = RayCaster::new(RaycastConfig::default());

    c.bench_function("cast_80_column_fan", |b| {
        b.iter(|| {
            for column in 0..80u16 {
                black_box(caster.cast_column(&game.map, &game.player, column, 80));
            }
        })
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let game = GameState::new();
    let view = MazeView::new(80, 24, RaycastConfig::default(), DEFAULT_SKY_SEED);
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_80x24_frame", |b| {
        b.iter(|| {
            view.render_into(black_box(&game), &mut fb);
        })
    });
}

criterion_group!(benches, bench_cast_column, bench_cast_column_fan, bench_full_frame);
criterion_main!(benches);
