use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_match::core::{apply_gravity, find_matches, BoardConfig, Grid, TurnController};
use tui_match::types::{CellPos, Gem, GemKind, Point};

fn checkerboard(width: i32, height: i32) -> Grid {
    let mut grid = Grid::new(width, height, 1.0, Point::default()).unwrap();
    for y in 0..height {
        for x in 0..width {
            let kind = if (x + y) % 2 == 0 {
                GemKind::Green
            } else {
                GemKind::Blue
            };
            grid.set(x, y, Some(Gem::new(kind))).unwrap();
        }
    }
    grid
}

fn bench_find_matches(c: &mut Criterion) {
    let grid = checkerboard(8, 8);
    c.bench_function("find_matches_8x8", |b| {
        b.iter(|| find_matches(black_box(&grid)))
    });
}

fn bench_apply_gravity(c: &mut Criterion) {
    c.bench_function("apply_gravity_8x8", |b| {
        b.iter(|| {
            let mut grid = checkerboard(8, 8);
            // Punch holes in every other column.
            for x in (0..8).step_by(2) {
                for y in 2..5 {
                    grid.set(x, y, None).unwrap();
                }
            }
            apply_gravity(&mut grid)
        })
    });
}

fn bench_full_turn(c: &mut Criterion) {
    c.bench_function("full_turn_8x8", |b| {
        b.iter(|| {
            let mut game = TurnController::new(BoardConfig {
                seed: 12345,
                ..Default::default()
            })
            .unwrap();
            game.start();
            game.select_cell(CellPos::new(3, 3));
            game.select_cell(CellPos::new(4, 3));
            game.resolve_to_idle()
        })
    });
}

criterion_group!(benches, bench_find_matches, bench_apply_gravity, bench_full_turn);
criterion_main!(benches);
