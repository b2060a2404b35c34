use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_life::core::{step, Grid, History, SimpleRng};

fn random_grid(w: usize, h: usize) -> Grid {
    let mut grid = Grid::new(w, h).unwrap();
    grid.randomize(&mut SimpleRng::new(12345));
    grid
}

fn bench_step(c: &mut Criterion) {
    let grid = random_grid(100, 100);
    c.bench_function("step_100x100", |b| b.iter(|| step(black_box(&grid))));

    let big = random_grid(500, 500);
    c.bench_function("step_500x500", |b| b.iter(|| step(black_box(&big))));
}

fn bench_history(c: &mut Criterion) {
    let grid = random_grid(100, 100);
    c.bench_function("history_record_undo_100x100", |b| {
        b.iter(|| {
            let mut history = History::new();
            history.record(black_box(&grid));
            history.undo(grid.clone()).unwrap()
        })
    });
}

criterion_group!(benches, bench_step, bench_history);
criterion_main!(benches);
