use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lights_out::{BoardEngine, BoardRng, Coord};

fn bench_create(c: &mut Criterion) {
    c.bench_function("create 32x32", |b| {
        let mut rng = BoardRng::new(42);
        b.iter(|| BoardEngine::create(32, 32, 0.25, &mut rng))
    });
}

fn bench_toggle(c: &mut Criterion) {
    let grid = BoardEngine::create(32, 32, 0.25, &mut BoardRng::new(42));

    c.bench_function("toggle_around 32x32", |b| {
        b.iter(|| BoardEngine::toggle_around(black_box(&grid), black_box(Coord::new(16, 16))))
    });

    c.bench_function("is_solved 32x32", |b| {
        let lit = lights_out::Grid::filled(32, 32, true);
        b.iter(|| BoardEngine::is_solved(black_box(&lit)))
    });
}

criterion_group!(benches, bench_create, bench_toggle);
criterion_main!(benches);
