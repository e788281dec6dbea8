use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use mineclear_core::*;
use std::hint::black_box;

fn generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (rows, cols, mines) in [(10, 10, 10), (100, 100, 199), (500, 500, 999)] {
        let config = GameConfig::new(rows, cols, mines).unwrap();
        let mut generator = RandomMineGenerator::from_seed(0);
        group.bench_function(format!("{rows}x{cols}/{mines}"), |b| {
            b.iter(|| generator.generate(black_box(&config)).unwrap())
        });
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for side in [10, 100, 500] {
        let config = GameConfig::new(side, side, 1).unwrap();
        let game = Game::new(config, FixedMineGenerator::new([(side, side)])).unwrap();
        group.bench_function(format!("{side}x{side}"), |b| {
            b.iter_batched(
                || game.clone(),
                |mut game| game.reveal(black_box((1, 1))).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, generate, flood_fill);
criterion_main!(benches);
