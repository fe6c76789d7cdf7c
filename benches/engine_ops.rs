use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use minegrid::*;

fn bench_generate(c: &mut Criterion) {
    let config = BoardConfig::hard();

    c.bench_function("generate_hard_board", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(BernoulliGenerator::new(seed).generate(black_box(config)));
        })
    });
}

fn bench_clue_derivation(c: &mut Criterion) {
    let layout = BernoulliGenerator::new(7).generate(BoardConfig::hard());

    c.bench_function("derive_clue_layout", |b| {
        b.iter(|| {
            black_box(ClueLayout::from_mine_layout(black_box(&layout)));
        })
    });
}

fn bench_flood_fill(c: &mut Criterion) {
    // mine-free board, so one reveal floods all 4096 cells
    let layout = MineLayout::from_mine_coords((64, 64), &[]).unwrap();

    c.bench_function("flood_fill_64x64_open_board", |b| {
        b.iter(|| {
            let mut game = Game::new(layout.clone());
            black_box(game.reveal(black_box((32, 32))).unwrap());
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_clue_derivation,
    bench_flood_fill
);
criterion_main!(benches);
