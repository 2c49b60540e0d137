use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sweeper_core::*;

const TIERS: [(&str, Coord2, CellCount); 3] = [
    ("beginner", (9, 9), 10),
    ("intermediate", (16, 16), 40),
    ("expert", (16, 30), 99),
];

fn generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, size, mines) in TIERS {
        let config = GameConfig::new(size, mines).unwrap();
        let safe = (size.0 / 2, size.1 / 2);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                RandomMinefieldGenerator::new(seed, safe).generate(black_box(config))
            })
        });
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    let layout = MineLayout::from_mine_coords((255, 255), &[(254, 254)]).unwrap();
    c.bench_function("flood_fill/open_255x255", |b| {
        b.iter(|| {
            let mut engine = PlayEngine::from_layout(layout.clone()).unwrap();
            engine.reveal(black_box((0, 0)))
        })
    });
}

criterion_group!(benches, generate, flood_fill);
criterion_main!(benches);
