//! Benchmarks for the ecosystem tick

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use verdant_core::{Ecosystem, EcosystemConfig};

fn seeded(scale: u32) -> Ecosystem {
    let mut config = EcosystemConfig::with_seed(0xBEEF);
    config.world.size_chunks = 16;
    config.spawning.initial_trees *= scale;
    config.spawning.initial_rabbits *= scale;
    config.spawning.initial_deer *= scale;
    config.spawning.initial_wolves *= scale;
    match Ecosystem::with_initial_population(config) {
        Ok(eco) => eco,
        Err(e) => panic!("bench config invalid: {e}"),
    }
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecosystem_tick");

    for scale in [1u32, 4, 16] {
        let mut eco = seeded(scale);
        // Let chunks generate and behaviors settle
        for _ in 0..10 {
            eco.tick(1.0 / 60.0);
        }

        group.bench_with_input(BenchmarkId::new("scale", scale), &scale, |b, _| {
            b.iter(|| eco.tick(black_box(1.0 / 60.0)));
        });
    }

    group.finish();
}

fn bench_initial_seeding(c: &mut Criterion) {
    c.bench_function("seed_initial_population", |b| {
        b.iter_batched(
            || {
                let mut config = EcosystemConfig::with_seed(7);
                config.world.size_chunks = 16;
                match Ecosystem::new(config) {
                    Ok(eco) => eco,
                    Err(e) => panic!("bench config invalid: {e}"),
                }
            },
            |mut eco| {
                eco.seed_initial_population();
                eco
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_tick, bench_initial_seeding);
criterion_main!(benches);
