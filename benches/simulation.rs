//! Benchmarks for world generation and simulation ticks
//!
//! Run with: cargo bench --bench simulation

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use voxelgrid::prelude::*;
use voxelgrid::world::WorldGenerator;

fn benchmark_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    group.throughput(Throughput::Elements(200 * 100));
    group.bench_function("default_200x100", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(WorldGenerator::new(seed).generate(200, 100))
        });
    });
    group.finish();
}

fn benchmark_ticks(c: &mut Criterion) {
    let mut world = World::generate(SimConfig::default(), 42);
    let walk = InputState {
        right: true,
        ..InputState::default()
    };

    c.bench_function("tick_walking", |b| {
        b.iter(|| black_box(world.tick(&walk, 1.0 / 60.0)));
    });
}

criterion_group!(benches, benchmark_generation, benchmark_ticks);
criterion_main!(benches);
