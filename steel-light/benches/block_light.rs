#![allow(missing_docs)]
//! Benchmarks for section block light.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use steel_light::{BlockLightEngine, BlockPalette};
use steel_registry::blocks::vanilla::{self, AIR, GLOWSTONE, STONE, TORCH};

/// A cave-like section: mostly stone with an air pocket and scattered torches.
fn cave_section(seed: usize) -> BlockPalette {
    BlockPalette::from_fn(|x, y, z| {
        let hash = (x * 73 + y * 151 + z * 199 + seed * 31) % 97;
        match hash {
            0 => TORCH,
            1 => GLOWSTONE,
            _ if (4..12).contains(&y) => AIR,
            2..=40 => STONE,
            _ => AIR,
        }
    })
}

fn bench_single_section(c: &mut Criterion) {
    steel_utils::logger::init("warn");
    let registry = vanilla::registry();
    let engine = BlockLightEngine::default();

    let mut group = c.benchmark_group("single_section");

    let empty = BlockPalette::default();
    group.bench_function("empty", |b| {
        b.iter(|| black_box(engine.compute(black_box(&empty), &registry)));
    });

    let mut lone_torch = BlockPalette::default();
    lone_torch.set(8, 8, 8, TORCH);
    group.bench_function("lone_torch", |b| {
        b.iter(|| black_box(engine.compute(black_box(&lone_torch), &registry)));
    });

    let cave = cave_section(0);
    group.bench_function("cave", |b| {
        b.iter(|| black_box(engine.compute(black_box(&cave), &registry)));
    });

    group.finish();
}

fn bench_batches(c: &mut Criterion) {
    let registry = vanilla::registry();
    let engine = BlockLightEngine::default();

    let mut group = c.benchmark_group("section_batch");
    for count in [24usize, 384] {
        let sections: Vec<BlockPalette> = (0..count).map(cave_section).collect();
        group.bench_with_input(BenchmarkId::new("parallel", count), &sections, |b, sections| {
            b.iter(|| black_box(engine.compute_sections(black_box(sections), &registry)));
        });
        group.bench_with_input(BenchmarkId::new("sequential", count), &sections, |b, sections| {
            b.iter(|| {
                for section in sections {
                    black_box(engine.compute(black_box(section), &registry)).ok();
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_section, bench_batches);
criterion_main!(benches);
