use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hexmap_core::noise::{diamond_square, spectral_synthesis};
use hexmap_core::{generate_terrain, Grid, GridConfig, TerrainConfig, Topology};

fn bench_spectral(c: &mut Criterion) {
    let mut group = c.benchmark_group("spectral_synthesis");
    // Direct inverse transform is O(N⁴) in the side length.
    group.sample_size(10);

    for size in [16usize, 32, 64] {
        group.bench_with_input(BenchmarkId::new("side", size), &size, |b, &size| {
            b.iter(|| spectral_synthesis(size, size, 2.0, 42))
        });
    }

    group.finish();
}

fn bench_diamond_square(c: &mut Criterion) {
    c.bench_function("diamond_square/129", |b| b.iter(|| diamond_square(129, 0.5, 42)));
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_terrain");

    for size in [20usize, 50, 100] {
        let grid = Grid::new(GridConfig::new(size, size, Topology::Region));
        let config = TerrainConfig::with_seed(42);
        group.bench_with_input(BenchmarkId::new("grid", size), &grid, |b, grid| {
            b.iter(|| generate_terrain(grid, &config))
        });
    }

    group.finish();
}

criterion_group!(synthesis_benches, bench_spectral, bench_diamond_square, bench_generate);
criterion_main!(synthesis_benches);
