use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hexmap_core::{generate_terrain, Grid, GridConfig, HexTile, TerrainConfig, Topology};
use hexmap_render::{encode_jpeg, ColorScheme, ElevationColorMap, HexRenderer, RenderConfig, RenderLayer};

fn terrain(size: usize) -> Vec<HexTile> {
    let grid = Grid::new(GridConfig::new(size, size, Topology::Region));
    generate_terrain(&grid, &TerrainConfig::with_seed(42)).expect("default terrain config is valid")
}

fn config(layers: Vec<RenderLayer>, scheme: ColorScheme) -> RenderConfig {
    RenderConfig { width: 400, height: 400, hex_size: 8.0, layers, color_scheme: scheme, quality: 85 }
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [10usize, 20, 50] {
        let tiles = terrain(size);
        let mut renderer = HexRenderer::new(config(vec![RenderLayer::Elevation], ColorScheme::Elevation))
            .expect("valid render config");
        group.bench_with_input(BenchmarkId::new("grid", size), &tiles, |b, tiles| {
            b.iter(|| {
                renderer.render(tiles);
            })
        });
    }

    let tiles = terrain(20);
    let mut layered = HexRenderer::new(config(
        vec![RenderLayer::Elevation, RenderLayer::Water, RenderLayer::DebugCoords],
        ColorScheme::Elevation,
    ))
    .expect("valid render config");
    group.bench_function("layers/20", |b| {
        b.iter(|| {
            layered.render(&tiles);
        })
    });

    group.finish();
}

fn bench_schemes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheme");
    let tiles = terrain(20);

    for scheme in ColorScheme::ALL {
        let mut renderer =
            HexRenderer::new(config(vec![RenderLayer::Elevation], scheme)).expect("valid render config");
        group.bench_with_input(BenchmarkId::from_parameter(scheme), &tiles, |b, tiles| {
            b.iter(|| {
                renderer.render(tiles);
            })
        });
    }

    group.finish();
}

fn bench_color_lookup(c: &mut Criterion) {
    let map = ElevationColorMap::terrain();
    c.bench_function("color_at", |b| {
        let mut e = -5000.0;
        b.iter(|| {
            e = if e > 5000.0 { -5000.0 } else { e + 1.0 };
            map.color_at(e)
        })
    });
}

fn bench_jpeg(c: &mut Criterion) {
    let tiles = terrain(15);
    let mut renderer =
        HexRenderer::new(config(vec![RenderLayer::Elevation], ColorScheme::Elevation)).expect("valid render config");
    let img = renderer.render(&tiles).clone();
    c.bench_function("encode_jpeg/400x400", |b| b.iter(|| encode_jpeg(&img, 85)));
}

criterion_group!(render_benches, bench_render, bench_schemes, bench_color_lookup, bench_jpeg);
criterion_main!(render_benches);
