//! Benchmarks for Marching Cubes extraction and world generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use terrain_plugin::chunk::sample_grid;
use terrain_plugin::{
  extract, extract_unwelded, ChunkWorld, NullRenderer, PerlinDensity, SphereDensity, TerrainConfig,
};

/// Benchmark extraction of a sphere at the default chunk resolution.
fn bench_extract_sphere(c: &mut Criterion) {
  let sphere = SphereDensity::new(Vec3::splat(16.0), 12.0);
  let grid = sample_grid(Vec3::ZERO, &sphere, 33).unwrap();

  c.bench_function("marching_cubes::extract (33³ sphere)", |b| {
    b.iter(|| black_box(extract(black_box(&grid), 0.0).unwrap()))
  });

  c.bench_function("marching_cubes::extract_unwelded (33³ sphere)", |b| {
    b.iter(|| black_box(extract_unwelded(black_box(&grid), 0.0).unwrap()))
  });
}

/// Benchmark extraction of a Perlin chunk at several grid sizes.
fn bench_extract_perlin(c: &mut Criterion) {
  let noise = PerlinDensity::new().with_offset(Vec3::new(1234.0, 5678.0, 91.0));
  let mut group = c.benchmark_group("marching_cubes::extract perlin");

  for grid_size in [9usize, 17, 33] {
    let grid = sample_grid(Vec3::ZERO, &noise, grid_size).unwrap();
    group.bench_with_input(BenchmarkId::from_parameter(grid_size), &grid, |b, grid| {
      b.iter(|| black_box(extract(grid, 0.25).unwrap()))
    });
  }
  group.finish();
}

/// Compare parallel and sequential world generation.
fn bench_world_generation(c: &mut Criterion) {
  let config = TerrainConfig::default().with_world_size(2);
  let noise = PerlinDensity::new().with_offset(Vec3::new(1234.0, 5678.0, 91.0));
  let mut group = c.benchmark_group("world::generate (2³ chunks)");
  group.sample_size(10);

  group.bench_function("parallel", |b| {
    b.iter(|| black_box(ChunkWorld::generate(&config, &noise, &mut NullRenderer).unwrap()))
  });
  group.bench_function("sequential", |b| {
    b.iter(|| {
      black_box(ChunkWorld::generate_sequential(&config, &noise, &mut NullRenderer).unwrap())
    })
  });
  group.finish();
}

criterion_group!(
  benches,
  bench_extract_sphere,
  bench_extract_perlin,
  bench_world_generation
);
criterion_main!(benches);
