//! Headless terrain viewer.
//!
//! Generates a Perlin terrain world, then runs a fixed-timestep frame loop
//! with an orbiting camera that culls and draws chunks through an in-memory
//! renderer. Timings are logged; set `RUST_LOG=debug` for per-chunk output.

mod frame_loop;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use terrain_plugin::export::export_world;
use terrain_plugin::{
  Camera, ChunkWorld, FrameMetrics, HeadlessRenderer, MeshHandle, PerlinDensity, TerrainConfig,
};
use web_time::Instant;

use frame_loop::FixedTimestep;

/// Orbit speed of the demo camera, in radians per second.
const ORBIT_SPEED: f32 = 0.5;

/// Log a timing summary every this many frames.
const REPORT_INTERVAL: u64 = 60;

/// Chunked Marching Cubes terrain, generated and drawn headless.
#[derive(Parser, Debug)]
#[command(name = "terrain_demo")]
#[command(about = "Generates Marching Cubes terrain and runs a headless frame loop")]
struct Args {
  /// Path to settings TOML file (created with defaults if missing).
  #[arg(short, long, default_value = "terrain.toml")]
  config: PathBuf,

  /// Override chunks per world axis.
  #[arg(long)]
  world_size: Option<usize>,

  /// Override sample points per chunk axis.
  #[arg(long)]
  grid_size: Option<usize>,

  /// Override the surface threshold.
  #[arg(long)]
  isolevel: Option<f32>,

  /// Seed for the noise offset (random when omitted).
  #[arg(long)]
  seed: Option<u64>,

  /// Number of frames to run.
  #[arg(short, long, default_value_t = 120)]
  frames: u64,

  /// Generate chunks on the calling thread only.
  #[arg(long)]
  sequential: bool,

  /// Write the generated world to a Wavefront OBJ file.
  #[arg(long)]
  export: Option<PathBuf>,
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  let args = Args::parse();

  let config = load_config(&args)?;
  log::info!(
    "Generating {}³ chunks of {}³ samples (isolevel {})",
    config.world_size,
    config.grid_size,
    config.isolevel
  );

  let sampler = PerlinDensity::from_settings(&config.noise);
  log::debug!("Noise offset {:?}, seed {}", sampler.offset(), sampler.seed());

  let mut renderer = HeadlessRenderer::new();
  let (mut world, stats): (ChunkWorld<MeshHandle>, _) = if args.sequential {
    ChunkWorld::generate_sequential(&config, &sampler, &mut renderer)
  } else {
    ChunkWorld::generate(&config, &sampler, &mut renderer)
  }
  .context("Failed to generate terrain")?;

  log::info!(
    "Generated {} chunks ({} non-empty): {} vertices, {} triangles in {:.1} ms",
    stats.chunks,
    stats.non_empty_chunks,
    stats.vertices,
    stats.triangles,
    stats.total_us() as f64 / 1000.0
  );

  if let Some(path) = &args.export {
    export_world(&world, path)
      .with_context(|| format!("Failed to export world to {}", path.display()))?;
  }

  let metrics = run_frames(&world, &config, &mut renderer, args.frames);
  if let Some(summary) = metrics.summary() {
    log::info!(
      "Ran {} frames, {} updates, {} skipped: {}",
      metrics.frames,
      metrics.updates,
      metrics.skipped_frames,
      summary
    );
  }

  world.unload_all(&mut renderer);
  log::info!(
    "Unloaded world: {} meshes released, {} still resident",
    renderer.stats().releases,
    renderer.live_meshes()
  );

  Ok(())
}

/// Load settings and apply command line overrides.
fn load_config(args: &Args) -> Result<TerrainConfig> {
  let mut config = TerrainConfig::load_or_create(&args.config)
    .with_context(|| format!("Failed to load settings from {}", args.config.display()))?;

  if let Some(world_size) = args.world_size {
    config.world_size = world_size;
  }
  if let Some(grid_size) = args.grid_size {
    config.grid_size = grid_size;
  }
  if let Some(isolevel) = args.isolevel {
    config.isolevel = isolevel;
  }
  if args.seed.is_some() {
    config.noise.seed = args.seed;
    config.noise.offset = None;
  }

  config.validate().context("Invalid settings")?;
  Ok(config)
}

/// Fixed-timestep loop: orbit the camera in fixed updates, cull and draw
/// each rendered frame.
fn run_frames(
  world: &ChunkWorld<MeshHandle>,
  config: &TerrainConfig,
  renderer: &mut HeadlessRenderer,
  frames: u64,
) -> FrameMetrics {
  let fixed_delta_time = config.frame.fixed_delta_time();
  let frame_budget = Duration::from_secs_f32(fixed_delta_time);
  let mut clock = FixedTimestep::new(fixed_delta_time);
  let mut metrics = FrameMetrics::new();

  let center = world.center();
  let extent = (world.world_size() * world.chunk_size()) as f32;
  let mut camera = Camera::default();
  let mut angle = 0.0f32;
  camera.orbit(center, extent, extent * 0.25, angle);

  let mut last = Instant::now();
  for _ in 0..frames {
    let now = Instant::now();
    let frame_time = now.duration_since(last).as_secs_f32();
    last = now;

    let step = clock.advance(frame_time);
    for _ in 0..step.updates {
      let update_start = Instant::now();
      angle += ORBIT_SPEED * clock.fixed_delta_time();
      camera.orbit(center, extent, extent * 0.25, angle);
      metrics.record_update(update_start.elapsed().as_micros() as u64);
    }

    if step.render {
      renderer.begin_frame();
      let render_start = Instant::now();
      let visible = world.draw_visible(&camera, config.draw_distance, renderer);
      metrics.record_frame(
        render_start.elapsed().as_micros() as u64,
        visible,
        renderer.stats().frame_triangles,
      );
    } else {
      metrics.record_skipped_frame();
    }

    if metrics.frames > 0 && metrics.frames % REPORT_INTERVAL == 0 && step.render {
      log::debug!(
        "Frame {}: {} chunks, {} triangles visible from {:?}",
        metrics.frames,
        metrics.visible_chunks,
        metrics.visible_triangles,
        camera.position
      );
    }

    // Headless: pace frames to the update rate instead of vsync.
    if let Some(rest) = frame_budget.checked_sub(now.elapsed()) {
      std::thread::sleep(rest);
    }
  }

  metrics
}

#[cfg(test)]
mod tests {
  use glam::Vec3;

  use super::*;

  #[test]
  fn test_args_parse() {
    let args = Args::try_parse_from([
      "terrain_demo",
      "--world-size",
      "2",
      "--seed",
      "7",
      "--frames",
      "3",
      "--sequential",
      "--export",
      "out.obj",
    ])
    .unwrap();

    assert_eq!(args.world_size, Some(2));
    assert_eq!(args.seed, Some(7));
    assert_eq!(args.frames, 3);
    assert!(args.sequential);
    assert_eq!(args.export, Some(PathBuf::from("out.obj")));
    assert_eq!(args.config, PathBuf::from("terrain.toml"));
  }

  #[test]
  fn test_load_config_rejects_oversized_world() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("terrain.toml");
    let args = Args::try_parse_from([
      "terrain_demo",
      "--config",
      path.to_str().unwrap(),
      "--world-size",
      "3000000",
    ])
    .unwrap();

    let err = load_config(&args).unwrap_err();
    assert!(format!("{:#}", err).contains("world_size"));
  }

  #[test]
  fn test_run_frames_draws_world() {
    let config = TerrainConfig::default()
      .with_grid_size(9)
      .with_world_size(2)
      .with_draw_distance(1000.0);
    let sampler = PerlinDensity::new().with_offset(Vec3::splat(100.0));
    let mut renderer = HeadlessRenderer::new();
    let (world, _) = ChunkWorld::generate(&config, &sampler, &mut renderer).unwrap();

    let metrics = run_frames(&world, &config, &mut renderer, 3);
    assert_eq!(metrics.frames + metrics.skipped_frames, 3);
    assert_eq!(metrics.visible_chunks, 8);
  }
}
