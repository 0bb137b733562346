use glam::Vec3;

use super::*;

fn flat_grid(dim: usize, density: f32) -> Grid {
  Grid::from_fn(dim, |x, y, z| {
    Sample::new(Vec3::new(x as f32, y as f32, z as f32), density)
  })
  .unwrap()
}

// Grid tests
#[test]
fn test_grid_from_fn_layout() {
  let grid = Grid::from_fn(3, |x, y, z| {
    Sample::new(Vec3::new(x as f32, y as f32, z as f32), (x + 10 * y + 100 * z) as f32)
  })
  .unwrap();

  assert_eq!(grid.dim(), 3);
  assert_eq!(grid.samples().len(), 27);
  assert_eq!(grid.get(2, 1, 0).density, 12.0);
  assert_eq!(grid.get(0, 2, 1).density, 120.0);
  assert_eq!(grid.get(1, 1, 1).position, Vec3::ONE);
}

#[test]
fn test_grid_rejects_single_point() {
  let err = Grid::from_fn(1, |_, _, _| Sample::new(Vec3::ZERO, 0.0)).unwrap_err();
  assert!(matches!(err, TerrainError::InvalidGrid(_)));

  let err = Grid::new(0, Vec::new()).unwrap_err();
  assert!(matches!(err, TerrainError::InvalidGrid(_)));
}

#[test]
fn test_grid_rejects_wrong_sample_count() {
  let samples = vec![Sample::new(Vec3::ZERO, 0.0); 7];
  let err = Grid::new(2, samples).unwrap_err();
  assert!(matches!(err, TerrainError::InvalidGrid(_)));
}

#[test]
fn test_grid_from_nested_rejects_ragged() {
  let s = Sample::new(Vec3::ZERO, 0.0);
  let mut points = vec![vec![vec![s; 2]; 2]; 2];
  points[1][0].pop();

  let err = Grid::from_nested(points).unwrap_err();
  assert!(matches!(err, TerrainError::InvalidGrid(_)));
}

#[test]
fn test_grid_from_nested_rejects_non_cubic() {
  let s = Sample::new(Vec3::ZERO, 0.0);
  let points = vec![vec![vec![s; 3]; 3]; 2];

  let err = Grid::from_nested(points).unwrap_err();
  assert!(matches!(err, TerrainError::InvalidGrid(_)));
}

#[test]
fn test_grid_from_nested_indexes_xyz() {
  let points: Vec<Vec<Vec<Sample>>> = (0..2)
    .map(|x| {
      (0..2)
        .map(|y| {
          (0..2)
            .map(|z| Sample::new(Vec3::ZERO, (x * 4 + y * 2 + z) as f32))
            .collect()
        })
        .collect()
    })
    .collect();

  let grid = Grid::from_nested(points).unwrap();
  assert_eq!(grid.get(1, 0, 0).density, 4.0);
  assert_eq!(grid.get(0, 1, 0).density, 2.0);
  assert_eq!(grid.get(0, 0, 1).density, 1.0);
}

#[test]
fn test_cell_count() {
  assert_eq!(flat_grid(2, 0.0).cell_count(), 1);
  assert_eq!(flat_grid(4, 0.0).cell_count(), 27);
}

// AABB tests
#[test]
fn test_aabb_encapsulate() {
  let mut aabb = Aabb::empty();
  assert!(!aabb.is_valid());

  aabb.encapsulate(Vec3::new(1.0, 2.0, 3.0));
  aabb.encapsulate(Vec3::new(-1.0, -2.0, -3.0));

  assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -3.0));
  assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
  assert!(aabb.is_valid());
}

#[test]
fn test_aabb_sphere_overlap() {
  let aabb = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(16.0));

  // Center inside the box
  assert!(aabb.intersects_sphere(Vec3::ZERO, 0.1));
  // Closest face 4 units away
  assert!(aabb.intersects_sphere(Vec3::new(20.0, 0.0, 0.0), 5.0));
  assert!(!aabb.intersects_sphere(Vec3::new(20.0, 0.0, 0.0), 3.0));
  // Touching counts
  assert!(aabb.intersects_sphere(Vec3::new(20.0, 0.0, 0.0), 4.0));
  // Corner distance is sqrt(3) * 4 ≈ 6.93
  assert!(!aabb.intersects_sphere(Vec3::splat(20.0), 6.5));
  assert!(aabb.intersects_sphere(Vec3::splat(20.0), 7.0));
}

#[test]
fn test_aabb_contains_and_translate() {
  let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(10.0)).translated(Vec3::splat(5.0));
  assert!(aabb.contains_point(Vec3::splat(5.0)));
  assert!(aabb.contains_point(Vec3::splat(15.0)));
  assert!(!aabb.contains_point(Vec3::splat(4.0)));
}

// Mesh tests
#[test]
fn test_mesh_output_clear() {
  let mut output = MeshOutput::new();
  output.vertices.push(Vec3::ZERO);
  output.indices.push(0);
  output.bounds.encapsulate(Vec3::ONE);
  output.clear();

  assert!(output.is_empty());
  assert_eq!(output.triangle_count(), 0);
  assert!(!output.bounds.is_valid());
}

#[test]
fn test_mesh_output_triangles() {
  let output = MeshOutput {
    vertices: vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z],
    indices: vec![0, 1, 2, 0, 2, 3],
    bounds: Aabb::new(Vec3::ZERO, Vec3::ONE),
  };

  let tris: Vec<_> = output.triangles().collect();
  assert_eq!(output.triangle_count(), 2);
  assert_eq!(tris[1], [Vec3::ZERO, Vec3::Y, Vec3::Z]);
}
