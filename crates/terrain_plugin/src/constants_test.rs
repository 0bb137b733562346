use super::*;

#[test]
fn test_chunk_size_is_grid_size_minus_one() {
  assert_eq!(chunk_size_for(DEFAULT_GRID_SIZE), 32);
  assert_eq!(chunk_size_for(MIN_GRID_SIZE), 1);
  assert_eq!(chunk_size_for(0), 0);
}

#[test]
fn test_coord_to_index_roundtrip() {
  let dim = 5;
  for z in 0..dim {
    for y in 0..dim {
      for x in 0..dim {
        let idx = coord_to_index(x, y, z, dim);
        assert_eq!(
          index_to_coord(idx, dim),
          (x, y, z),
          "Roundtrip failed for ({}, {}, {})",
          x,
          y,
          z
        );
      }
    }
  }
}

#[test]
fn test_x_is_minor_axis() {
  let dim = 33;
  assert_eq!(coord_to_index(1, 0, 0, dim), 1);
  assert_eq!(coord_to_index(0, 1, 0, dim), dim);
  assert_eq!(coord_to_index(0, 0, 1, dim), dim * dim);
}

#[test]
fn test_corner_offsets_cover_unit_cube_once() {
  let mut seen = [false; 8];
  for corner in 0..8 {
    let [x, y, z] = corner_coord([0, 0, 0], corner);
    assert!(x <= 1 && y <= 1 && z <= 1);
    let bits = x | (y << 1) | (z << 2);
    assert!(!seen[bits], "Corner {} duplicates another corner", corner);
    seen[bits] = true;
  }
  assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_bottom_face_then_top_face() {
  for corner in 0..4 {
    assert_eq!(CUBE_POINTS_Y[corner], 0);
    assert_eq!(CUBE_POINTS_Y[corner + 4], 1);
    // Top corner sits directly above its bottom counterpart
    assert_eq!(CUBE_POINTS_X[corner], CUBE_POINTS_X[corner + 4]);
    assert_eq!(CUBE_POINTS_Z[corner], CUBE_POINTS_Z[corner + 4]);
  }
}

#[test]
fn test_corner_coord_offsets_from_cell() {
  assert_eq!(corner_coord([3, 4, 5], 0), [3, 4, 5]);
  assert_eq!(corner_coord([3, 4, 5], 6), [4, 5, 6]);
  assert_eq!(corner_coord([3, 4, 5], 3), [3, 4, 6]);
}
