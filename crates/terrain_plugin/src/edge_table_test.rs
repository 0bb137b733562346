use super::*;

#[test]
fn test_edge_table_homogeneous() {
  // All corners on the same side = no crossings
  assert_eq!(EDGE_TABLE[0], 0, "All below should have no edges");
  assert_eq!(EDGE_TABLE[255], 0, "All above should have no edges");
}

#[test]
fn test_triangulation_homogeneous_is_empty() {
  assert!(triangulation(0).is_empty());
  assert!(triangulation(255).is_empty());
}

#[test]
fn test_edge_table_matches_derived() {
  for i in 0..256 {
    assert_eq!(
      EDGE_TABLE[i], DERIVED_EDGE_TABLE[i],
      "Edge table mismatch for cube index {:#010b}",
      i
    );
  }
}

#[test]
fn test_edge_table_single_corner() {
  // A single corner above the isolevel crosses exactly 3 edges
  for corner in 0..8 {
    let mask = 1u8 << corner;
    let edge_count = EDGE_TABLE[mask as usize].count_ones();
    assert_eq!(
      edge_count, 3,
      "Corner {} should have 3 edges, got {}",
      corner, edge_count
    );
    assert_eq!(triangulation(mask).len(), 3);
  }
}

#[test]
fn test_edge_table_symmetry() {
  // Complementary cube indices cross the same edges
  for i in 0..128 {
    assert_eq!(
      EDGE_TABLE[i],
      EDGE_TABLE[255 - i],
      "Edge masks should be symmetric for {} and {}",
      i,
      255 - i
    );
  }
}

#[test]
fn test_triangle_rows_are_whole_triangles() {
  for i in 0..=255u8 {
    let row = triangulation(i);
    assert_eq!(row.len() % 3, 0, "Row {} is not a list of triangles", i);
    assert!(row.len() <= 15, "Row {} has more than 5 triangles", i);
  }
}

#[test]
fn test_triangle_rows_only_use_crossed_edges() {
  for i in 0..=255u8 {
    let edge_mask = EDGE_TABLE[i as usize];
    for &edge in triangulation(i) {
      assert!((0..12).contains(&edge));
      assert!(
        edge_mask & (1 << edge) != 0,
        "Row {} references edge {} which is not crossed",
        i,
        edge
      );
    }
  }
}

#[test]
fn test_terminator_padding_is_contiguous() {
  for (i, row) in TRI_TABLE.iter().enumerate() {
    let len = triangulation(i as u8).len();
    assert!(
      row[len..].iter().all(|&e| e == -1),
      "Row {} has entries after its terminator",
      i
    );
  }
}

#[test]
fn test_standard_case_rows() {
  assert_eq!(triangulation(1), &[0i8, 8, 3]);
  assert_eq!(triangulation(2), &[0i8, 1, 9]);
  assert_eq!(triangulation(3), &[1i8, 8, 3, 9, 8, 1]);
  assert_eq!(triangulation(254), &[0i8, 3, 8]);
}

#[test]
fn test_edge_corners_validity() {
  for edge in &EDGE_CORNERS {
    assert!(edge[0] < 8);
    assert!(edge[1] < 8);
    assert_ne!(edge[0], edge[1]);
  }
}
