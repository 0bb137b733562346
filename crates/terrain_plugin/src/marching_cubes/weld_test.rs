use super::*;

#[test]
fn test_edge_key_is_order_independent() {
  assert_eq!(edge_key(3, 36), edge_key(36, 3));
  assert_ne!(edge_key(3, 36), edge_key(3, 37));
}

#[test]
fn test_edge_key_packing() {
  let key = edge_key(1089, 5);
  assert_eq!(key, (5u64 << 32) | 1089);
  assert_eq!(unpack_edge_key(key), (5, 1089));
}

#[test]
fn test_edge_key_is_injective() {
  assert_ne!(edge_key(0, 1), edge_key(1, 1));
  assert_ne!(edge_key(0, 1 << 20), edge_key(1 << 20, 1 << 21));
}

#[test]
fn test_welded_vertices_are_shared() {
  let mut welder = VertexWelder::new(true);
  let a = welder.vertex(edge_key(0, 1), Vec3::X);
  let b = welder.vertex(edge_key(1, 2), Vec3::Y);
  let a_again = welder.vertex(edge_key(1, 0), Vec3::X);

  assert_eq!(a, a_again);
  assert_ne!(a, b);
  assert_eq!(welder.unique_edges(), 2);

  let mesh = welder.finish();
  assert_eq!(mesh.vertices.len(), 2);
}

#[test]
fn test_first_position_is_kept() {
  let mut welder = VertexWelder::new(true);
  welder.vertex(7, Vec3::X);
  welder.vertex(7, Vec3::Y);

  let mesh = welder.finish();
  assert_eq!(mesh.vertices, vec![Vec3::X]);
}

#[test]
fn test_unwelded_duplicates() {
  let mut welder = VertexWelder::new(false);
  let a = welder.vertex(7, Vec3::X);
  let b = welder.vertex(7, Vec3::X);

  assert_ne!(a, b);
  assert_eq!(welder.finish().vertices.len(), 2);
}

#[test]
fn test_triangle_and_bounds() {
  let mut welder = VertexWelder::with_capacity(true, 4);
  let i0 = welder.vertex(1, Vec3::new(-1.0, 0.0, 0.0));
  let i1 = welder.vertex(2, Vec3::new(0.0, 2.0, 0.0));
  let i2 = welder.vertex(3, Vec3::new(0.0, 0.0, 3.0));
  welder.triangle([i0, i1, i2]);

  let mesh = welder.finish();
  assert_eq!(mesh.indices, vec![0, 1, 2]);
  assert_eq!(mesh.bounds.min, Vec3::new(-1.0, 0.0, 0.0));
  assert_eq!(mesh.bounds.max, Vec3::new(0.0, 2.0, 3.0));
}
