use super::*;

const P1: Vec3 = Vec3::new(0.0, 0.0, 0.0);
const P2: Vec3 = Vec3::new(2.0, 0.0, 0.0);

#[test]
fn test_midpoint_crossing() {
  let v = edge_vertex(0.5, P1, P2, 0.25, 0.75);
  assert!((v - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6, "got {:?}", v);
}

#[test]
fn test_crossing_is_linear() {
  let v = edge_vertex(0.25, P1, Vec3::new(0.0, 4.0, 0.0), 0.0, 1.0);
  assert!((v.y - 1.0).abs() < 1e-6, "got {:?}", v);
}

#[test]
fn test_snaps_to_first_corner() {
  assert_eq!(edge_vertex(0.5, P1, P2, 0.5, 0.9), P1);
}

#[test]
fn test_snaps_to_second_corner() {
  assert_eq!(edge_vertex(0.5, P1, P2, 0.1, 0.5), P2);
}

#[test]
fn test_degenerate_edge_returns_first_corner() {
  let v = edge_vertex(0.5, P1, P2, 0.3, 0.3);
  assert_eq!(v, P1);
  assert!(v.is_finite());
}

#[test]
fn test_first_corner_wins_when_both_on_isolevel() {
  assert_eq!(edge_vertex(0.5, P1, P2, 0.5, 0.5), P1);
}

#[test]
fn test_unclamped_outside_edge() {
  // Misclassified edge data extrapolates instead of clamping
  let v = edge_vertex(2.0, P1, P2, 0.0, 1.0);
  assert!((v.x - 4.0).abs() < 1e-5, "got {:?}", v);
}
