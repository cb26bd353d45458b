//! Face normal computation from triangle mesh data.
//!
//! STL stores one normal per facet. It is derived from the winding:
//! `(b - a) × (c - a)`, normalized.

use glam::Vec3;

use crate::mesh::TriangleMesh;

/// Unit normal of triangle `t`.
///
/// Degenerate (zero-area) triangles get `Vec3::ZERO`, which STL readers
/// accept as "recompute from the vertices".
pub fn face_normal(mesh: &TriangleMesh, t: usize) -> Vec3 {
    let [a, b, c] = mesh.triangle_corners(t);
    (b - a).cross(c - a).normalize_or_zero()
}

/// Unit normals for every triangle, in face order.
pub fn compute_face_normals(mesh: &TriangleMesh) -> Vec<Vec3> {
    (0..mesh.triangle_count())
        .map(|t| face_normal(mesh, t))
        .collect()
}

/// Area of triangle `t`.
pub fn face_area(mesh: &TriangleMesh, t: usize) -> f32 {
    let [a, b, c] = mesh.triangle_corners(t);
    0.5 * (b - a).cross(c - a).length()
}
