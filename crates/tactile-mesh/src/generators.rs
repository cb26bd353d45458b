//! Procedural solids appended to a [`TriangleMesh`].
//!
//! Every generator winds its triangles counter-clockwise when seen from
//! outside the solid, so face normals point outward.

use glam::Vec3;
use tactile_types::constants::{PRISM_FACES, PRISM_VERTICES};

use crate::mesh::TriangleMesh;

/// Prism faces relative to the first corner vertex.
///
/// Corners 0–3 are the bottom rectangle `(x,y)`, `(x+w,y)`, `(x+w,y+d)`,
/// `(x,y+d)`; corners 4–7 are the same points on the top face.
const PRISM_TRIANGLES: [[u32; 3]; PRISM_FACES] = [
    // Bottom (-Z)
    [0, 2, 1],
    [0, 3, 2],
    // Top (+Z)
    [4, 5, 6],
    [4, 6, 7],
    // Front (-Y)
    [0, 1, 5],
    [0, 5, 4],
    // Right (+X)
    [1, 2, 6],
    [1, 6, 5],
    // Back (+Y)
    [2, 3, 7],
    [2, 7, 6],
    // Left (-X)
    [3, 0, 4],
    [3, 4, 7],
];

/// Appends an axis-aligned box with its minimum corner at `origin`.
///
/// Adds exactly 8 vertices and 12 triangles. Returns the index of the
/// first appended vertex.
///
/// # Example
/// ```
/// use tactile_mesh::generators::push_prism;
/// use tactile_mesh::{TriangleMesh, Vec3};
///
/// let mut mesh = TriangleMesh::new();
/// let base = push_prism(&mut mesh, Vec3::ZERO, Vec3::new(1.5, 1.5, 0.5));
/// assert_eq!(base, 0);
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn push_prism(mesh: &mut TriangleMesh, origin: Vec3, size: Vec3) -> u32 {
    let base = mesh.vertex_count() as u32;

    let Vec3 { x, y, z } = origin;
    let x1 = x + size.x;
    let y1 = y + size.y;
    let z1 = z + size.z;

    for &height in &[z, z1] {
        mesh.push_vertex(Vec3::new(x, y, height));
        mesh.push_vertex(Vec3::new(x1, y, height));
        mesh.push_vertex(Vec3::new(x1, y1, height));
        mesh.push_vertex(Vec3::new(x, y1, height));
    }
    debug_assert_eq!(mesh.vertex_count() as u32, base + PRISM_VERTICES as u32);

    for [a, b, c] in PRISM_TRIANGLES {
        mesh.push_triangle([base + a, base + b, base + c]);
    }

    base
}

/// Builds a standalone mesh holding one prism.
pub fn prism(origin: Vec3, size: Vec3) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(PRISM_VERTICES, PRISM_FACES);
    push_prism(&mut mesh, origin, size);
    mesh
}
