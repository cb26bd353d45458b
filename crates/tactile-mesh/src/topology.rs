//! Mesh topology queries.
//!
//! Builds edge adjacency from the triangle index buffer. A solid is closed
//! when every edge borders exactly two triangles, and consistently wound
//! when those two triangles traverse the shared edge in opposite
//! directions.

use std::collections::BTreeMap;

use crate::mesh::TriangleMesh;

/// Precomputed edge adjacency for a triangle mesh.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Unique edges as `[v_min, v_max]` pairs, sorted.
    pub edges: Vec<[u32; 2]>,

    /// For each edge, the triangles that contain it.
    pub edge_triangles: Vec<Vec<u32>>,

    /// Directed edges `(from, to)` that appear in more than one triangle.
    /// Any entry here means neighbouring triangles disagree on winding.
    pub repeated_directed_edges: Vec<[u32; 2]>,
}

impl Topology {
    /// Build topology from a triangle mesh.
    pub fn build(mesh: &TriangleMesh) -> Self {
        let mut edge_map: BTreeMap<(u32, u32), Vec<u32>> = BTreeMap::new();
        let mut directed: BTreeMap<(u32, u32), u32> = BTreeMap::new();

        for t in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle(t);
            for (v0, v1) in [(a, b), (b, c), (c, a)] {
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                edge_map.entry(key).or_default().push(t as u32);
                *directed.entry((v0, v1)).or_default() += 1;
            }
        }

        let mut edges = Vec::with_capacity(edge_map.len());
        let mut edge_triangles = Vec::with_capacity(edge_map.len());
        for ((v0, v1), tris) in edge_map {
            edges.push([v0, v1]);
            edge_triangles.push(tris);
        }

        let repeated_directed_edges = directed
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|((v0, v1), _)| [v0, v1])
            .collect();

        Self {
            edges,
            edge_triangles,
            repeated_directed_edges,
        }
    }

    /// Returns the number of boundary edges (edges with only 1 adjacent triangle).
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_triangles
            .iter()
            .filter(|tris| tris.len() == 1)
            .count()
    }

    /// Returns the number of edges shared by more than two triangles.
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edge_triangles
            .iter()
            .filter(|tris| tris.len() > 2)
            .count()
    }

    /// Returns true if the mesh is closed (every edge has exactly 2 triangles).
    pub fn is_closed(&self) -> bool {
        self.edge_triangles.iter().all(|tris| tris.len() == 2)
    }

    /// Returns true if no directed edge is used twice.
    pub fn is_consistently_oriented(&self) -> bool {
        self.repeated_directed_edges.is_empty()
    }

    /// Euler characteristic `V - E + F` over the vertices referenced by faces.
    ///
    /// Each closed box contributes 2.
    pub fn euler_characteristic(&self, mesh: &TriangleMesh) -> i64 {
        let mut referenced: Vec<u32> = mesh.indices.clone();
        referenced.sort_unstable();
        referenced.dedup();
        referenced.len() as i64 - self.edges.len() as i64 + mesh.triangle_count() as i64
    }
}
