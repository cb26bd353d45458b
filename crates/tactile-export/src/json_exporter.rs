//! JSON mesh exporter — writes the raw vertex and face lists.
//!
//! Useful for inspecting a layout in a browser or a notebook without an
//! STL loader.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tactile_mesh::TriangleMesh;
use tactile_types::{TactileError, TactileResult};

use crate::exporter::{CountingWriter, MeshExporter};

/// Serialized form of a mesh.
#[derive(Serialize, Deserialize)]
struct MeshDocument {
    vertex_count: usize,
    triangle_count: usize,
    vertices: Vec<[f32; 3]>,
    faces: Vec<[u32; 3]>,
}

/// Exports a mesh as a JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMeshExporter {
    pretty: bool,
}

impl JsonMeshExporter {
    /// Creates a compact JSON exporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an exporter that indents its output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl MeshExporter for JsonMeshExporter {
    fn export(&self, mesh: &TriangleMesh, writer: &mut dyn Write) -> TactileResult<u64> {
        let doc = MeshDocument {
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            vertices: mesh.vertices().collect(),
            faces: mesh.faces().collect(),
        };
        let mut out = CountingWriter::new(writer);
        let result = if self.pretty {
            serde_json::to_writer_pretty(&mut out, &doc)
        } else {
            serde_json::to_writer(&mut out, &doc)
        };
        result.map_err(|e| {
            if e.is_io() {
                TactileError::Io(e.into())
            } else {
                TactileError::Serialization(format!("JSON serialization failed: {e}"))
            }
        })?;
        Ok(out.count)
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn extension(&self) -> &str {
        "json"
    }
}

/// Reads a mesh written by [`JsonMeshExporter`].
///
/// The declared counts must match the lists, and every index must be in
/// range.
pub fn read_json(reader: &mut dyn Read) -> TactileResult<TriangleMesh> {
    let doc: MeshDocument = serde_json::from_reader(reader)
        .map_err(|e| TactileError::Serialization(format!("invalid mesh JSON: {e}")))?;

    if doc.vertex_count != doc.vertices.len() || doc.triangle_count != doc.faces.len() {
        return Err(TactileError::InvalidMesh(format!(
            "declared {} vertices / {} triangles, found {} / {}",
            doc.vertex_count,
            doc.triangle_count,
            doc.vertices.len(),
            doc.faces.len()
        )));
    }

    let positions: Vec<f32> = doc.vertices.iter().flatten().copied().collect();
    let indices: Vec<u32> = doc.faces.iter().flatten().copied().collect();
    TriangleMesh::from_interleaved(&positions, &indices)
}
