//! Configuration and output validation.
//!
//! Catches data-level errors before the layout runs, and checks that a
//! generated mesh is fit to hand to an exporter.

use tactile_mesh::Topology;
use tactile_mesh::TriangleMesh;
use tactile_types::{TactileError, TactileResult};

use crate::contract::ConversionConfig;

/// Validates a complete conversion config.
///
/// Checks:
/// - Page geometry (positive sizes, room for at least one cell)
/// - Dictionary overrides are well-formed glyph codes
/// - Output path is not empty
pub fn validate_config(config: &ConversionConfig) -> TactileResult<()> {
    config.page.validate()?;
    config.dictionary()?;

    if config.output.path.as_os_str().is_empty() {
        return Err(TactileError::InvalidConfig(
            "output path must not be empty".into(),
        ));
    }

    Ok(())
}

/// Validates a generated mesh.
///
/// Checks:
/// - Index buffer integrity (no out-of-range or repeated indices)
/// - Every edge borders exactly two triangles
/// - Neighbouring triangles agree on winding
pub fn validate_output(mesh: &TriangleMesh) -> TactileResult<()> {
    mesh.validate()?;

    let topology = Topology::build(mesh);
    if !topology.is_closed() {
        return Err(TactileError::InvalidMesh(format!(
            "mesh is not closed: {} boundary edges, {} non-manifold edges",
            topology.boundary_edge_count(),
            topology.non_manifold_edge_count()
        )));
    }
    if !topology.is_consistently_oriented() {
        return Err(TactileError::InvalidMesh(format!(
            "inconsistent winding on {} directed edges",
            topology.repeated_directed_edges.len()
        )));
    }

    Ok(())
}
