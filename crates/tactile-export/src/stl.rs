//! STL reading and writing.
//!
//! Binary layout: an 80-byte header, a little-endian `u32` facet count,
//! then 50 bytes per facet (normal, three corners, `u16` attribute).
//! ASCII layout: `solid … facet normal … outer loop … endsolid`.
//!
//! Facet normals are recomputed from the winding on export. Reading does
//! not weld vertices: every facet contributes three new ones.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tactile_mesh::normals::face_normal;
use tactile_mesh::{TriangleMesh, Vec3};
use tactile_types::{TactileError, TactileResult};

use crate::exporter::{CountingWriter, MeshExporter};

/// Size of the binary header.
pub const HEADER_LEN: usize = 80;

/// Bytes per facet in binary STL.
pub const FACET_LEN: usize = 50;

/// Solid name used in headers.
const SOLID_NAME: &str = "tactile_braille";

/// STL flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StlEncoding {
    #[default]
    Binary,
    Ascii,
}

/// Writes meshes as STL.
#[derive(Debug, Clone, Copy, Default)]
pub struct StlExporter {
    encoding: StlEncoding,
}

impl StlExporter {
    /// Creates an exporter for the given flavour.
    pub fn new(encoding: StlEncoding) -> Self {
        Self { encoding }
    }

    /// The flavour this exporter writes.
    pub fn encoding(&self) -> StlEncoding {
        self.encoding
    }
}

impl MeshExporter for StlExporter {
    fn export(&self, mesh: &TriangleMesh, writer: &mut dyn Write) -> TactileResult<u64> {
        mesh.validate()?;
        let mut out = CountingWriter::new(writer);
        match self.encoding {
            StlEncoding::Binary => write_binary(mesh, &mut out)?,
            StlEncoding::Ascii => write_ascii(mesh, &mut out)?,
        }
        Ok(out.count)
    }

    fn name(&self) -> &str {
        match self.encoding {
            StlEncoding::Binary => "stl_binary",
            StlEncoding::Ascii => "stl_ascii",
        }
    }

    fn extension(&self) -> &str {
        "stl"
    }
}

/// Writes binary STL.
pub fn write_binary(mesh: &TriangleMesh, writer: &mut dyn Write) -> TactileResult<()> {
    let facets = u32::try_from(mesh.triangle_count()).map_err(|_| {
        TactileError::InvalidMesh(format!(
            "{} triangles exceed the binary STL facet limit",
            mesh.triangle_count()
        ))
    })?;

    let mut header = [0u8; HEADER_LEN];
    let label = format!("binary STL {SOLID_NAME}");
    header[..label.len()].copy_from_slice(label.as_bytes());
    writer.write_all(&header)?;
    writer.write_all(&facets.to_le_bytes())?;

    let mut record = [0u8; FACET_LEN];
    for t in 0..mesh.triangle_count() {
        let normal = face_normal(mesh, t);
        let corners = mesh.triangle_corners(t);
        let values = [normal, corners[0], corners[1], corners[2]];
        for (slot, v) in values.iter().enumerate() {
            for (axis, component) in v.to_array().iter().enumerate() {
                let at = slot * 12 + axis * 4;
                record[at..at + 4].copy_from_slice(&component.to_le_bytes());
            }
        }
        // Attribute byte count stays zero.
        record[48..50].copy_from_slice(&0u16.to_le_bytes());
        writer.write_all(&record)?;
    }
    Ok(())
}

/// Writes ASCII STL.
pub fn write_ascii(mesh: &TriangleMesh, writer: &mut dyn Write) -> TactileResult<()> {
    writeln!(writer, "solid {SOLID_NAME}")?;
    for t in 0..mesh.triangle_count() {
        let n = face_normal(mesh, t);
        writeln!(writer, "  facet normal {:e} {:e} {:e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for p in mesh.triangle_corners(t) {
            writeln!(writer, "      vertex {:e} {:e} {:e}", p.x, p.y, p.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {SOLID_NAME}")?;
    Ok(())
}

/// Reads binary or ASCII STL, detecting the flavour from the content.
pub fn read_stl(reader: &mut dyn Read) -> TactileResult<TriangleMesh> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    if looks_binary(&data) {
        parse_binary(&data)
    } else {
        let text = std::str::from_utf8(&data).map_err(|e| {
            TactileError::InvalidMesh(format!("STL is neither binary nor UTF-8 text: {e}"))
        })?;
        parse_ascii(text)
    }
}

/// Binary files may also start with "solid", so the size decides.
fn looks_binary(data: &[u8]) -> bool {
    if data.len() < HEADER_LEN + 4 {
        return !data.starts_with(b"solid");
    }
    let count = u32::from_le_bytes([
        data[HEADER_LEN],
        data[HEADER_LEN + 1],
        data[HEADER_LEN + 2],
        data[HEADER_LEN + 3],
    ]) as usize;
    let expected = count.checked_mul(FACET_LEN).map(|b| b + HEADER_LEN + 4);
    expected == Some(data.len()) || !data.starts_with(b"solid")
}

fn parse_binary(data: &[u8]) -> TactileResult<TriangleMesh> {
    if data.len() < HEADER_LEN + 4 {
        return Err(TactileError::InvalidMesh(format!(
            "binary STL too short: {} bytes",
            data.len()
        )));
    }
    let count = u32::from_le_bytes([
        data[HEADER_LEN],
        data[HEADER_LEN + 1],
        data[HEADER_LEN + 2],
        data[HEADER_LEN + 3],
    ]) as usize;
    let body = &data[HEADER_LEN + 4..];
    if body.len() != count * FACET_LEN {
        return Err(TactileError::InvalidMesh(format!(
            "binary STL declares {} facets but holds {} bytes of facet data",
            count,
            body.len()
        )));
    }

    let mut mesh = TriangleMesh::with_capacity(count * 3, count);
    for record in body.chunks_exact(FACET_LEN) {
        let mut tri = [0u32; 3];
        for (corner, slot) in tri.iter_mut().zip(1..4) {
            let at = slot * 12;
            let component = |axis: usize| {
                let i = at + axis * 4;
                f32::from_le_bytes([record[i], record[i + 1], record[i + 2], record[i + 3]])
            };
            *corner = mesh.push_vertex(Vec3::new(component(0), component(1), component(2)));
        }
        mesh.push_triangle(tri);
    }
    Ok(mesh)
}

fn parse_ascii(text: &str) -> TactileResult<TriangleMesh> {
    let mut mesh = TriangleMesh::new();
    let mut corners: Vec<u32> = Vec::with_capacity(3);

    for (line_no, line) in text.lines().enumerate() {
        let mut words = line.split_whitespace();
        match words.next() {
            Some("vertex") => {
                let mut coord = [0f32; 3];
                for c in coord.iter_mut() {
                    let word = words.next().ok_or_else(|| {
                        TactileError::InvalidMesh(format!(
                            "line {}: vertex needs 3 coordinates",
                            line_no + 1
                        ))
                    })?;
                    *c = word.parse().map_err(|e| {
                        TactileError::InvalidMesh(format!(
                            "line {}: bad coordinate {word:?}: {e}",
                            line_no + 1
                        ))
                    })?;
                }
                corners.push(mesh.push_vertex(Vec3::from_array(coord)));
            }
            Some("endloop") => {
                if corners.len() != 3 {
                    return Err(TactileError::InvalidMesh(format!(
                        "line {}: facet has {} vertices, expected 3",
                        line_no + 1,
                        corners.len()
                    )));
                }
                mesh.push_triangle([corners[0], corners[1], corners[2]]);
                corners.clear();
            }
            _ => {}
        }
    }

    Ok(mesh)
}
