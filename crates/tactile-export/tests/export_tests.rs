//! Integration tests for tactile-export.

use tactile_export::stl::{read_stl, FACET_LEN, HEADER_LEN};
use tactile_export::{
    export_to_path, exporter_for, read_json, ExportFormat, JsonMeshExporter, MeshExporter,
    StlEncoding, StlExporter,
};
use tactile_mesh::generators::{prism, push_prism};
use tactile_mesh::{TriangleMesh, Vec3};
use tactile_types::TactileError;

fn two_dots() -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    push_prism(&mut mesh, Vec3::new(10.0, 10.0, 0.0), Vec3::new(1.5, 1.5, 0.5));
    push_prism(&mut mesh, Vec3::new(12.5, 10.0, 0.0), Vec3::new(1.5, 1.5, 0.5));
    mesh
}

fn export_bytes(exporter: &dyn MeshExporter, mesh: &TriangleMesh) -> Vec<u8> {
    let mut buf = Vec::new();
    let written = exporter.export(mesh, &mut buf).unwrap();
    assert_eq!(written as usize, buf.len());
    buf
}

// ─── Binary STL Tests ─────────────────────────────────────────

#[test]
fn binary_size() {
    let mesh = two_dots();
    let bytes = export_bytes(&StlExporter::new(StlEncoding::Binary), &mesh);
    assert_eq!(bytes.len(), HEADER_LEN + 4 + FACET_LEN * 24);
    assert_eq!(u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]), 24);
    assert!(!bytes.starts_with(b"solid"));
}

#[test]
fn binary_empty_mesh() {
    let bytes = export_bytes(&StlExporter::default(), &TriangleMesh::new());
    assert_eq!(bytes.len(), HEADER_LEN + 4);
    let mesh = read_stl(&mut bytes.as_slice()).unwrap();
    assert!(mesh.is_empty());
}

#[test]
fn binary_first_facet_is_bottom() {
    let mesh = prism(Vec3::ZERO, Vec3::new(1.5, 1.5, 0.5));
    let bytes = export_bytes(&StlExporter::new(StlEncoding::Binary), &mesh);
    let f = |at: usize| {
        f32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    };
    let record = HEADER_LEN + 4;
    // Normal points down.
    assert_eq!((f(record), f(record + 4)), (0.0, 0.0));
    assert!((f(record + 8) + 1.0).abs() < 1e-6);
    // Second corner of [0, 2, 1] is (1.5, 1.5, 0).
    assert_eq!((f(record + 24), f(record + 28), f(record + 32)), (1.5, 1.5, 0.0));
}

#[test]
fn binary_reads_back() {
    let mesh = two_dots();
    let bytes = export_bytes(&StlExporter::new(StlEncoding::Binary), &mesh);
    let loaded = read_stl(&mut bytes.as_slice()).unwrap();
    assert_eq!(loaded.triangle_count(), mesh.triangle_count());
    for t in 0..mesh.triangle_count() {
        assert_eq!(loaded.triangle_corners(t), mesh.triangle_corners(t));
    }
}

#[test]
fn truncated_binary_rejected() {
    let mut bytes = export_bytes(&StlExporter::new(StlEncoding::Binary), &two_dots());
    bytes.truncate(bytes.len() - 10);
    let err = read_stl(&mut bytes.as_slice()).unwrap_err();
    assert!(matches!(err, TactileError::InvalidMesh(_)));
}

// ─── ASCII STL Tests ──────────────────────────────────────────

#[test]
fn ascii_structure() {
    let mesh = two_dots();
    let bytes = export_bytes(&StlExporter::new(StlEncoding::Ascii), &mesh);
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("solid "));
    assert!(text.trim_end().ends_with("endsolid tactile_braille"));
    assert_eq!(text.matches("facet normal").count(), 24);
    assert_eq!(text.matches("vertex").count(), 72);
}

#[test]
fn ascii_reads_back() {
    let mesh = two_dots();
    let bytes = export_bytes(&StlExporter::new(StlEncoding::Ascii), &mesh);
    let loaded = read_stl(&mut bytes.as_slice()).unwrap();
    assert_eq!(loaded.triangle_count(), 24);
    assert_eq!(loaded.vertex_count(), 72);
    let (min, max) = loaded.bounds().unwrap();
    assert_eq!(min, Vec3::new(10.0, 10.0, 0.0));
    assert_eq!(max, Vec3::new(14.0, 11.5, 0.5));
}

#[test]
fn malformed_ascii_rejected() {
    let text = "solid x\n facet normal 0 0 1\n outer loop\n vertex 0 0 0\n vertex 1 0 0\n endloop\n endfacet\nendsolid x\n";
    assert!(read_stl(&mut text.as_bytes()).is_err());
}

#[test]
fn invalid_mesh_not_exported() {
    let mut mesh = two_dots();
    mesh.indices[0] = 999;
    let mut buf = Vec::new();
    let err = StlExporter::default().export(&mesh, &mut buf).unwrap_err();
    assert!(matches!(err, TactileError::InvalidMesh(_)));
}

// ─── JSON Tests ───────────────────────────────────────────────

#[test]
fn json_document() {
    let mesh = two_dots();
    let bytes = export_bytes(&JsonMeshExporter::new(), &mesh);
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["vertex_count"], 16);
    assert_eq!(value["triangle_count"], 24);
    assert_eq!(value["faces"][12][0], 8);
    assert_eq!(value["vertices"].as_array().unwrap().len(), 16);
}

#[test]
fn pretty_json_is_indented() {
    let bytes = export_bytes(&JsonMeshExporter::pretty(), &two_dots());
    assert!(String::from_utf8(bytes).unwrap().contains("\n  "));
}

#[test]
fn json_reads_back() {
    let mesh = two_dots();
    let bytes = export_bytes(&JsonMeshExporter::new(), &mesh);
    let back = read_json(&mut bytes.as_slice()).unwrap();
    assert_eq!(back, mesh);
}

#[test]
fn json_count_mismatch_rejected() {
    let doc = r#"{"vertex_count":4,"triangle_count":1,"vertices":[[0,0,0],[1,0,0],[0,1,0]],"faces":[[0,1,2]]}"#;
    let err = read_json(&mut doc.as_bytes()).unwrap_err();
    assert!(matches!(err, TactileError::InvalidMesh(_)));
}

#[test]
fn json_out_of_range_index_rejected() {
    let doc = r#"{"vertex_count":3,"triangle_count":1,"vertices":[[0,0,0],[1,0,0],[0,1,0]],"faces":[[0,1,3]]}"#;
    let err = read_json(&mut doc.as_bytes()).unwrap_err();
    assert!(matches!(err, TactileError::InvalidMesh(_)));
}

// ─── Format / Path Tests ──────────────────────────────────────

#[test]
fn format_parsing() {
    assert_eq!("stl".parse::<ExportFormat>().unwrap(), ExportFormat::Stl);
    assert_eq!("ascii".parse::<ExportFormat>().unwrap(), ExportFormat::StlAscii);
    assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
    assert!("obj".parse::<ExportFormat>().is_err());
}

#[test]
fn exporter_selection() {
    assert_eq!(exporter_for(ExportFormat::Stl).name(), "stl_binary");
    assert_eq!(exporter_for(ExportFormat::StlAscii).name(), "stl_ascii");
    assert_eq!(exporter_for(ExportFormat::Json).extension(), "json");
}

#[test]
fn export_to_file() {
    let path = std::env::temp_dir().join(format!("tactile_export_{}.stl", std::process::id()));
    let exporter = StlExporter::default();
    let bytes = export_to_path(&exporter, &two_dots(), &path).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), bytes);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn export_to_missing_directory_fails() {
    let path = std::env::temp_dir()
        .join("tactile_no_such_dir_for_export")
        .join("out.stl");
    let err = export_to_path(&StlExporter::default(), &two_dots(), &path).unwrap_err();
    assert!(matches!(err, TactileError::Io(_)));
}
