//! Integration tests for tactile-mesh.

use tactile_mesh::generators::{prism, push_prism};
use tactile_mesh::normals::{compute_face_normals, face_area, face_normal};
use tactile_mesh::topology::Topology;
use tactile_mesh::{TriangleMesh, Vec3};

// ─── TriangleMesh Tests ───────────────────────────────────────

fn make_single_triangle() -> TriangleMesh {
    TriangleMesh {
        pos_x: vec![0.0, 1.0, 0.0],
        pos_y: vec![0.0, 0.0, 1.0],
        pos_z: vec![0.0, 0.0, 0.0],
        indices: vec![0, 1, 2],
    }
}

fn unit_dot() -> TriangleMesh {
    prism(Vec3::new(10.0, 10.0, 0.0), Vec3::new(1.5, 1.5, 0.5))
}

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert!(!mesh.is_empty());
    assert!(TriangleMesh::new().is_empty());
}

#[test]
fn position_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.position(1), [1.0, 0.0, 0.0]);
}

#[test]
fn vertices_and_faces_iterators() {
    let mesh = make_single_triangle();
    let verts: Vec<[f32; 3]> = mesh.vertices().collect();
    assert_eq!(verts[2], [0.0, 1.0, 0.0]);
    let faces: Vec<[u32; 3]> = mesh.faces().collect();
    assert_eq!(faces, vec![[0, 1, 2]]);
}

#[test]
fn validate_ok() {
    assert!(make_single_triangle().validate().is_ok());
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut mesh = make_single_triangle();
    mesh.pos_y.push(99.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = make_single_triangle();
    mesh.indices[2] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_degenerate() {
    let mut mesh = make_single_triangle();
    mesh.indices = vec![0, 0, 1];
    assert!(mesh.validate().is_err());
}

#[test]
fn from_interleaved() {
    let positions = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let mesh = TriangleMesh::from_interleaved(&positions, &[0, 1, 2]).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.pos_x, vec![0.0, 1.0, 0.0]);
}

#[test]
fn from_interleaved_rejects_bad_length() {
    assert!(TriangleMesh::from_interleaved(&[0.0, 1.0], &[]).is_err());
}

#[test]
fn bounds() {
    assert!(TriangleMesh::new().bounds().is_none());
    let (min, max) = unit_dot().bounds().unwrap();
    assert_eq!(min, Vec3::new(10.0, 10.0, 0.0));
    assert_eq!(max, Vec3::new(11.5, 11.5, 0.5));
}

#[test]
fn welded_merges_duplicate_corners() {
    let source = unit_dot();
    let mut soup = TriangleMesh::new();
    for t in 0..source.triangle_count() {
        let [a, b, c] = source.triangle_corners(t);
        let tri = [soup.push_vertex(a), soup.push_vertex(b), soup.push_vertex(c)];
        soup.push_triangle(tri);
    }
    assert_eq!(soup.vertex_count(), 36);
    assert!(!Topology::build(&soup).is_closed());

    let welded = soup.welded();
    assert_eq!(welded.vertex_count(), 8);
    assert_eq!(welded.triangle_count(), 12);
    assert!(welded.validate().is_ok());
    let topo = Topology::build(&welded);
    assert!(topo.is_closed());
    assert!(topo.is_consistently_oriented());
    for t in 0..12 {
        assert_eq!(welded.triangle_corners(t), source.triangle_corners(t));
    }
}

#[test]
fn welded_merges_signed_zeros() {
    let mut mesh = TriangleMesh::new();
    let a = mesh.push_vertex(Vec3::new(0.0, 0.0, 0.0));
    let b = mesh.push_vertex(Vec3::X);
    let c = mesh.push_vertex(Vec3::Y);
    let d = mesh.push_vertex(Vec3::new(-0.0, 0.0, -0.0));
    mesh.push_triangle([a, b, c]);
    mesh.push_triangle([d, c, b]);

    let welded = mesh.welded();
    assert_eq!(welded.vertex_count(), 3);
    assert_eq!(welded.triangle(1), [0, 2, 1]);
    assert!(welded.validate().is_ok());
}

#[test]
fn welding_shared_mesh_is_identity() {
    let mesh = unit_dot();
    assert_eq!(mesh.welded(), mesh);
}

// ─── Prism Tests ──────────────────────────────────────────────

#[test]
fn prism_counts() {
    let mesh = unit_dot();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    assert!(mesh.validate().is_ok());
    assert!(mesh.indices.iter().all(|&i| i < 8));
}

#[test]
fn prism_is_two_parallel_rectangles() {
    let mesh = unit_dot();
    let bottom: Vec<[f32; 3]> = mesh.vertices().take(4).collect();
    let top: Vec<[f32; 3]> = mesh.vertices().skip(4).collect();
    for (b, t) in bottom.iter().zip(&top) {
        assert_eq!(b[0], t[0]);
        assert_eq!(b[1], t[1]);
        assert_eq!(b[2], 0.0);
        assert!((t[2] - b[2] - 0.5).abs() < 1e-6);
    }
}

#[test]
fn push_prism_offsets_indices() {
    let mut mesh = TriangleMesh::new();
    let first = push_prism(&mut mesh, Vec3::ZERO, Vec3::ONE);
    let second = push_prism(&mut mesh, Vec3::new(5.0, 0.0, 0.0), Vec3::ONE);
    assert_eq!(first, 0);
    assert_eq!(second, 8);
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(mesh.triangle_count(), 24);
    for t in 12..24 {
        assert!(mesh.triangle(t).iter().all(|&i| (8..16).contains(&i)));
    }
}

#[test]
fn prism_normals_point_outward() {
    let mesh = unit_dot();
    let center = Vec3::new(10.75, 10.75, 0.25);
    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle_corners(t);
        let centroid = (a + b + c) / 3.0;
        let n = face_normal(&mesh, t);
        assert!(
            n.dot(centroid - center) > 0.0,
            "Triangle {} faces inward: normal {:?}",
            t,
            n
        );
    }
}

#[test]
fn prism_normals_are_axis_aligned() {
    let mesh = unit_dot();
    for n in compute_face_normals(&mesh) {
        assert!((n.length() - 1.0).abs() < 1e-5);
        let axis_hits = [n.x, n.y, n.z].iter().filter(|v| v.abs() > 0.99).count();
        assert_eq!(axis_hits, 1);
    }
}

#[test]
fn prism_surface_area() {
    let mesh = unit_dot();
    let total: f32 = (0..mesh.triangle_count()).map(|t| face_area(&mesh, t)).sum();
    let expected = 2.0 * 1.5 * 1.5 + 4.0 * 1.5 * 0.5;
    assert!((total - expected).abs() < 1e-4);
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn prism_is_closed_and_oriented() {
    let mesh = unit_dot();
    let topo = Topology::build(&mesh);
    assert_eq!(topo.edges.len(), 18);
    assert!(topo.is_closed());
    assert!(topo.is_consistently_oriented());
    assert_eq!(topo.boundary_edge_count(), 0);
    assert_eq!(topo.non_manifold_edge_count(), 0);
    assert_eq!(topo.euler_characteristic(&mesh), 2);
}

#[test]
fn separate_prisms_stay_independent() {
    let mut mesh = TriangleMesh::new();
    for i in 0..3 {
        push_prism(&mut mesh, Vec3::new(i as f32 * 2.5, 0.0, 0.0), Vec3::new(1.5, 1.5, 0.5));
    }
    let topo = Topology::build(&mesh);
    assert!(topo.is_closed());
    assert!(topo.is_consistently_oriented());
    assert_eq!(topo.euler_characteristic(&mesh), 6);
}

#[test]
fn open_triangle_has_boundary() {
    let topo = Topology::build(&make_single_triangle());
    assert_eq!(topo.boundary_edge_count(), 3);
    assert!(!topo.is_closed());
}

#[test]
fn flipped_face_is_detected() {
    let mut mesh = unit_dot();
    // Reverse the first bottom triangle.
    mesh.indices.swap(1, 2);
    let topo = Topology::build(&mesh);
    assert!(topo.is_closed());
    assert!(!topo.is_consistently_oriented());
}

#[test]
fn mesh_is_serializable() {
    let mesh = unit_dot();
    let json = serde_json::to_string(&mesh).unwrap();
    let recovered: TriangleMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, mesh);
}
