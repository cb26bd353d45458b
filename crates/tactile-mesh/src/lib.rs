//! # tactile-mesh
//!
//! Triangle mesh buffer with Structure-of-Arrays (SoA) vertex layout.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — Growing vertex/face buffer. Positions are stored in
//!   per-axis channels, faces as a flat index buffer.
//! - [`Topology`] — Edge adjacency used to check that generated solids are
//!   closed and consistently wound.
//! - [`generators::push_prism`] — Appends one axis-aligned box (8 vertices,
//!   12 faces) for a raised dot.

pub mod generators;
pub mod mesh;
pub mod normals;
pub mod topology;

pub use glam::Vec3;
pub use mesh::TriangleMesh;
pub use topology::Topology;
