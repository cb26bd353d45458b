//! # tactile-export
//!
//! Pluggable mesh persistence.
//!
//! Provides a [`MeshExporter`] trait with an [`StlExporter`] (binary or
//! ASCII) and a [`JsonMeshExporter`], plus [`stl::read_stl`] and
//! [`json_exporter::read_json`] for loading meshes back for inspection.

pub mod exporter;
pub mod json_exporter;
pub mod stl;

pub use exporter::{export_to_path, exporter_for, ExportFormat, MeshExporter};
pub use json_exporter::{read_json, JsonMeshExporter};
pub use stl::{StlEncoding, StlExporter};
