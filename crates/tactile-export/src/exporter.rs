//! The `MeshExporter` trait and format selection.
//!
//! Exporters write to any `std::io::Write`. [`export_to_path`] wraps a file
//! in a buffered writer; a failed write is reported as
//! [`TactileError::Io`] and may leave a partial file behind.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tactile_mesh::TriangleMesh;
use tactile_types::{TactileError, TactileResult};

use crate::json_exporter::JsonMeshExporter;
use crate::stl::{StlEncoding, StlExporter};

/// Trait for writing a finished mesh.
///
/// # Implementations
/// - [`StlExporter`] — Binary or ASCII STL
/// - [`JsonMeshExporter`] — Vertex/face lists as JSON
pub trait MeshExporter: Send {
    /// Writes `mesh` to `writer`. Returns the number of bytes written.
    fn export(&self, mesh: &TriangleMesh, writer: &mut dyn Write) -> TactileResult<u64>;

    /// Returns the exporter name.
    fn name(&self) -> &str;

    /// Conventional file extension, without the dot.
    fn extension(&self) -> &str;
}

/// Output formats known to the CLI and configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Binary STL.
    #[default]
    Stl,
    /// ASCII STL.
    StlAscii,
    /// JSON vertex/face dump.
    Json,
}

impl ExportFormat {
    /// All formats, in display order.
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Stl, ExportFormat::StlAscii, ExportFormat::Json]
    }

    /// Configuration/CLI name.
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Stl => "stl",
            ExportFormat::StlAscii => "stl_ascii",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = TactileError;

    fn from_str(s: &str) -> TactileResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stl" | "binary" => Ok(ExportFormat::Stl),
            "stl_ascii" | "stl-ascii" | "ascii" => Ok(ExportFormat::StlAscii),
            "json" => Ok(ExportFormat::Json),
            other => {
                let known: Vec<&str> = ExportFormat::all().iter().map(|f| f.name()).collect();
                Err(TactileError::InvalidConfig(format!(
                    "unknown output format '{other}'. Available: {}",
                    known.join(", ")
                )))
            }
        }
    }
}

/// Returns the exporter for `format`.
pub fn exporter_for(format: ExportFormat) -> Box<dyn MeshExporter> {
    match format {
        ExportFormat::Stl => Box::new(StlExporter::new(StlEncoding::Binary)),
        ExportFormat::StlAscii => Box::new(StlExporter::new(StlEncoding::Ascii)),
        ExportFormat::Json => Box::new(JsonMeshExporter::new()),
    }
}

/// Writes `mesh` to the file at `path`, replacing it if it exists.
pub fn export_to_path(
    exporter: &dyn MeshExporter,
    mesh: &TriangleMesh,
    path: &Path,
) -> TactileResult<u64> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let bytes = exporter.export(mesh, &mut writer)?;
    writer.flush()?;
    tracing::debug!(
        exporter = exporter.name(),
        path = %path.display(),
        bytes,
        "mesh written"
    );
    Ok(bytes)
}

/// Counts bytes passed through to the inner writer.
pub(crate) struct CountingWriter<'a> {
    inner: &'a mut dyn Write,
    pub(crate) count: u64,
}

impl<'a> CountingWriter<'a> {
    pub(crate) fn new(inner: &'a mut dyn Write) -> Self {
        Self { inner, count: 0 }
    }
}

impl Write for CountingWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
