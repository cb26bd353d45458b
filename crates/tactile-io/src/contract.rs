//! Conversion input/output contract types.
//!
//! `ConversionConfig` is what a TOML config file deserializes into. Every
//! section is optional; missing values fall back to the built-in defaults.
//!
//! ```toml
//! [page]
//! page_width = 297.0
//! dot_height = 0.8
//!
//! [output]
//! format = "stl_ascii"
//! path = "label.stl"
//!
//! [dictionary]
//! "&" = "111101"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tactile_braille::{CellDictionary, UnmappableCharacter};
use tactile_export::ExportFormat;
use tactile_layout::PageConfig;
use tactile_mesh::TriangleMesh;
use tactile_types::{Millimeters, TactileError, TactileResult};

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "braille_output.stl";

/// Complete configuration for a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Fail on the first character without a cell instead of blanking it.
    pub strict: bool,
    /// Page and dot geometry.
    pub page: PageConfig,
    /// Where and how to write the mesh.
    pub output: OutputConfig,
    /// Extra or replacement dictionary entries: key → six-symbol pattern.
    pub dictionary: BTreeMap<String, String>,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Mesh file format.
    pub format: ExportFormat,
    /// Destination path.
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Stl,
            path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ConversionConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> TactileResult<Self> {
        toml::from_str(content)
            .map_err(|e| TactileError::Serialization(format!("invalid config TOML: {e}")))
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> TactileResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> TactileResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| TactileError::Serialization(format!("config TOML encoding failed: {e}")))
    }

    /// The standard dictionary with this config's overrides applied.
    pub fn dictionary(&self) -> TactileResult<CellDictionary> {
        CellDictionary::standard().with_overrides(
            self.dictionary
                .iter()
                .map(|(key, pattern)| (key.as_str(), pattern.as_str())),
        )
    }
}

/// Output of a completed conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutput {
    /// The dot prisms.
    pub mesh: TriangleMesh,
    /// Summary of the run.
    pub report: ConversionReport,
}

/// Aggregate figures from a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Words after whitespace splitting.
    pub words: usize,
    /// Tokens, separators included.
    pub tokens: usize,
    /// Tokens that rendered at least one dot.
    pub glyphs: usize,
    /// Raised dots (one prism each).
    pub dots: usize,
    /// Lines used on the page.
    pub lines: u32,
    /// Mesh vertex count.
    pub vertices: usize,
    /// Mesh triangle count.
    pub triangles: usize,
    /// Largest y covered by a dot.
    pub max_y: Millimeters,
    /// Dots extend past the page height.
    pub overflowed: bool,
    /// Characters replaced by blank cells.
    pub unmapped: Vec<UnmappableCharacter>,
    /// Bytes written by the exporter, if the mesh was exported.
    pub bytes_written: Option<u64>,
}
