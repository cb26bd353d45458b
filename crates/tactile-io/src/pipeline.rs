//! Text → mesh → file.
//!
//! The pipeline is a pure function of the text and the config: running it
//! twice yields identical meshes, so a failed export can simply be retried.

use std::path::Path;

use tactile_braille::Encoder;
use tactile_export::{export_to_path, exporter_for};
use tactile_layout::LayoutBuilder;
use tactile_telemetry::{EventBus, EventKind, PipelineEvent, Stage};
use tactile_types::TactileResult;

use crate::contract::{ConversionConfig, ConversionOutput, ConversionReport};
use crate::validator::validate_config;

/// Encodes `text` and lays it out as dot prisms.
///
/// Events go to `bus` when one is given. In strict mode the first
/// unmappable character aborts the run.
pub fn convert(
    text: &str,
    config: &ConversionConfig,
    bus: Option<&EventBus>,
) -> TactileResult<ConversionOutput> {
    validate_config(config)?;
    let emit = |stage: Stage, kind: EventKind| {
        if let Some(bus) = bus {
            bus.emit(PipelineEvent::new(stage, kind));
        }
    };

    let dictionary = config.dictionary()?;
    let encoding = Encoder::new(&dictionary).encode_with_report(text);
    for u in &encoding.unmapped {
        emit(
            Stage::Encode,
            EventKind::UnmappableCharacter {
                character: u.character,
                word: u.word,
                offset: u.offset,
            },
        );
    }
    emit(
        Stage::Encode,
        EventKind::TextEncoded {
            words: encoding.word_count,
            tokens: encoding.tokens.len(),
            unmapped: encoding.unmapped.len(),
        },
    );

    let words = encoding.word_count;
    let unmapped = encoding.unmapped.clone();
    let tokens = if config.strict {
        encoding.into_strict()?
    } else {
        encoding.tokens
    };

    let layout = LayoutBuilder::new(config.page)?.build(&tokens);
    let stats = layout.stats;
    emit(
        Stage::Layout,
        EventKind::LayoutCompleted {
            lines: stats.lines,
            dots: stats.dots,
            vertices: layout.mesh.vertex_count(),
            triangles: layout.mesh.triangle_count(),
        },
    );
    if stats.overflowed {
        emit(
            Stage::Layout,
            EventKind::PageOverflow {
                max_y: stats.max_y,
                page_height: config.page.page_height,
            },
        );
    }

    let report = ConversionReport {
        words,
        tokens: stats.tokens,
        glyphs: stats.glyphs,
        dots: stats.dots,
        lines: stats.lines,
        vertices: layout.mesh.vertex_count(),
        triangles: layout.mesh.triangle_count(),
        max_y: stats.max_y,
        overflowed: stats.overflowed,
        unmapped,
        bytes_written: None,
    };
    tracing::debug!(
        words = report.words,
        dots = report.dots,
        lines = report.lines,
        "text converted"
    );

    Ok(ConversionOutput {
        mesh: layout.mesh,
        report,
    })
}

/// Runs [`convert`] and writes the mesh to `path` (or the configured path).
pub fn convert_and_export(
    text: &str,
    config: &ConversionConfig,
    path: Option<&Path>,
    bus: Option<&EventBus>,
) -> TactileResult<ConversionOutput> {
    let mut output = convert(text, config, bus)?;

    let path = path.unwrap_or(config.output.path.as_path());
    let exporter = exporter_for(config.output.format);
    let bytes = export_to_path(exporter.as_ref(), &output.mesh, path)?;
    output.report.bytes_written = Some(bytes);

    if let Some(bus) = bus {
        bus.emit(PipelineEvent::new(
            Stage::Export,
            EventKind::MeshExported {
                exporter: exporter.name().to_string(),
                path: path.display().to_string(),
                bytes,
            },
        ));
    }

    Ok(output)
}
