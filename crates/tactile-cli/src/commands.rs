//! CLI command implementations.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tactile_braille::{Encoder, GlyphToken};
use tactile_export::stl::read_stl;
use tactile_export::{exporter_for, read_json, ExportFormat};
use tactile_io::validator::{validate_config, validate_output};
use tactile_io::contract::DEFAULT_OUTPUT;
use tactile_io::{convert_and_export, ConversionConfig};
use tactile_mesh::{Topology, TriangleMesh};
use tactile_telemetry::{EventBus, TracingSink};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Arguments of `tactile convert`.
pub struct ConvertArgs {
    pub text: Vec<String>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<ExportFormat>,
    pub config: Option<PathBuf>,
    pub strict: bool,
    pub report: bool,
}

/// Encode text, lay it out and write the mesh.
pub fn convert(args: ConvertArgs) -> CommandResult {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(format) = args.format {
        config.output.format = format;
        if args.output.is_none() && config.output.path == Path::new(DEFAULT_OUTPUT) {
            let extension = exporter_for(format).extension().to_string();
            config.output.path.set_extension(extension);
        }
    }
    if let Some(output) = args.output {
        config.output.path = output;
    }
    config.strict |= args.strict;

    let text = read_text(&args.text, args.input.as_deref())?;

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new()));

    let result = convert_and_export(&text, &config, None, Some(&bus));
    bus.finish();
    let output = result?;
    let report = &output.report;

    if args.report {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Tactile Convert");
    println!("───────────────");
    println!("Words:      {}", report.words);
    println!("Cells:      {}", report.glyphs);
    println!("Dots:       {}", report.dots);
    println!("Lines:      {}", report.lines);
    println!("Vertices:   {}", report.vertices);
    println!("Triangles:  {}", report.triangles);
    if !report.unmapped.is_empty() {
        let chars: String = report.unmapped.iter().map(|u| u.character).collect();
        println!("Unmapped:   {} ({chars:?})", report.unmapped.len());
    }
    if report.overflowed {
        println!(
            "⚠ Text runs to {:.1} mm, past the {:.1} mm page.",
            report.max_y, config.page.page_height
        );
    }
    println!(
        "Written:    {} ({} bytes, {})",
        config.output.path.display(),
        report.bytes_written.unwrap_or(0),
        config.output.format
    );

    Ok(())
}

/// Print the braille cells for text.
pub fn encode(text: &[String], input: Option<&Path>, config: Option<&Path>) -> CommandResult {
    let config = load_config(config)?;
    let dictionary = config.dictionary()?;
    let text = read_text(text, input)?;

    let encoding = Encoder::new(&dictionary).encode_with_report(&text);
    let braille: String = encoding.tokens.iter().map(|t| t.code().to_unicode()).collect();
    println!("{}", braille.trim_end_matches('\u{2800}'));

    for token in &encoding.tokens {
        let label = match token {
            GlyphToken::Cell(_) => "cell",
            GlyphToken::CapitalIndicator => "capital",
            GlyphToken::Separator => "separator",
        };
        println!("{}  {}  {label}", token.code().to_unicode(), token.code());
    }

    for u in &encoding.unmapped {
        eprintln!(
            "no cell for {:?} (word {}, offset {})",
            u.character, u.word, u.offset
        );
    }

    Ok(())
}

/// Validate a config or mesh file.
pub fn validate(path: &Path) -> CommandResult {
    println!("Tactile Validator");
    println!("─────────────────");
    println!();

    match extension(path).as_deref() {
        Some("toml") => {
            println!("Validating config: {}", path.display());
            let config = ConversionConfig::load(path)?;
            validate_config(&config)?;
            println!("✅ Config is valid.");
        }
        Some("json") | Some("stl") => {
            println!("Validating mesh: {}", path.display());
            let mesh = read_mesh(path)?;
            match validate_output(&mesh) {
                Ok(()) => println!(
                    "✅ Mesh is valid ({} verts, {} tris).",
                    mesh.vertex_count(),
                    mesh.triangle_count()
                ),
                Err(e) => {
                    println!("❌ Mesh validation failed: {e}");
                    return Err(e.into());
                }
            }
        }
        _ => {
            return Err(format!(
                "unsupported file type: {} (use .toml, .json or .stl)",
                path.display()
            )
            .into());
        }
    }

    Ok(())
}

/// Print statistics for a mesh file.
pub fn inspect(path: &Path) -> CommandResult {
    println!("Tactile Mesh Inspector");
    println!("──────────────────────");
    println!();

    let mesh = read_mesh(path)?;
    let topology = Topology::build(&mesh);

    println!("Vertices:    {}", mesh.vertex_count());
    println!("Triangles:   {}", mesh.triangle_count());
    println!("Edges:       {}", topology.edges.len());
    if let Some((min, max)) = mesh.bounds() {
        println!(
            "Bounds:      [{:.3}, {:.3}, {:.3}] – [{:.3}, {:.3}, {:.3}]",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }
    println!("Closed:      {}", topology.is_closed());
    println!("Oriented:    {}", topology.is_consistently_oriented());
    println!("Euler χ:     {}", topology.euler_characteristic(&mesh));

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ConversionConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(ConversionConfig::load(path)?),
        None => Ok(ConversionConfig::default()),
    }
}

/// Positional words, else the input file, else stdin.
fn read_text(words: &[String], input: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    if let Some(path) = input {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn read_mesh(path: &Path) -> Result<TriangleMesh, Box<dyn std::error::Error>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mesh = if extension(path).as_deref() == Some("json") {
        read_json(&mut reader)?
    } else {
        read_stl(&mut reader)?.welded()
    };
    Ok(mesh)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
