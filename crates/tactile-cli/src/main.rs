//! Tactile CLI — turn text into a printable braille plate.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tactile_export::ExportFormat;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tactile")]
#[command(version, about = "Tactile — text to 3D-printable braille")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text and write the dot mesh to a file.
    Convert {
        /// Text to convert. Read from --input or stdin when omitted.
        text: Vec<String>,

        /// Read the text from this file.
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Output file. Overrides the config file.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (stl, stl_ascii, json). Overrides the config file.
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Conversion config (TOML).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fail on characters that have no braille cell.
        #[arg(long)]
        strict: bool,

        /// Print the conversion report as JSON.
        #[arg(long)]
        report: bool,
    },

    /// Print the braille encoding of text without building a mesh.
    Encode {
        /// Text to encode. Read from --input or stdin when omitted.
        text: Vec<String>,

        /// Read the text from this file.
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Conversion config (TOML), for dictionary overrides.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate a config (.toml) or a mesh (.json, .stl).
    Validate {
        /// Path to config or mesh file.
        path: PathBuf,
    },

    /// Print statistics for an STL or JSON mesh.
    Inspect {
        /// Path to mesh file.
        path: PathBuf,
    },
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tactile=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            text,
            input,
            output,
            format,
            config,
            strict,
            report,
        } => commands::convert(commands::ConvertArgs {
            text,
            input,
            output,
            format,
            config,
            strict,
            report,
        }),
        Commands::Encode {
            text,
            input,
            config,
        } => commands::encode(&text, input.as_deref(), config.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Inspect { path } => commands::inspect(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
