//! sm-export - Stickman Warfare model decompiler
//!
//! Converts compressed .sm0/.sm1 models to Wavefront .obj + .mtl

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use sm_common::{DEFAULT_MAX_DECOMPRESSED_SIZE, DecodeConfig};
use sm_export::{ConvertOptions, convert_all};

#[derive(Parser)]
#[command(name = "sm-export")]
#[command(about = "Stickman Warfare SM0/SM1 model decompiler")]
#[command(version)]
struct Cli {
    /// Input model files (.sm0 or .sm1; the last character selects the version)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory for .obj/.mtl files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Maximum size of each decompressed stream, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_DECOMPRESSED_SIZE)]
    max_decompressed_size: usize,

    /// Reject models whose indices reference missing vertices
    #[arg(long)]
    strict: bool,

    /// Decode and print a summary without writing any files
    #[arg(long)]
    inspect: bool,

    /// Verbose output (header and texture table dumps)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    tracing::info!("Stickman Warfare SM0/SM1 model decompiler");

    if !cli.inspect {
        std::fs::create_dir_all(&cli.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                cli.output_dir.display()
            )
        })?;
    }

    let options = ConvertOptions {
        decode: DecodeConfig {
            max_decompressed_size: cli.max_decompressed_size,
            strict_indices: cli.strict,
        },
        output_dir: cli.output_dir,
        inspect: cli.inspect,
    };

    let report = convert_all(&cli.inputs, &options);
    tracing::info!("{} of {} files converted", report.succeeded(), report.total());

    // Per-file failures are reported above and do not affect the exit status
    Ok(())
}
