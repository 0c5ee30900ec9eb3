//! # spritegen
//!
//! Converts a folder of transparent sprite images into a scene of flat,
//! extruded 3D mesh objects, saved as a single Wavefront OBJ file.
//!
//! ```text
//! spritegen ./input --output ./output --name Kaito
//! ```

mod batch;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use config::constants::{
    EXTRUDE_DEPTH, IMAGE_EXTENSIONS, PIXELS_PER_UNIT, SIMPLIFY_EPSILON, TRANSPARENCY_THRESHOLD,
};
use config::SpriteConfig;
use tracing_subscriber::EnvFilter;

/// Convert a folder of transparent sprites into extruded 3D meshes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing the sprite images
    input: PathBuf,

    /// Directory receiving the scene artifact
    #[arg(short, long, default_value = "output")]
    output: PathBuf,

    /// Scene name; the artifact is written as <name>.obj
    #[arg(short, long, default_value = "sprites")]
    name: String,

    /// Opacity cutoff as a fraction of the alpha range
    #[arg(long, default_value_t = TRANSPARENCY_THRESHOLD)]
    threshold: f64,

    /// Polygon simplification tolerance in pixels
    #[arg(long, default_value_t = SIMPLIFY_EPSILON)]
    epsilon: f64,

    /// Pixels per world unit
    #[arg(long, default_value_t = PIXELS_PER_UNIT)]
    ppu: f64,

    /// Extrusion depth in world units
    #[arg(long, default_value_t = EXTRUDE_DEPTH)]
    depth: f64,

    /// Accepted image extension (repeatable; defaults to png and jpg)
    #[arg(long = "extension", value_name = "EXT")]
    extensions: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match SpriteConfig::new(args.threshold, args.epsilon, args.ppu, args.depth) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    let extensions: Vec<String> = if args.extensions.is_empty() {
        IMAGE_EXTENSIONS.iter().map(|ext| (*ext).to_owned()).collect()
    } else {
        args.extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .collect()
    };

    match batch::run_batch(&args.input, &args.output, &args.name, &extensions, &config) {
        Ok(summary) => {
            println!(
                "Conversions completed for {} out of {} sprites.",
                summary.succeeded, summary.attempted
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("batch failed: {err}");
            ExitCode::FAILURE
        }
    }
}
