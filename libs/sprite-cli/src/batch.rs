//! # Batch Orchestrator
//!
//! Enumerates sprite files, runs the per-sprite conversion pipeline, and
//! assembles the shared scene.
//!
//! Failures are contained at the single-sprite boundary: each sprite
//! produces a typed result, failures are logged with the filename and
//! counted as attempts, and the batch carries on. Only environment errors
//! (unreadable input directory, unwritable output) abort the run.
//!
//! Conversion (mask through wireframe) is pure and sprite-local, so it
//! fans out across a rayon pool; emission into the shared collection and
//! the final scene write stay on the orchestrator thread.

use std::fs;
use std::path::{Path, PathBuf};

use config::constants::DEFAULT_COLLECTION_NAME;
use config::SpriteConfig;
use rayon::prelude::*;
use sprite_mesh::{export, topology, Mesh, MeshError, Scene};
use sprite_outline::{extract_outline, OutlineError};
use thiserror::Error;
use tracing::{info, warn};

/// Why a single sprite failed to convert.
///
/// Each variant is an expected, contained failure; none aborts the batch.
#[derive(Debug, Error)]
pub enum SpriteError {
    /// The file could not be read or decoded as an image.
    #[error("failed to read image: {0}")]
    Unreadable(#[from] image::ImageError),

    /// The image has no alpha channel to build an opacity mask from.
    #[error("image has no alpha channel")]
    MissingAlpha,

    /// Every contour was dropped during simplification. Emitting an empty
    /// mesh object would be useless, so this counts as a failure.
    #[error("outline is empty: every contour simplified below 3 points")]
    EmptyOutline,

    /// Extrusion or scene emission failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl From<OutlineError> for SpriteError {
    fn from(err: OutlineError) -> Self {
        match err {
            OutlineError::MissingAlpha => Self::MissingAlpha,
        }
    }
}

/// Fatal environment errors that terminate the run.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The input directory could not be enumerated.
    #[error("failed to read input directory {path}: {source}")]
    InputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The scene artifact could not be written.
    #[error(transparent)]
    Export(#[from] MeshError),
}

/// Counts of sprites attempted vs. successfully converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Sprites the batch tried to convert.
    pub attempted: usize,
    /// Sprites that produced a mesh object in the scene.
    pub succeeded: usize,
}

/// True if the path's extension matches one of the accepted extensions.
///
/// Matches the file's real extension, case-insensitively and without the
/// leading dot. A bare suffix such as `foojpg` does not match.
pub fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            extensions.iter().any(|accepted| *accepted == ext)
        })
        .unwrap_or(false)
}

/// The sprite's object name: the filename stem before the first `.`.
pub fn sprite_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.split('.').next().unwrap_or(name).to_owned())
        .unwrap_or_else(|| String::from("sprite"))
}

/// Enumerates matching sprite files, sorted for deterministic batch order.
pub fn collect_sprites(input_dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, BatchError> {
    let entries = fs::read_dir(input_dir).map_err(|source| BatchError::InputDir {
        path: input_dir.to_path_buf(),
        source,
    })?;

    let mut sprites = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BatchError::InputDir {
            path: input_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && matches_extension(&path, extensions) {
            sprites.push(path);
        }
    }

    sprites.sort();
    Ok(sprites)
}

/// Converts one sprite file into a flat wireframe mesh.
///
/// Covers the pure per-sprite stages: decode, opacity mask, contours,
/// simplification, normalization, topology. Emission happens separately
/// against the shared scene.
pub fn convert_sprite(path: &Path, config: &SpriteConfig) -> Result<Mesh, SpriteError> {
    let image = image::open(path)?;
    let outline = extract_outline(&image, config)?;

    if outline.is_empty() {
        return Err(SpriteError::EmptyOutline);
    }

    Ok(topology::wireframe_from_loops(&outline.loops))
}

/// Runs the full batch: enumerate, convert, emit, save.
///
/// Returns the attempted/succeeded summary; per-sprite failures are logged
/// and absorbed into the counts.
pub fn run_batch(
    input_dir: &Path,
    output_dir: &Path,
    scene_name: &str,
    extensions: &[String],
    config: &SpriteConfig,
) -> Result<BatchSummary, BatchError> {
    let sprites = collect_sprites(input_dir, extensions)?;
    info!(sprites = sprites.len(), input = %input_dir.display(), "found sprites");

    // Pure conversion stage, order preserved by the indexed collect.
    let converted: Vec<(PathBuf, Result<Mesh, SpriteError>)> = sprites
        .into_par_iter()
        .map(|path| {
            let result = convert_sprite(&path, config);
            (path, result)
        })
        .collect();

    let mut scene = Scene::new(scene_name);
    let group = scene.create_collection(DEFAULT_COLLECTION_NAME);

    let mut summary = BatchSummary::default();
    for (path, result) in converted {
        summary.attempted += 1;
        let name = sprite_name(&path);

        let emitted = result.and_then(|wire| {
            scene
                .collection_mut(group)
                .emit_extruded(&name, &wire, config.extrude_depth)
                .map_err(SpriteError::from)
        });

        match emitted {
            Ok(_) => {
                summary.succeeded += 1;
                info!(sprite = %name, "converted");
            }
            Err(err) => {
                warn!(sprite = %path.display(), error = %err, "failed to generate mesh");
            }
        }
    }

    export::save_obj(&scene, output_dir)?;
    Ok(summary)
}
