//! # Sprite Outline
//!
//! Silhouette extraction for sprite images.
//!
//! ## Architecture
//!
//! ```text
//! image (RGBA) → sprite-outline (SpriteOutline) → sprite-mesh
//! ```
//!
//! The pipeline per sprite: threshold the alpha channel into a binary
//! opacity mask, trace contours (with hole hierarchy) on the mask, simplify
//! each contour into a sparse closed polygon, then normalize pixel
//! coordinates into centered, Y-up world space.
//!
//! Contour tracing and polygon approximation are consumed from `imageproc`
//! as external capabilities; this crate supplies the thresholding,
//! filtering, and coordinate mapping around them.
//!
//! ## Example
//!
//! ```rust,ignore
//! use config::SpriteConfig;
//! use sprite_outline::extract_outline;
//!
//! let image = image::open("sprite.png")?;
//! let outline = extract_outline(&image, &SpriteConfig::default())?;
//! for polygon in &outline.loops {
//!     println!("{} points", polygon.len());
//! }
//! ```

pub mod contour;
pub mod error;
pub mod mask;
pub mod normalize;
pub mod simplify;

// Re-export public API
pub use contour::{ContourKind, RawContour};
pub use error::OutlineError;

use config::SpriteConfig;
use glam::DVec2;
use image::DynamicImage;
use tracing::info;

/// All normalized outline loops extracted from one sprite.
///
/// Each loop is an ordered sequence of world-space points, implicitly
/// closed (last point connects back to the first). Holes appear as
/// additional loops alongside outer boundaries, in tracer order.
#[derive(Debug, Clone, Default)]
pub struct SpriteOutline {
    /// Closed loops in world coordinates.
    pub loops: Vec<Vec<DVec2>>,
}

impl SpriteOutline {
    /// Returns true if every contour was dropped or none existed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }

    /// Number of loops.
    #[inline]
    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }

    /// Total number of points across all loops.
    pub fn point_count(&self) -> usize {
        self.loops.iter().map(Vec::len).sum()
    }
}

/// Extracts the normalized outline of one sprite image.
///
/// Runs the full per-sprite silhouette pipeline: opacity mask, contour
/// tracing, simplification, normalization. Contours that simplify below
/// three points are dropped; the result may therefore contain fewer loops
/// than the mask has contours, or none at all.
///
/// # Errors
///
/// Returns [`OutlineError::MissingAlpha`] if the image has no alpha channel.
pub fn extract_outline(
    image: &DynamicImage,
    config: &SpriteConfig,
) -> Result<SpriteOutline, OutlineError> {
    let mask = mask::alpha_mask(image, config.transparency_threshold)?;
    let contours = contour::find_mask_contours(&mask);

    let holes = contours
        .iter()
        .filter(|c| c.kind == ContourKind::Hole)
        .count();
    info!(
        contours = contours.len(),
        outer = contours.len() - holes,
        holes,
        "found contours"
    );

    let (width, height) = (image.width(), image.height());
    let mut loops = Vec::with_capacity(contours.len());

    for (index, raw) in contours.iter().enumerate() {
        if let Some(polygon) = simplify::simplify_contour(index, raw, config.simplify_epsilon) {
            loops.push(normalize::normalize_loop(
                &polygon,
                width,
                height,
                config.pixels_per_unit,
            ));
        }
    }

    Ok(SpriteOutline { loops })
}
