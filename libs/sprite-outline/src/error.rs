//! # Outline Errors
//!
//! Error types for silhouette extraction.

use thiserror::Error;

/// Errors that can occur while extracting a sprite's outline.
#[derive(Debug, Error)]
pub enum OutlineError {
    /// The image carries no alpha channel, so no opacity mask can be built.
    /// This is a per-sprite precondition failure; the batch skips the sprite.
    #[error("image has no alpha channel")]
    MissingAlpha,
}
