//! # Opacity Mask Extraction
//!
//! Thresholds an image's alpha channel into a binary mask: 255 where the
//! pixel counts as opaque, 0 elsewhere.

use config::constants::MAX_ALPHA;
use image::{DynamicImage, GrayImage, Luma};

use crate::error::OutlineError;

/// Builds a binary opacity mask from the image's alpha channel.
///
/// A pixel is opaque iff its alpha value strictly exceeds
/// `threshold * MAX_ALPHA`. With the default threshold of 0.5 this admits
/// alpha values of 128 and above.
///
/// # Arguments
///
/// * `image` - Decoded sprite image
/// * `threshold` - Opacity cutoff as a fraction of the alpha range
///
/// # Errors
///
/// Returns [`OutlineError::MissingAlpha`] if the image's color type carries
/// no alpha channel.
pub fn alpha_mask(image: &DynamicImage, threshold: f64) -> Result<GrayImage, OutlineError> {
    if !image.color().has_alpha() {
        return Err(OutlineError::MissingAlpha);
    }

    let rgba = image.to_rgba8();
    let cutoff = threshold * MAX_ALPHA;

    let mask = GrayImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let alpha = rgba.get_pixel(x, y)[3];
        if f64::from(alpha) > cutoff {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    });

    Ok(mask)
}
