//! # Contour Finding
//!
//! Thin wrapper over `imageproc`'s Suzuki-Abe border following. The tracing
//! algorithm itself is consumed as an external capability; this module only
//! converts its output into pipeline types, preserving the outer/hole
//! hierarchy.

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};

/// Whether a contour bounds an opaque region or a hole inside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContourKind {
    /// Outer boundary of an opaque region.
    Outer,
    /// Boundary of a transparent hole nested inside an opaque region.
    Hole,
}

/// A closed loop of integer pixel coordinates traced on the opacity mask.
///
/// Point density is whatever the tracer produced; callers must not assume
/// one point per boundary pixel.
#[derive(Debug, Clone)]
pub struct RawContour {
    /// Ordered boundary points in pixel coordinates.
    pub points: Vec<(u32, u32)>,
    /// Outer boundary or hole.
    pub kind: ContourKind,
    /// Index of the enclosing contour, if any.
    pub parent: Option<usize>,
}

/// Traces all contours on a binary opacity mask.
///
/// Non-zero pixels are treated as foreground. The full hierarchy is
/// retrieved: holes are reported as separate contours tagged
/// [`ContourKind::Hole`] with a `parent` link to their enclosing boundary.
pub fn find_mask_contours(mask: &GrayImage) -> Vec<RawContour> {
    find_contours::<u32>(mask)
        .into_iter()
        .map(|c| RawContour {
            points: c.points.into_iter().map(|p| (p.x, p.y)).collect(),
            kind: match c.border_type {
                BorderType::Outer => ContourKind::Outer,
                BorderType::Hole => ContourKind::Hole,
            },
            parent: c.parent,
        })
        .collect()
}
