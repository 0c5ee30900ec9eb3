//! # Contour Simplification
//!
//! Reduces dense traced contours to sparse closed polygons via
//! Ramer-Douglas-Peucker approximation (`imageproc`'s
//! `approximate_polygon_dp`, the same perpendicular-distance scheme as
//! OpenCV's `approxPolyDP`).
//!
//! Contours that simplify to fewer than three points cannot form a polygon
//! and are dropped entirely. This is a data-quality gate: degenerate
//! geometry must never reach the topology builder.

use glam::DVec2;
use imageproc::geometry::approximate_polygon_dp;
use imageproc::point::Point;
use tracing::{debug, warn};

use crate::contour::RawContour;

/// Minimum point count for a valid closed polygon.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Simplifies one contour to a closed polygon within `epsilon` pixels.
///
/// Returns `None` when the result has fewer than [`MIN_POLYGON_POINTS`]
/// points; the drop is logged for observability. There is no retry with a
/// smaller tolerance and no substitute geometry.
///
/// `epsilon` must be positive; `SpriteConfig` validation enforces this
/// before any contour reaches here. `index` identifies the contour in log
/// output only.
pub fn simplify_contour(index: usize, contour: &RawContour, epsilon: f64) -> Option<Vec<DVec2>> {
    if contour.points.len() < MIN_POLYGON_POINTS {
        warn!(
            contour = index,
            points = contour.points.len(),
            "dropping contour: fewer than 3 traced points"
        );
        return None;
    }

    let curve: Vec<Point<f64>> = contour
        .points
        .iter()
        .map(|&(x, y)| Point::new(f64::from(x), f64::from(y)))
        .collect();

    let approx = approximate_polygon_dp(&curve, epsilon, true);

    if approx.len() < MIN_POLYGON_POINTS {
        warn!(
            contour = index,
            points = approx.len(),
            "dropping contour: simplifies to fewer than 3 points"
        );
        return None;
    }

    debug!(
        contour = index,
        before = curve.len(),
        after = approx.len(),
        "reduced contour complexity"
    );

    Some(approx.into_iter().map(|p| DVec2::new(p.x, p.y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::ContourKind;

    fn contour_of(points: Vec<(u32, u32)>) -> RawContour {
        RawContour {
            points,
            kind: ContourKind::Outer,
            parent: None,
        }
    }

    /// Dense points along a rectangle boundary collapse to its corners.
    fn rect_boundary(x0: u32, y0: u32, x1: u32, y1: u32) -> Vec<(u32, u32)> {
        let mut points = Vec::new();
        for x in x0..x1 {
            points.push((x, y0));
        }
        for y in y0..y1 {
            points.push((x1, y));
        }
        for x in (x0 + 1..=x1).rev() {
            points.push((x, y1));
        }
        for y in (y0 + 1..=y1).rev() {
            points.push((x0, y));
        }
        points
    }

    #[test]
    fn test_simplify_rectangle_to_corners() {
        let contour = contour_of(rect_boundary(0, 0, 20, 10));
        let polygon = simplify_contour(0, &contour, 1.2).unwrap();
        assert_eq!(polygon.len(), 4);
    }

    #[test]
    fn test_simplify_result_never_one_or_two_points() {
        // Collinear points simplify to their endpoints, which cannot close
        // into a polygon, so the contour is dropped rather than emitted.
        let contour = contour_of((0..30).map(|x| (x, 5)).collect());
        assert!(simplify_contour(0, &contour, 1.2).is_none());
    }

    #[test]
    fn test_simplify_drops_tiny_contours() {
        assert!(simplify_contour(0, &contour_of(vec![(1, 1)]), 1.2).is_none());
        assert!(simplify_contour(0, &contour_of(vec![(1, 1), (2, 2)]), 1.2).is_none());
    }

    #[test]
    fn test_simplify_keeps_triangle_corners() {
        // Dense points along the edges of triangle (0,0) (12,0) (6,9),
        // closing back toward the start as a traced boundary does.
        let contour = contour_of(vec![
            (0, 0),
            (4, 0),
            (8, 0),
            (12, 0),
            (10, 3),
            (8, 6),
            (6, 9),
            (4, 6),
            (2, 3),
        ]);
        let polygon = simplify_contour(0, &contour, 1.2).unwrap();
        assert_eq!(polygon.len(), 3);
    }

    #[test]
    fn test_simplify_huge_epsilon_drops_contour() {
        // Every point deviates less than the tolerance, so the polygon
        // collapses below 3 points and is rejected.
        let contour = contour_of(rect_boundary(0, 0, 20, 10));
        assert!(simplify_contour(0, &contour, 100.0).is_none());
    }
}
