//! # Coordinate Normalization
//!
//! Maps pixel coordinates (origin top-left, Y down) into world coordinates
//! (origin at the image center, Y up), scaled by a pixels-per-unit factor.

use glam::DVec2;

/// Maps one pixel-space point into world space.
///
/// ```text
/// worldX = (px - W/2 + 0.5) / PPU
/// worldY = (-py + H/2 - 0.5) / PPU
/// ```
///
/// The `-py` flips the vertical axis; the half-pixel offsets sample pixel
/// centers rather than corners.
#[inline]
pub fn normalize_point(point: DVec2, width: u32, height: u32, pixels_per_unit: f64) -> DVec2 {
    let half_width = f64::from(width) * 0.5;
    let half_height = f64::from(height) * 0.5;
    DVec2::new(
        (point.x - half_width + 0.5) / pixels_per_unit,
        (-point.y + half_height - 0.5) / pixels_per_unit,
    )
}

/// Maps an entire pixel-space polygon into world space, preserving order.
pub fn normalize_loop(
    points: &[DVec2],
    width: u32,
    height: u32,
    pixels_per_unit: f64,
) -> Vec<DVec2> {
    points
        .iter()
        .map(|&p| normalize_point(p, width, height, pixels_per_unit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_point_is_pure() {
        let p = DVec2::new(37.0, 81.0);
        let a = normalize_point(p, 100, 100, 150.0);
        let b = normalize_point(p, 100, 100, 150.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_normalize_origin_pixel() {
        // Pixel (0, 0) of a 100x100 image lands near (-0.333, 0.333) at
        // 150 pixels per unit.
        let world = normalize_point(DVec2::ZERO, 100, 100, 150.0);
        assert!((world.x - (-0.33)).abs() < 0.005);
        assert!((world.y - 0.33).abs() < 0.005);
    }

    #[test]
    fn test_normalize_degenerate_dimensions_reduce_to_offsets() {
        // With PPU = 1 and W = H = 0 the mapping collapses to the raw
        // half-pixel offsets: worldX = px + 0.5, worldY = -py - 0.5.
        let world = normalize_point(DVec2::new(3.0, 7.0), 0, 0, 1.0);
        assert_eq!(world, DVec2::new(3.5, -7.5));
    }

    #[test]
    fn test_normalize_center_pixel_is_near_origin() {
        // The pixel just below-right of center maps to (+0.5, -0.5) pixels
        // from the origin before scaling.
        let world = normalize_point(DVec2::new(50.0, 50.0), 100, 100, 1.0);
        assert_eq!(world, DVec2::new(0.5, -0.5));
    }

    #[test]
    fn test_normalize_y_axis_is_flipped() {
        let top = normalize_point(DVec2::new(10.0, 0.0), 64, 64, 150.0);
        let bottom = normalize_point(DVec2::new(10.0, 63.0), 64, 64, 150.0);
        assert!(top.y > bottom.y);
    }

    #[test]
    fn test_normalize_loop_preserves_order_and_length() {
        let points = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
        ];
        let normalized = normalize_loop(&points, 20, 20, 2.0);
        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[0], normalize_point(points[0], 20, 20, 2.0));
        assert_eq!(normalized[2], normalize_point(points[2], 20, 20, 2.0));
    }
}
