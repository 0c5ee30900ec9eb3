//! # Topology Builder
//!
//! Converts normalized outline loops into a flat vertex/edge wireframe.
//!
//! Every loop becomes its own closed edge cycle: vertices are appended in
//! point-arrival order, consecutive points are connected, and a closing
//! edge joins the loop's last vertex back to its first. Loops never share
//! vertices; contours that happen to touch are represented with coincident
//! but distinct vertices.

use glam::{DVec2, DVec3};

use crate::mesh::Mesh;

/// Builds a flat wireframe mesh (all z = 0) from outline loops.
///
/// Output is deterministic and order-preserving: vertex indices follow
/// point arrival order, edges follow loop order.
///
/// Degenerate loops should have been rejected upstream but are tolerated:
/// a 1-point loop becomes an isolated vertex (no self-loop edge) and a
/// 2-point loop a single edge (no duplicate closing edge).
pub fn wireframe_from_loops(loops: &[Vec<DVec2>]) -> Mesh {
    let total_points: usize = loops.iter().map(Vec::len).sum();
    let mut mesh = Mesh::with_capacity(total_points, total_points);

    for polygon in loops {
        let start = mesh.vertex_count() as u32;
        let mut previous = None;

        for point in polygon {
            let index = mesh.add_vertex(DVec3::new(point.x, point.y, 0.0));
            if let Some(prev) = previous {
                mesh.add_edge(prev, index);
            }
            previous = Some(index);
        }

        if polygon.len() >= 3 {
            if let Some(last) = previous {
                mesh.add_edge(last, start);
            }
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_loop(offset: f64) -> Vec<DVec2> {
        vec![
            DVec2::new(offset, 0.0),
            DVec2::new(offset + 1.0, 0.0),
            DVec2::new(offset + 1.0, 1.0),
            DVec2::new(offset, 1.0),
        ]
    }

    #[test]
    fn test_single_loop_closed_cycle() {
        let mesh = wireframe_from_loops(&[square_loop(0.0)]);

        // N points yield exactly N vertices and N edges.
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.edge_count(), 4);

        // Every vertex has degree 2: a single closed cycle.
        assert!(mesh.vertex_degrees().iter().all(|&d| d == 2));
        assert!(mesh.validate());
    }

    #[test]
    fn test_vertices_are_flat_and_ordered() {
        let polygon = square_loop(3.0);
        let mesh = wireframe_from_loops(&[polygon.clone()]);

        for (index, point) in polygon.iter().enumerate() {
            let v = mesh.vertex(index as u32);
            assert_eq!(v, DVec3::new(point.x, point.y, 0.0));
        }
    }

    #[test]
    fn test_two_loops_share_no_edges() {
        let triangle = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.5, 1.0),
        ];
        let mesh = wireframe_from_loops(&[triangle, square_loop(5.0)]);

        // N + M vertices and N + M edges.
        assert_eq!(mesh.vertex_count(), 7);
        assert_eq!(mesh.edge_count(), 7);

        // No edge connects a triangle vertex (0..3) to a square vertex (3..7).
        for [a, b] in mesh.edges() {
            assert_eq!(*a < 3, *b < 3, "edge {a}-{b} crosses loops");
        }
    }

    #[test]
    fn test_touching_loops_keep_distinct_vertices() {
        // Both loops contain the point (1.0, 0.0); no deduplication happens.
        let left = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(0.0, 1.0),
        ];
        let right = vec![
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 1.0),
        ];
        let mesh = wireframe_from_loops(&[left, right]);
        assert_eq!(mesh.vertex_count(), 6);
    }

    #[test]
    fn test_single_point_loop_is_isolated_vertex() {
        let mesh = wireframe_from_loops(&[vec![DVec2::new(1.0, 1.0)]]);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.edge_count(), 0);
        assert!(mesh.validate());
    }

    #[test]
    fn test_two_point_loop_is_single_edge() {
        let mesh = wireframe_from_loops(&[vec![DVec2::ZERO, DVec2::X]]);
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.edge_count(), 1);
        assert!(mesh.validate());
    }

    #[test]
    fn test_empty_input_is_empty_mesh() {
        let mesh = wireframe_from_loops(&[]);
        assert!(mesh.is_empty());
    }
}
