//! # Wireframe Extrusion
//!
//! Extrudes a flat wireframe along the Z axis to create a 3D solid.
//!
//! Every vertex is duplicated at z = depth, every edge gains a top copy and
//! spawns a side wall (two triangles), and vertical edges connect the two
//! layers. The input is a faceless wireframe, so no caps are generated.

use glam::DVec3;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Extrudes a flat wireframe along +Z by `depth`.
///
/// # Arguments
///
/// * `wire` - Flat wireframe (vertices and edges, no triangles)
/// * `depth` - Extrusion distance along Z, must be positive
///
/// # Errors
///
/// Returns a degenerate-geometry error for a non-positive depth or an empty
/// wireframe, and an invalid-topology error if the input already carries
/// triangles.
pub fn extrude_wireframe(wire: &Mesh, depth: f64) -> Result<Mesh, MeshError> {
    if depth <= 0.0 {
        return Err(MeshError::degenerate("extrusion depth must be positive"));
    }
    if wire.is_empty() {
        return Err(MeshError::degenerate("cannot extrude an empty wireframe"));
    }
    if wire.triangle_count() > 0 {
        return Err(MeshError::invalid_topology(
            "extrusion input must be a flat wireframe without triangles",
        ));
    }

    let n = wire.vertex_count() as u32;
    let mut mesh = Mesh::with_capacity(
        wire.vertex_count() * 2,
        wire.edge_count() * 2 + wire.vertex_count(),
    );

    // Bottom layer, then top layer at z + depth.
    for &v in wire.vertices() {
        mesh.add_vertex(v);
    }
    for &v in wire.vertices() {
        mesh.add_vertex(DVec3::new(v.x, v.y, v.z + depth));
    }

    // Bottom and top edge copies, plus one vertical edge per vertex.
    for &[a, b] in wire.edges() {
        mesh.add_edge(a, b);
        mesh.add_edge(a + n, b + n);
    }
    for i in 0..n {
        mesh.add_edge(i, i + n);
    }

    // Side walls: one quad per input edge, split into two triangles.
    for &[a, b] in wire.edges() {
        mesh.add_triangle(a, b, b + n);
        mesh.add_triangle(a, b + n, a + n);
    }

    Ok(mesh)
}
