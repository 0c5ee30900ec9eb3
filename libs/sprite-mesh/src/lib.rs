//! # Sprite Mesh
//!
//! Mesh topology, extrusion, and scene assembly for sprite outlines.
//!
//! ## Architecture
//!
//! ```text
//! sprite-outline (SpriteOutline) → sprite-mesh (Scene) → .obj artifact
//! ```
//!
//! Outline loops become a flat vertex/edge wireframe (one closed edge
//! cycle per loop), the wireframe is extruded along Z into a solid, and
//! the solid is linked as a named object into a scene collection. The
//! whole scene is finally serialized as a single Wavefront OBJ file.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec2;
//! use sprite_mesh::{topology, Scene};
//!
//! let loops = vec![vec![
//!     DVec2::new(-0.5, -0.5),
//!     DVec2::new(0.5, -0.5),
//!     DVec2::new(0.5, 0.5),
//!     DVec2::new(-0.5, 0.5),
//! ]];
//! let wire = topology::wireframe_from_loops(&loops);
//!
//! let mut scene = Scene::new("sprites");
//! let group = scene.create_collection("SpriteGroup");
//! scene.collection_mut(group).emit_extruded("hero", &wire, 1.0).unwrap();
//! ```

pub mod error;
pub mod export;
pub mod extrude;
pub mod mesh;
pub mod scene;
pub mod topology;

pub use error::MeshError;
pub use mesh::Mesh;
pub use scene::{Collection, MeshObject, ObjectHandle, Scene};
