//! # Scene Document
//!
//! The scene model that receives converted sprites: a document holding
//! named collections of named mesh objects.
//!
//! Emission is an explicit call on the target collection that takes the
//! flat wireframe and the extrusion depth and returns a handle to the
//! created object. There is no ambient "active object" or edit-mode state
//! to mutate; everything the emitter needs is passed in.

use serde::Serialize;
use tracing::debug;

use crate::error::MeshError;
use crate::extrude::extrude_wireframe;
use crate::mesh::Mesh;

/// Handle to an object linked into a [`Collection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObjectHandle(usize);

/// A named mesh registered in a collection.
#[derive(Debug, Clone, Serialize)]
pub struct MeshObject {
    name: String,
    mesh: Mesh,
}

impl MeshObject {
    /// Object name (the sprite's filename stem).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The object's mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

/// A named group of mesh objects inside a [`Scene`].
#[derive(Debug, Clone, Serialize)]
pub struct Collection {
    name: String,
    objects: Vec<MeshObject>,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
        }
    }

    /// Collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of objects in the collection.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Returns the objects in insertion order.
    pub fn objects(&self) -> &[MeshObject] {
        &self.objects
    }

    /// Returns the object behind a handle.
    pub fn object(&self, handle: ObjectHandle) -> &MeshObject {
        &self.objects[handle.0]
    }

    /// Extrudes a flat wireframe and links the result into the collection.
    ///
    /// This is the single emission operation of the pipeline: it owns the
    /// extrusion step, so callers hand over the 2D closed-loop wireframe
    /// and get back a handle to the solid object.
    ///
    /// # Errors
    ///
    /// Propagates extrusion failures; nothing is linked on error.
    pub fn emit_extruded(
        &mut self,
        name: impl Into<String>,
        wire: &Mesh,
        depth: f64,
    ) -> Result<ObjectHandle, MeshError> {
        let name = name.into();
        let mesh = extrude_wireframe(wire, depth)?;

        debug!(
            object = %name,
            vertices = mesh.vertex_count(),
            edges = mesh.edge_count(),
            triangles = mesh.triangle_count(),
            "linked extruded object"
        );

        let handle = ObjectHandle(self.objects.len());
        self.objects.push(MeshObject { name, mesh });
        Ok(handle)
    }
}

/// A scene document: the single artifact one batch run produces.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    name: String,
    collections: Vec<Collection>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: Vec::new(),
        }
    }

    /// Scene name (used for the output filename stem).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds an empty collection and returns its index.
    pub fn create_collection(&mut self, name: impl Into<String>) -> usize {
        self.collections.push(Collection::new(name));
        self.collections.len() - 1
    }

    /// Returns the collections in creation order.
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Mutable access to a collection by index.
    pub fn collection_mut(&mut self, index: usize) -> &mut Collection {
        &mut self.collections[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::wireframe_from_loops;
    use glam::DVec2;

    fn square_wire() -> Mesh {
        wireframe_from_loops(&[vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ]])
    }

    #[test]
    fn test_emit_extruded_links_object() {
        let mut collection = Collection::new("SpriteGroup");
        let handle = collection
            .emit_extruded("hero", &square_wire(), 1.0)
            .unwrap();

        assert_eq!(collection.object_count(), 1);
        let object = collection.object(handle);
        assert_eq!(object.name(), "hero");
        assert_eq!(object.mesh().vertex_count(), 8);
    }

    #[test]
    fn test_emit_extruded_propagates_failure() {
        let mut collection = Collection::new("SpriteGroup");
        let result = collection.emit_extruded("bad", &Mesh::new(), 1.0);
        assert!(result.is_err());
        assert_eq!(collection.object_count(), 0);
    }

    #[test]
    fn test_emission_order_is_preserved() {
        let mut collection = Collection::new("SpriteGroup");
        collection.emit_extruded("a", &square_wire(), 1.0).unwrap();
        collection.emit_extruded("b", &square_wire(), 1.0).unwrap();

        let names: Vec<_> = collection.objects().iter().map(MeshObject::name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_scene_collections() {
        let mut scene = Scene::new("Kaito");
        let index = scene.create_collection("SpriteGroup");
        scene
            .collection_mut(index)
            .emit_extruded("hero", &square_wire(), 1.0)
            .unwrap();

        assert_eq!(scene.name(), "Kaito");
        assert_eq!(scene.collections().len(), 1);
        assert_eq!(scene.collections()[0].object_count(), 1);
    }
}
