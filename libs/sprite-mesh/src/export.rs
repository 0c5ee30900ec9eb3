//! # Scene Export
//!
//! Serializes a [`Scene`] to a Wavefront OBJ artifact: one `o` block per
//! mesh object, vertices in object order with global 1-based indexing,
//! triangles as `f` records. Objects without triangles fall back to `l`
//! records so wireframes survive a round trip through viewers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::MeshError;
use crate::scene::Scene;

/// Writes the scene in Wavefront OBJ format.
pub fn write_obj<W: Write>(scene: &Scene, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "# scene: {}", scene.name())?;

    // OBJ face indices are 1-based and global across the file.
    let mut base = 1usize;

    for collection in scene.collections() {
        writeln!(writer, "g {}", collection.name())?;

        for object in collection.objects() {
            let mesh = object.mesh();
            writeln!(writer, "o {}", object.name())?;

            for v in mesh.vertices() {
                writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
            }

            if mesh.triangle_count() > 0 {
                for t in mesh.triangles() {
                    writeln!(
                        writer,
                        "f {} {} {}",
                        base + t[0] as usize,
                        base + t[1] as usize,
                        base + t[2] as usize
                    )?;
                }
            } else {
                for e in mesh.edges() {
                    writeln!(writer, "l {} {}", base + e[0] as usize, base + e[1] as usize)?;
                }
            }

            base += mesh.vertex_count();
        }
    }

    Ok(())
}

/// Saves the scene as `<name>.obj` inside `output_dir`, creating the
/// directory if needed. Returns the path written.
pub fn save_obj(scene: &Scene, output_dir: &Path) -> Result<std::path::PathBuf, MeshError> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(format!("{}.obj", scene.name()));

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    write_obj(scene, &mut writer)?;
    writer.flush()?;

    info!(path = %path.display(), "saved scene");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::wireframe_from_loops;
    use glam::DVec2;

    fn test_scene() -> Scene {
        let wire = wireframe_from_loops(&[vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ]]);

        let mut scene = Scene::new("test");
        let index = scene.create_collection("SpriteGroup");
        let group = scene.collection_mut(index);
        group.emit_extruded("hero", &wire, 1.0).unwrap();
        group.emit_extruded("villain", &wire, 1.0).unwrap();
        scene
    }

    fn rendered(scene: &Scene) -> String {
        let mut buffer = Vec::new();
        write_obj(scene, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_obj_object_blocks() {
        let text = rendered(&test_scene());
        assert!(text.contains("g SpriteGroup"));
        assert!(text.contains("o hero"));
        assert!(text.contains("o villain"));
    }

    #[test]
    fn test_write_obj_counts() {
        let text = rendered(&test_scene());
        let vertices = text.lines().filter(|l| l.starts_with("v ")).count();
        let faces = text.lines().filter(|l| l.starts_with("f ")).count();

        // Two extruded squares: 8 vertices and 8 triangles each.
        assert_eq!(vertices, 16);
        assert_eq!(faces, 16);
    }

    #[test]
    fn test_write_obj_indices_are_global_and_one_based() {
        let text = rendered(&test_scene());
        let mut indices = Vec::new();
        for line in text.lines().filter(|l| l.starts_with("f ")) {
            for token in line.split_whitespace().skip(1) {
                indices.push(token.parse::<usize>().unwrap());
            }
        }

        assert_eq!(*indices.iter().min().unwrap(), 1);
        // The second object's faces must reference vertices past the first
        // object's 8.
        assert!(*indices.iter().max().unwrap() > 8);
        assert!(indices.iter().all(|&i| i <= 16));
    }

    #[test]
    fn test_write_obj_wireframe_falls_back_to_lines() {
        // A single isolated vertex extrudes to an edge with no triangles,
        // so the writer must emit `l` records instead of faces.
        let lone = wireframe_from_loops(&[vec![DVec2::new(2.0, 2.0)]]);

        let mut scene = Scene::new("wires");
        let index = scene.create_collection("SpriteGroup");
        scene
            .collection_mut(index)
            .emit_extruded("pin", &lone, 1.0)
            .unwrap();

        let text = rendered(&scene);
        assert!(text.lines().any(|l| l.starts_with("l ")));
        assert!(!text.lines().any(|l| l.starts_with("f ")));
    }
}
