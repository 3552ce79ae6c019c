//! STL file export (Binary format)
//!
//! STL carries no object names or materials; all solids are written as
//! one triangle soup.

use crate::Result;
use crate::mesh::SceneMesh;
use glam::Vec3;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export a scene to binary STL format
///
/// Binary STL format:
/// - 80 bytes: Header (arbitrary text)
/// - 4 bytes: Number of triangles (u32 little-endian)
/// - For each triangle (50 bytes):
///   - 12 bytes: Normal vector (3 x f32 little-endian)
///   - 36 bytes: 3 vertices (9 x f32 little-endian)
///   - 2 bytes: Attribute byte count (usually 0)
pub fn export_stl(scene: &SceneMesh, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    // Header (80 bytes, padded with spaces)
    let header = format!(
        "Blueprint STL Export - {} objects, {} triangles",
        scene.parts.len(),
        scene.triangle_count()
    );
    let mut header_bytes = [b' '; 80];
    let header_len = header.len().min(80);
    header_bytes[..header_len].copy_from_slice(&header.as_bytes()[..header_len]);
    writer.write_all(&header_bytes)?;

    let num_triangles = scene.triangle_count() as u32;
    writer.write_all(&num_triangles.to_le_bytes())?;

    for part in &scene.parts {
        let mesh = &part.mesh;
        let vertex = |i: u32| Vec3::from_array(mesh.vertices[i as usize].position);

        for tri in mesh.indices.chunks(3) {
            let (v0, v1, v2) = (vertex(tri[0]), vertex(tri[1]), vertex(tri[2]));

            // STL expects face normals
            let normal = (v1 - v0).cross(v2 - v0).try_normalize().unwrap_or(Vec3::Z);

            for value in [normal, v0, v1, v2].iter().flat_map(|v| v.to_array()) {
                writer.write_all(&value.to_le_bytes())?;
            }
            writer.write_all(&0u16.to_le_bytes())?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{SolidKind, make_box};
    use crate::mesh::{MeshPart, SolidToMesh};
    use glam::DVec3;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("blueprint_test_{}", name))
    }

    #[test]
    fn test_export_stl_two_boxes() {
        let part = |name: &str| {
            let solid = make_box(SolidKind::Furniture, DVec3::ZERO, DVec3::ONE, 0.0).unwrap();
            MeshPart {
                name: name.to_string(),
                material: solid.material.clone(),
                mesh: solid.to_mesh(),
            }
        };
        let scene = SceneMesh {
            parts: vec![part("A"), part("B")],
        };

        let path = temp_path("two_boxes.stl");
        export_stl(&scene, &path).unwrap();

        // 80 (header) + 4 (count) + 50 * 24 triangles
        let metadata = std::fs::metadata(&path).unwrap();
        assert_eq!(metadata.len(), 84 + 50 * 24);

        // Clean up
        let _ = std::fs::remove_file(&path);
    }
}
