//! OBJ file export

use crate::Result;
use crate::mesh::SceneMesh;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export a scene to OBJ, one named object per solid
pub fn export_obj(scene: &SceneMesh, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj(scene, &mut writer)?;
    writer.flush()?;
    Ok(())
}

pub(crate) fn write_obj<W: Write>(scene: &SceneMesh, writer: &mut W) -> Result<()> {
    // Header
    writeln!(writer, "# Blueprint OBJ Export")?;
    writeln!(writer, "# Objects: {}", scene.parts.len())?;
    writeln!(writer, "# Vertices: {}", scene.vertex_count())?;
    writeln!(writer, "# Triangles: {}", scene.triangle_count())?;

    // OBJ indices are global and 1-based
    let mut offset = 1;
    for part in &scene.parts {
        writeln!(writer)?;
        writeln!(writer, "o {}", part.name)?;
        writeln!(writer, "usemtl {}", part.material)?;

        for v in &part.mesh.vertices {
            writeln!(writer, "v {} {} {}", v.position[0], v.position[1], v.position[2])?;
        }
        for v in &part.mesh.vertices {
            writeln!(writer, "vt {} {}", v.uv[0], v.uv[1])?;
        }
        for v in &part.mesh.vertices {
            writeln!(writer, "vn {} {} {}", v.normal[0], v.normal[1], v.normal[2])?;
        }

        for tri in part.mesh.indices.chunks(3) {
            let [i0, i1, i2] = [tri[0] + offset, tri[1] + offset, tri[2] + offset];
            writeln!(writer, "f {i0}/{i0}/{i0} {i1}/{i1}/{i1} {i2}/{i2}/{i2}")?;
        }

        offset += part.mesh.vertex_count() as u32;
    }

    Ok(())
}
