//! Export of compiled scenes

mod obj;
mod stl;

use crate::Result;
use crate::mesh::SceneMesh;
use crate::scene::SceneManifest;
use std::path::Path;

pub use obj::export_obj;
pub use stl::export_stl;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Scene manifest (descriptors, proxies, palette)
    #[default]
    Json,
    /// Tessellated solids, one object per solid
    Obj,
    /// Tessellated solids, binary
    Stl,
}

impl ExportFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "obj" => Some(Self::Obj),
            "stl" => Some(Self::Stl),
            _ => None,
        }
    }

    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Obj => "obj",
            Self::Stl => "stl",
        }
    }

    /// Get a human-readable name for this format
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON manifest",
            Self::Obj => "OBJ",
            Self::Stl => "STL (Binary)",
        }
    }
}

/// Extension trait for exporting tessellated scenes
pub trait MeshExport {
    /// Export to file, auto-detecting a mesh format from the extension
    fn export<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Export to OBJ format
    fn export_obj<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Export to binary STL format
    fn export_stl<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl MeshExport for SceneMesh {
    fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        match ExportFormat::from_extension(path) {
            Some(ExportFormat::Obj) => self.export_obj(path),
            Some(ExportFormat::Stl) => self.export_stl(path),
            Some(ExportFormat::Json) | None => Err(crate::Error::Export(format!(
                "Not a mesh file extension: {}",
                path.display()
            ))),
        }
    }

    fn export_obj<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        export_obj(self, path.as_ref())
    }

    fn export_stl<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        export_stl(self, path.as_ref())
    }
}

/// Write a manifest in the given format, tessellating for mesh formats
pub fn export_manifest(manifest: &SceneManifest, path: &Path, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Json => manifest.save_json(path)?,
        ExportFormat::Obj => SceneMesh::from_manifest(manifest).export_obj(path)?,
        ExportFormat::Stl => SceneMesh::from_manifest(manifest).export_stl(path)?,
    }

    tracing::info!("Exported {} to {}", format.name(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        let detect = |name: &str| ExportFormat::from_extension(Path::new(name));

        assert_eq!(detect("villa.json"), Some(ExportFormat::Json));
        assert_eq!(detect("out/villa.OBJ"), Some(ExportFormat::Obj));
        assert_eq!(detect("villa.stl"), Some(ExportFormat::Stl));
        assert_eq!(detect("villa.glb"), None);
        assert_eq!(detect("villa"), None);
    }

    #[test]
    fn test_mesh_export_rejects_json() {
        let path = std::env::temp_dir().join("blueprint_test_mesh.json");
        let result = SceneMesh::default().export(path);
        assert!(matches!(result, Err(crate::Error::Export(_))));
    }
}
