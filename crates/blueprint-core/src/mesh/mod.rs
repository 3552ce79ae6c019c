//! Triangle meshes for compiled solids
//!
//! Each solid becomes a closed box: 6 faces with their own 4 vertices so
//! normals stay flat, 12 triangles wound counter-clockwise seen from
//! outside. Scene tessellation uses Rayon; part order follows the manifest.

use crate::geom::SolidDescriptor;
use crate::material::MaterialTag;
use crate::scene::SceneManifest;
use glam::{DVec3, Vec2, Vec3};
use rayon::prelude::*;

/// Corner indices of each face, counter-clockwise from outside
const BOX_FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1], // bottom
    [4, 5, 6, 7], // top
    [0, 1, 5, 4], // -Y
    [1, 2, 6, 5], // +X
    [2, 3, 7, 6], // +Y
    [3, 0, 4, 7], // -X
];

const FACE_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// A vertex with position, normal, and UV coordinates
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }
}

/// A triangle mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Append another mesh, offsetting its indices
    pub fn append(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + offset));
    }

    /// Raw vertex bytes for GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Axis-aligned bounds of all vertices
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        self.vertices
            .iter()
            .map(|v| Vec3::from_array(v.position))
            .fold(None, |acc, p| match acc {
                None => Some((p, p)),
                Some((min, max)) => Some((min.min(p), max.max(p))),
            })
    }

    /// Signed enclosed volume; positive when faces point outward
    pub fn signed_volume(&self) -> f64 {
        self.indices
            .chunks(3)
            .map(|tri| {
                let p = |i: u32| Vec3::from_array(self.vertices[i as usize].position).as_dvec3();
                p(tri[0]).dot(p(tri[1]).cross(p(tri[2]))) / 6.0
            })
            .sum()
    }
}

/// Tessellation of a compiled solid
pub trait SolidToMesh {
    fn to_mesh(&self) -> Mesh;
}

impl SolidToMesh for SolidDescriptor {
    fn to_mesh(&self) -> Mesh {
        let corners = self.corners();
        let mut mesh = Mesh {
            vertices: Vec::with_capacity(24),
            indices: Vec::with_capacity(36),
        };

        for face in BOX_FACES {
            let p: [DVec3; 4] = face.map(|i| corners[i]);
            let normal = (p[1] - p[0]).cross(p[2] - p[0]).normalize_or_zero().as_vec3();

            let base = mesh.vertices.len() as u32;
            for (corner, uv) in p.iter().zip(FACE_UVS) {
                mesh.vertices.push(Vertex::new(corner.as_vec3(), normal, uv));
            }
            mesh.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        mesh
    }
}

/// One tessellated solid
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPart {
    pub name: String,
    pub material: MaterialTag,
    pub mesh: Mesh,
}

/// All solids of a manifest as named meshes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneMesh {
    pub parts: Vec<MeshPart>,
}

impl SceneMesh {
    /// Tessellate every solid in manifest order
    pub fn from_manifest(manifest: &SceneManifest) -> Self {
        let parts = manifest
            .solids
            .par_iter()
            .map(|solid| MeshPart {
                name: solid.name.clone(),
                material: solid.material.clone(),
                mesh: solid.to_mesh(),
            })
            .collect();

        Self { parts }
    }

    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.triangle_count()).sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.vertex_count()).sum()
    }

    /// All parts merged into one mesh
    pub fn merged(&self) -> Mesh {
        let mut mesh = Mesh::new();
        for part in &self.parts {
            mesh.append(&part.mesh);
        }
        mesh
    }
}
