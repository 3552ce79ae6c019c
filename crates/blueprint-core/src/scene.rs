//! Scene manifest handed to a scene host
//!
//! A manifest is the complete output of one layout build: the ordered
//! solids, the light and camera proxies (pass-through metadata, not
//! geometry), the grouping name and the material palette.

use crate::Result;
use crate::geom::{SolidDescriptor, SolidKind};
use crate::material::MaterialPalette;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default name of the grouping all scene objects are placed in
pub const DEFAULT_COLLECTION: &str = "FloorPlan";

/// Light type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    /// Directional light, position only matters for display
    Sun,
    /// Rectangular emitter scaled by `size`
    Area,
}

/// A light to be created by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightProxy {
    pub name: String,
    pub kind: LightKind,
    pub position: DVec3,
    /// XYZ Euler angles in radians
    #[serde(default)]
    pub rotation: DVec3,
    /// Light energy in host units
    pub intensity: f64,
    /// Emitter scale (area lights)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<DVec3>,
}

impl LightProxy {
    pub fn sun(name: impl Into<String>, position: DVec3, intensity: f64) -> Self {
        Self {
            name: name.into(),
            kind: LightKind::Sun,
            position,
            rotation: DVec3::ZERO,
            intensity,
            size: None,
        }
    }

    pub fn area(name: impl Into<String>, position: DVec3, size: DVec3, intensity: f64) -> Self {
        Self {
            name: name.into(),
            kind: LightKind::Area,
            position,
            rotation: DVec3::ZERO,
            intensity,
            size: Some(size),
        }
    }
}

/// The viewpoint the host should render from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraProxy {
    pub name: String,
    pub position: DVec3,
    /// XYZ Euler angles in radians
    pub rotation: DVec3,
    /// Whether this becomes the scene's active camera
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl CameraProxy {
    pub fn new(name: impl Into<String>, position: DVec3, rotation: DVec3) -> Self {
        Self {
            name: name.into(),
            position,
            rotation,
            active: true,
        }
    }
}

/// One item of the ordered manifest
#[derive(Debug, Clone, Copy)]
pub enum ManifestEntry<'a> {
    Solid(&'a SolidDescriptor),
    Light(&'a LightProxy),
    Camera(&'a CameraProxy),
}

impl<'a> ManifestEntry<'a> {
    pub fn kind(&self) -> SolidKind {
        match self {
            Self::Solid(solid) => solid.kind,
            Self::Light(_) => SolidKind::Light,
            Self::Camera(_) => SolidKind::Camera,
        }
    }

    /// Object name, borrowed from the manifest
    pub fn name(&self) -> &'a str {
        match self {
            Self::Solid(solid) => &solid.name,
            Self::Light(light) => &light.name,
            Self::Camera(camera) => &camera.name,
        }
    }
}

/// The complete output of a layout build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneManifest {
    /// Grouping name for every object in the scene
    pub collection: String,
    /// Floor, outer walls, interior walls, windows, doors, furniture
    pub solids: Vec<SolidDescriptor>,
    pub lights: Vec<LightProxy>,
    pub camera: CameraProxy,
    pub palette: MaterialPalette,
}

impl SceneManifest {
    /// Every entry in manifest order: solids, then lights, then the camera
    pub fn entries(&self) -> impl Iterator<Item = ManifestEntry<'_>> {
        self.solids
            .iter()
            .map(ManifestEntry::Solid)
            .chain(self.lights.iter().map(ManifestEntry::Light))
            .chain(std::iter::once(ManifestEntry::Camera(&self.camera)))
    }

    /// Solids of one kind, in manifest order
    pub fn solids_of(&self, kind: SolidKind) -> impl Iterator<Item = &SolidDescriptor> {
        self.solids.iter().filter(move |s| s.kind == kind)
    }

    /// Number of manifest entries of one kind
    pub fn count(&self, kind: SolidKind) -> usize {
        self.entries().filter(|e| e.kind() == kind).count()
    }

    /// Look up an entry by object name
    pub fn find(&self, name: &str) -> Option<ManifestEntry<'_>> {
        self.entries().find(|e| e.name() == name)
    }

    /// World-space bounds of all solids
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        self.solids
            .iter()
            .map(SolidDescriptor::bounds)
            .reduce(|(amin, amax), (bmin, bmax)| (amin.min(bmin), amax.max(bmax)))
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the manifest as pretty-printed JSON
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
