//! Material tags and the palette handed to scene hosts
//!
//! The compiler treats tags as opaque strings. The palette only travels
//! with the manifest so a materializer can build matching shaders.

use crate::geom::SolidKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name of a material, e.g. `"wall"` or `"glass"`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialTag(String);

impl MaterialTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn wall() -> Self {
        Self::new("wall")
    }

    pub fn floor() -> Self {
        Self::new("floor")
    }

    pub fn glass() -> Self {
        Self::new("glass")
    }

    pub fn wood() -> Self {
        Self::new("wood")
    }

    pub fn fabric() -> Self {
        Self::new("fabric")
    }

    pub fn kitchen() -> Self {
        Self::new("kitchen")
    }

    /// Material used when a plan element does not name one
    pub fn default_for(kind: SolidKind) -> Self {
        match kind {
            SolidKind::Floor => Self::floor(),
            SolidKind::Window => Self::glass(),
            SolidKind::Door | SolidKind::Furniture => Self::wood(),
            SolidKind::Wall | SolidKind::Light | SolidKind::Camera => Self::wall(),
        }
    }
}

impl fmt::Display for MaterialTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MaterialTag {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A principled surface description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Linear RGBA base color
    pub base_color: [f32; 4],
    pub roughness: f32,
    pub metallic: f32,
    /// Index of refraction, for transmissive materials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ior: Option<f32>,
    /// Transmission weight in `[0, 1]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<f32>,
    /// Whether the host should alpha-blend this material
    #[serde(default)]
    pub blend: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: [0.8, 0.8, 0.8, 1.0],
            roughness: 0.5,
            metallic: 0.0,
            ior: None,
            transmission: None,
            blend: false,
        }
    }
}

impl Material {
    /// Create a new opaque material with defaults
    pub fn principled() -> Self {
        Self::default()
    }

    /// Set base color (opaque)
    pub fn base_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.base_color = [r, g, b, 1.0];
        self
    }

    /// Set alpha and enable blending when it is below one
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.base_color[3] = alpha.clamp(0.0, 1.0);
        self.blend = alpha < 1.0;
        self
    }

    /// Set roughness value
    pub fn roughness(mut self, value: f32) -> Self {
        self.roughness = value.clamp(0.0, 1.0);
        self
    }

    /// Make the material transmissive (glass-like)
    pub fn transmissive(mut self, ior: f32, transmission: f32) -> Self {
        self.ior = Some(ior);
        self.transmission = Some(transmission.clamp(0.0, 1.0));
        self
    }
}

/// Tag to material lookup, ordered by tag for stable output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialPalette(BTreeMap<MaterialTag, Material>);

impl MaterialPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// The six materials of the villa scene
    pub fn villa() -> Self {
        let mut palette = Self::new();
        palette.insert(MaterialTag::wall(), Material::principled().base_color(0.9, 0.9, 0.9));
        palette.insert(MaterialTag::floor(), Material::principled().base_color(0.8, 0.8, 0.75));
        palette.insert(
            MaterialTag::glass(),
            Material::principled()
                .base_color(0.8, 0.8, 0.9)
                .alpha(0.2)
                .roughness(0.0)
                .transmissive(1.45, 0.95),
        );
        palette.insert(MaterialTag::wood(), Material::principled().base_color(0.6, 0.4, 0.2));
        palette.insert(MaterialTag::fabric(), Material::principled().base_color(0.3, 0.5, 0.7));
        palette.insert(MaterialTag::kitchen(), Material::principled().base_color(0.2, 0.2, 0.2));
        palette
    }

    /// Add or replace a material, returning the previous one
    pub fn insert(&mut self, tag: MaterialTag, material: Material) -> Option<Material> {
        self.0.insert(tag, material)
    }

    pub fn get(&self, tag: &MaterialTag) -> Option<&Material> {
        self.0.get(tag)
    }

    pub fn contains(&self, tag: &MaterialTag) -> bool {
        self.0.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MaterialTag, &Material)> {
        self.0.iter()
    }
}
