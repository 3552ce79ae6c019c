//! The compiler's output unit

use crate::material::MaterialTag;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// What a manifest entry represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolidKind {
    Floor,
    Wall,
    Window,
    Door,
    Furniture,
    Light,
    Camera,
}

impl SolidKind {
    /// Whether entries of this kind are boxes that must render
    pub fn is_geometry(self) -> bool {
        !matches!(self, Self::Light | Self::Camera)
    }

    /// Lowercase label used in logs and summaries
    pub fn label(self) -> &'static str {
        match self {
            Self::Floor => "floor",
            Self::Wall => "wall",
            Self::Window => "window",
            Self::Door => "door",
            Self::Furniture => "furniture",
            Self::Light => "light",
            Self::Camera => "camera",
        }
    }
}

/// A positioned, oriented, sized box plus a material tag
///
/// `extents` are full sizes along the box's local axes before the
/// Z-rotation is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidDescriptor {
    pub kind: SolidKind,
    pub name: String,
    pub center: DVec3,
    pub extents: DVec3,
    /// Rotation about the vertical axis in radians
    #[serde(default)]
    pub rotation_z: f64,
    pub material: MaterialTag,
}

impl SolidDescriptor {
    pub(crate) fn new(kind: SolidKind, center: DVec3, extents: DVec3, rotation_z: f64) -> Self {
        Self {
            kind,
            name: String::new(),
            center,
            extents,
            rotation_z,
            material: MaterialTag::default_for(kind),
        }
    }

    /// Set the object name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the material tag
    pub fn with_material(mut self, material: MaterialTag) -> Self {
        self.material = material;
        self
    }

    /// Half extents along the local axes
    pub fn half_extents(&self) -> DVec3 {
        self.extents * 0.5
    }

    /// Box volume in cubic meters
    pub fn volume(&self) -> f64 {
        self.extents.x * self.extents.y * self.extents.z
    }

    /// The eight corners in world space, bottom face first (counter-clockwise
    /// seen from above), then the top face in the same order
    pub fn corners(&self) -> [DVec3; 8] {
        let h = self.half_extents();
        let (sin, cos) = self.rotation_z.sin_cos();
        let rotate = |x: f64, y: f64| DVec2::new(x * cos - y * sin, x * sin + y * cos);

        let footprint = [
            rotate(-h.x, -h.y),
            rotate(h.x, -h.y),
            rotate(h.x, h.y),
            rotate(-h.x, h.y),
        ];

        let mut corners = [DVec3::ZERO; 8];
        for (i, p) in footprint.iter().enumerate() {
            corners[i] = self.center + DVec3::new(p.x, p.y, -h.z);
            corners[i + 4] = self.center + DVec3::new(p.x, p.y, h.z);
        }
        corners
    }

    /// World-space axis-aligned bounds `(min, max)`
    pub fn bounds(&self) -> (DVec3, DVec3) {
        let corners = self.corners();
        corners[1..]
            .iter()
            .fold((corners[0], corners[0]), |(min, max), c| (min.min(*c), max.max(*c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_bounds_axis_aligned() {
        let solid = SolidDescriptor::new(
            SolidKind::Wall,
            DVec3::new(9.0, 0.0, 1.2),
            DVec3::new(18.0, 0.15, 2.4),
            0.0,
        );

        let (min, max) = solid.bounds();
        assert_abs_diff_eq!(min, DVec3::new(0.0, -0.075, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(max, DVec3::new(18.0, 0.075, 2.4), epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_turn_swaps_footprint() {
        let solid = SolidDescriptor::new(
            SolidKind::Wall,
            DVec3::ZERO,
            DVec3::new(4.0, 1.0, 2.0),
            FRAC_PI_2,
        );

        let (min, max) = solid.bounds();
        assert_abs_diff_eq!(min, DVec3::new(-0.5, -2.0, -1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(max, DVec3::new(0.5, 2.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_default_material_follows_kind() {
        let window = SolidDescriptor::new(SolidKind::Window, DVec3::ZERO, DVec3::ONE, 0.0);
        assert_eq!(window.material, MaterialTag::glass());
        assert_abs_diff_eq!(window.volume(), 1.0);
    }

    #[test]
    fn test_geometry_kinds() {
        assert!(SolidKind::Wall.is_geometry());
        assert!(!SolidKind::Light.is_geometry());
        assert!(!SolidKind::Camera.is_geometry());
    }
}
