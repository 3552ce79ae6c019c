//! Window and door placement
//!
//! Openings carry no reference to their host wall. The `rotated` flag says
//! which way the host runs: `false` for a wall along X, `true` for a wall
//! along Y. Callers only see [`resolve_opening`], so an explicit wall
//! reference can replace the flag later without touching them.
//!
//! Rotated windows are shifted by half the wall thickness along +Y;
//! rotated doors are not. Openings are never turned to follow a diagonal
//! host wall.

use crate::Result;
use crate::geom::{Point2, SolidDescriptor, SolidKind, make_box};
use crate::material::MaterialTag;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Sill height used when a window does not specify one (meters)
pub const DEFAULT_SILL_HEIGHT: f64 = 0.9;

fn default_sill_height() -> f64 {
    DEFAULT_SILL_HEIGHT
}

/// Window or door
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OpeningKind {
    Window {
        /// Floor to bottom edge of the pane
        #[serde(default = "default_sill_height")]
        sill_height: f64,
    },
    Door,
}

impl OpeningKind {
    /// A window at the default sill height
    pub fn window() -> Self {
        Self::Window {
            sill_height: DEFAULT_SILL_HEIGHT,
        }
    }

    /// Height of the opening's bottom edge above the floor
    pub fn sill_height(&self) -> f64 {
        match self {
            Self::Window { sill_height } => *sill_height,
            Self::Door => 0.0,
        }
    }

    pub fn solid_kind(&self) -> SolidKind {
        match self {
            Self::Window { .. } => SolidKind::Window,
            Self::Door => SolidKind::Door,
        }
    }
}

/// An opening placed on a wall's centerline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    #[serde(flatten)]
    pub kind: OpeningKind,
    pub position: Point2,
    pub width: f64,
    pub height: f64,
    /// Host wall runs along Y
    #[serde(default)]
    pub rotated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<MaterialTag>,
}

impl Opening {
    pub fn window(position: Point2, width: f64, height: f64) -> Self {
        Self {
            kind: OpeningKind::window(),
            position,
            width,
            height,
            rotated: false,
            material: None,
        }
    }

    pub fn door(position: Point2, width: f64, height: f64) -> Self {
        Self {
            kind: OpeningKind::Door,
            position,
            width,
            height,
            rotated: false,
            material: None,
        }
    }

    /// Mark the host wall as running along Y
    pub fn rotated(mut self, rotated: bool) -> Self {
        self.rotated = rotated;
        self
    }

    pub fn with_sill_height(mut self, sill_height: f64) -> Self {
        if let OpeningKind::Window { sill_height: sill } = &mut self.kind {
            *sill = sill_height;
        }
        self
    }

    pub fn with_material(mut self, material: MaterialTag) -> Self {
        self.material = Some(material);
        self
    }

    pub fn is_window(&self) -> bool {
        matches!(self.kind, OpeningKind::Window { .. })
    }

    pub fn is_door(&self) -> bool {
        matches!(self.kind, OpeningKind::Door)
    }

    /// Material tag, falling back to the default for the opening kind
    pub fn material_tag(&self) -> MaterialTag {
        self.material
            .clone()
            .unwrap_or_else(|| MaterialTag::default_for(self.kind.solid_kind()))
    }
}

/// Compile an opening into a box descriptor
///
/// `thickness` is the depth of the box across the host wall.
pub fn resolve_opening(opening: &Opening, thickness: f64) -> Result<SolidDescriptor> {
    let z = opening.kind.sill_height() + opening.height / 2.0;

    let (center, extents) = if opening.rotated {
        let nudge = if opening.is_window() { thickness / 2.0 } else { 0.0 };
        (
            DVec3::new(opening.position.x, opening.position.y + nudge, z),
            DVec3::new(thickness, opening.width, opening.height),
        )
    } else {
        (
            DVec3::new(opening.position.x, opening.position.y, z),
            DVec3::new(opening.width, thickness, opening.height),
        )
    };

    let solid = make_box(opening.kind.solid_kind(), center, extents, 0.0)?;
    Ok(solid.with_material(opening.material_tag()))
}
