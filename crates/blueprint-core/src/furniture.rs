//! Furniture footprints
//!
//! Furniture is always upright and axis aligned.

use crate::Result;
use crate::geom::{Point2, SolidDescriptor, SolidKind, make_box};
use crate::material::MaterialTag;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A box-shaped piece of furniture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    pub name: String,
    /// Center of the footprint in plan space
    pub center: Point2,
    /// Height of the bottom face above the floor
    #[serde(default)]
    pub elevation: f64,
    pub extents: DVec3,
    pub material: MaterialTag,
}

impl FurnitureItem {
    pub fn new(
        name: impl Into<String>,
        center: Point2,
        extents: DVec3,
        material: MaterialTag,
    ) -> Self {
        Self {
            name: name.into(),
            center,
            elevation: 0.0,
            extents,
            material,
        }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }
}

/// Compile a furniture item into a box descriptor
pub fn resolve_furniture(item: &FurnitureItem) -> Result<SolidDescriptor> {
    let center = DVec3::new(
        item.center.x,
        item.center.y,
        item.elevation + item.extents.z / 2.0,
    );

    Ok(make_box(SolidKind::Furniture, center, item.extents, 0.0)?
        .named(item.name.clone())
        .with_material(item.material.clone()))
}
