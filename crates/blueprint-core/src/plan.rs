//! Declarative floor-plan description
//!
//! A [`PlanSpec`] is the only input the compiler accepts. Plans are plain
//! records, built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "width": 18.0, "depth": 9.0, "height": 2.4, "wall_thickness": 0.15,
//!   "boundary": [[0.0, 0.0], [18.0, 0.0], [18.0, 9.0], [0.0, 9.0]],
//!   "interior_walls": [{ "start": [6.0, 0.0], "end": [6.0, 9.0], "height": 2.4, "thickness": 0.15 }],
//!   "openings": [{ "type": "window", "position": [1.5, 0.0], "width": 1.2, "height": 1.4 }],
//!   "furniture": [],
//!   "camera": { "name": "Camera", "position": [9.0, -10.0, 15.0], "rotation": [0.96, 0.0, 0.0] }
//! }
//! ```

use crate::furniture::FurnitureItem;
use crate::geom::Point2;
use crate::material::{MaterialPalette, MaterialTag};
use crate::opening::Opening;
use crate::scene::{CameraProxy, DEFAULT_COLLECTION, LightProxy};
use crate::wall::WallSegment;
use crate::{Error, Result};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Door leaf thickness used when a plan does not specify one (meters)
pub const DEFAULT_DOOR_THICKNESS: f64 = 0.05;

/// Floor slab thickness used when a plan does not specify one (meters)
pub const DEFAULT_FLOOR_THICKNESS: f64 = 0.02;

fn default_door_thickness() -> f64 {
    DEFAULT_DOOR_THICKNESS
}

fn default_floor_thickness() -> f64 {
    DEFAULT_FLOOR_THICKNESS
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

/// Everything needed to compile one building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSpec {
    /// Footprint size along X
    pub width: f64,
    /// Footprint size along Y
    pub depth: f64,
    /// Outer wall height
    pub height: f64,
    /// Outer wall thickness, also the depth of window boxes
    pub wall_thickness: f64,
    /// Depth of door boxes
    #[serde(default = "default_door_thickness")]
    pub door_thickness: f64,
    #[serde(default = "default_floor_thickness")]
    pub floor_thickness: f64,
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Outer boundary corners, walked as a closed polygon
    pub boundary: Vec<Point2>,
    #[serde(default)]
    pub interior_walls: Vec<WallSegment>,
    #[serde(default)]
    pub openings: Vec<Opening>,
    #[serde(default)]
    pub furniture: Vec<FurnitureItem>,

    #[serde(default)]
    pub lights: Vec<LightProxy>,
    pub camera: CameraProxy,
    #[serde(default = "MaterialPalette::villa")]
    pub palette: MaterialPalette,
}

impl Default for PlanSpec {
    fn default() -> Self {
        Self::villa()
    }
}

impl PlanSpec {
    /// The 18 x 9 m single-storey villa
    pub fn villa() -> Self {
        let (width, depth, height, wall_thickness) = (18.0, 9.0, 2.4, 0.15);
        let p = Point2::new;

        let interior =
            |start: Point2, end: Point2| WallSegment::new(start, end, height, wall_thickness);
        let interior_walls = vec![
            interior(p(6.0, 0.0), p(6.0, 9.0)),
            interior(p(9.0, 9.0), p(18.0, 9.0)),
            interior(p(9.0, 0.0), p(9.0, 9.0)),
            interior(p(12.0, 5.0), p(18.0, 5.0)),
            interior(p(15.0, 5.0), p(15.0, 9.0)),
        ];

        let window = |x: f64, y: f64| Opening::window(p(x, y), 1.2, 1.4);
        let door = |x: f64, y: f64, w: f64| Opening::door(p(x, y), w, 2.1);
        let openings = vec![
            window(1.5, 0.0),
            window(4.5, 0.0),
            window(13.5, 0.0),
            window(16.5, 0.0),
            window(0.0, 3.0).rotated(true),
            window(18.0, 7.0).rotated(true),
            door(9.0, 2.0, 0.9),
            door(9.0, 6.0, 0.9),
            door(12.0, 6.0, 0.9),
            door(12.0, 8.0, 0.9).rotated(true),
            door(15.0, 7.0, 0.9),
            door(9.0, 0.5, 1.2).rotated(true),
        ];

        let item = |name: &str, x: f64, y: f64, size: (f64, f64, f64), material: MaterialTag| {
            FurnitureItem::new(name, p(x, y), DVec3::new(size.0, size.1, size.2), material)
        };
        let furniture = vec![
            item("Sofa", 3.0, 6.0, (2.5, 0.9, 0.8), MaterialTag::fabric()),
            item("CoffeeTable", 5.0, 6.0, (1.2, 0.8, 0.5), MaterialTag::wood()),
            item("DiningTable", 5.0, 3.0, (1.8, 1.0, 0.8), MaterialTag::wood()),
            item("KitchenCounter", 14.0, 8.0, (2.0, 0.6, 0.9), MaterialTag::kitchen()),
            item("Bed1", 3.0, 2.0, (2.0, 1.4, 0.6), MaterialTag::fabric()),
            item("Bed2", 3.0, 7.0, (2.0, 1.4, 0.6), MaterialTag::fabric()),
            item("Bed3", 16.5, 7.0, (2.0, 1.4, 0.6), MaterialTag::fabric()),
            item("Toilet", 14.0, 3.5, (0.6, 0.4, 0.4), MaterialTag::wall()),
            item("Shower", 13.0, 2.0, (1.0, 1.0, 0.2), MaterialTag::wall()),
        ];

        Self {
            width,
            depth,
            height,
            wall_thickness,
            door_thickness: DEFAULT_DOOR_THICKNESS,
            floor_thickness: DEFAULT_FLOOR_THICKNESS,
            collection: DEFAULT_COLLECTION.to_string(),
            boundary: vec![p(0.0, 0.0), p(width, 0.0), p(width, depth), p(0.0, depth)],
            interior_walls,
            openings,
            furniture,
            lights: vec![
                LightProxy::sun("Sun", DVec3::new(5.0, 5.0, 10.0), 2.0),
                LightProxy::area(
                    "AmbientLight",
                    DVec3::new(9.0, 5.0, 5.0),
                    DVec3::new(width, depth, 1.0),
                    50.0,
                ),
            ],
            camera: CameraProxy::new(
                "FloorPlanCamera",
                DVec3::new(9.0, -10.0, 15.0),
                DVec3::new(55_f64.to_radians(), 0.0, 0.0),
            ),
            palette: MaterialPalette::villa(),
        }
    }

    /// Parse a plan from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a plan from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Save the plan as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Outer boundary as wall segments, wrapping the last corner to the first
    pub fn outer_walls(&self) -> impl Iterator<Item = WallSegment> + '_ {
        let n = self.boundary.len();
        (0..n).map(move |i| {
            WallSegment::new(
                self.boundary[i],
                self.boundary[(i + 1) % n],
                self.height,
                self.wall_thickness,
            )
        })
    }

    /// Check plan-wide parameters; per-element geometry is checked during assembly
    pub fn validate(&self) -> Result<()> {
        let dimensions = [
            ("width", self.width),
            ("depth", self.depth),
            ("height", self.height),
            ("wall_thickness", self.wall_thickness),
            ("door_thickness", self.door_thickness),
            ("floor_thickness", self.floor_thickness),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidPlan(format!("{name} must be positive, got {value}")));
            }
        }

        if self.boundary.len() < 3 {
            return Err(Error::InvalidPlan(format!(
                "boundary needs at least 3 corners, got {}",
                self.boundary.len()
            )));
        }

        Ok(())
    }
}
