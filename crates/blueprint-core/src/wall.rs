//! Wall segment resolution
//!
//! A wall is a straight run between two plan points, extruded to a box of
//! the wall's thickness and height. Which local axis carries the length is
//! decided by the segment's direction:
//!
//! 1. mostly along X (`|dy| < |dx|`): length on X, no rotation
//! 2. along Y (`|dx| < EPSILON`): length on Y, no rotation
//! 3. anything else: length on Y, rotated by `atan2(dy, dx) - PI/2`

use crate::geom::{EPSILON, Point2, SolidDescriptor, SolidKind, distance, make_box, midpoint};
use crate::{Error, Result};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// A straight wall between two plan points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub start: Point2,
    pub end: Point2,
    pub height: f64,
    pub thickness: f64,
}

/// How a segment's box is extruded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallOrientation {
    /// Length along X
    Horizontal,
    /// Length along Y
    Vertical,
    /// Length along local Y, rotated about Z
    Diagonal,
}

impl WallSegment {
    pub fn new(start: Point2, end: Point2, height: f64, thickness: f64) -> Self {
        Self {
            start,
            end,
            height,
            thickness,
        }
    }

    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// Midpoint of the run, in plan space
    pub fn center(&self) -> Point2 {
        midpoint(self.start, self.end)
    }

    pub fn is_horizontal(&self) -> bool {
        let d = self.end - self.start;
        d.y.abs() < d.x.abs()
    }

    pub fn orientation(&self) -> WallOrientation {
        let d = self.end - self.start;
        if self.is_horizontal() {
            WallOrientation::Horizontal
        } else if d.x.abs() < EPSILON {
            WallOrientation::Vertical
        } else {
            WallOrientation::Diagonal
        }
    }

    /// Rotation about Z applied to the extruded box
    pub fn rotation(&self) -> f64 {
        match self.orientation() {
            WallOrientation::Horizontal | WallOrientation::Vertical => 0.0,
            WallOrientation::Diagonal => {
                let d = self.end - self.start;
                d.y.atan2(d.x) - FRAC_PI_2
            }
        }
    }
}

/// Compile a wall segment into a box descriptor
pub fn resolve_wall(segment: &WallSegment) -> Result<SolidDescriptor> {
    if !segment.start.is_finite() || !segment.end.is_finite() {
        return Err(Error::InvalidGeometry(format!(
            "non-finite wall endpoints: {} -> {}",
            segment.start, segment.end
        )));
    }

    let length = segment.length();
    if length < EPSILON {
        return Err(Error::DegenerateSegment { length });
    }

    let mid = segment.center();
    let center = DVec3::new(mid.x, mid.y, segment.height / 2.0);

    let extents = match segment.orientation() {
        WallOrientation::Horizontal => DVec3::new(length, segment.thickness, segment.height),
        WallOrientation::Vertical | WallOrientation::Diagonal => {
            DVec3::new(segment.thickness, length, segment.height)
        }
    };

    make_box(SolidKind::Wall, center, extents, segment.rotation())
}
