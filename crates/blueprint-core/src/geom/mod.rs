//! Box descriptor math shared by every resolver
//!
//! All solids produced by the compiler are boxes: a center, full extents
//! along the local X/Y/Z axes, and a rotation about the vertical axis.

mod solid;

use crate::{Error, Result};
use glam::{DVec2, DVec3};

pub use solid::{SolidDescriptor, SolidKind};

/// Plan-space coordinate in meters, origin at the building's bottom-left corner
pub type Point2 = DVec2;

/// Length below which two plan points are considered coincident (meters)
pub const EPSILON: f64 = 1e-6;

/// Midpoint of two plan points
pub fn midpoint(a: Point2, b: Point2) -> Point2 {
    (a + b) * 0.5
}

/// Euclidean distance between two plan points
pub fn distance(a: Point2, b: Point2) -> f64 {
    a.distance(b)
}

/// Build a box descriptor, rejecting non-positive or non-finite extents
///
/// The descriptor gets the default material for `kind` and an empty name;
/// callers refine both with [`SolidDescriptor::named`] and
/// [`SolidDescriptor::with_material`].
pub fn make_box(
    kind: SolidKind,
    center: DVec3,
    extents: DVec3,
    rotation_z: f64,
) -> Result<SolidDescriptor> {
    if !center.is_finite() || !rotation_z.is_finite() {
        return Err(Error::InvalidGeometry(format!(
            "non-finite placement: center {center}, rotation {rotation_z}"
        )));
    }
    if extents.to_array().iter().any(|e| !e.is_finite() || *e <= 0.0) {
        return Err(Error::InvalidGeometry(format!(
            "box extents must be positive, got {extents}"
        )));
    }

    Ok(SolidDescriptor::new(kind, center, extents, rotation_z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_midpoint_and_distance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(6.0, 8.0);

        assert_eq!(midpoint(a, b), Point2::new(3.0, 4.0));
        assert_relative_eq!(distance(a, b), 10.0);
        assert_relative_eq!(distance(b, a), 10.0);
    }

    #[test]
    fn test_make_box_accepts_positive_extents() {
        let solid = make_box(
            SolidKind::Furniture,
            DVec3::new(3.0, 6.0, 0.4),
            DVec3::new(2.5, 0.9, 0.8),
            0.0,
        )
        .unwrap();

        assert_eq!(solid.kind, SolidKind::Furniture);
        assert_eq!(solid.extents, DVec3::new(2.5, 0.9, 0.8));
        assert_eq!(solid.rotation_z, 0.0);
    }

    #[test]
    fn test_make_box_rejects_zero_extent() {
        let result = make_box(SolidKind::Wall, DVec3::ZERO, DVec3::new(1.0, 0.0, 1.0), 0.0);
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_make_box_rejects_negative_and_nan_extents() {
        let negative = make_box(SolidKind::Door, DVec3::ZERO, DVec3::new(1.0, 1.0, -2.0), 0.0);
        let nan = make_box(SolidKind::Door, DVec3::ZERO, DVec3::new(f64::NAN, 1.0, 1.0), 0.0);

        assert!(matches!(negative, Err(Error::InvalidGeometry(_))));
        assert!(matches!(nan, Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_make_box_rejects_non_finite_center() {
        let result = make_box(
            SolidKind::Window,
            DVec3::new(f64::INFINITY, 0.0, 0.0),
            DVec3::ONE,
            0.0,
        );
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }
}
