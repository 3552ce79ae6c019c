//! Layout assembly: plan in, ordered manifest out
//!
//! Output order is fixed and never sorted: floor, outer walls, interior
//! walls, windows, doors, furniture; lights and the camera follow in the
//! manifest. Within each group elements keep their plan order.
//!
//! Any failing element aborts the whole build. The error names the
//! element's group and its index in the plan list it came from.

use crate::furniture::resolve_furniture;
use crate::geom::{SolidDescriptor, SolidKind, make_box};
use crate::opening::resolve_opening;
use crate::plan::PlanSpec;
use crate::scene::SceneManifest;
use crate::wall::resolve_wall;
use crate::{PlanElement, Result};
use glam::DVec3;

/// Compile a plan into a scene manifest
pub fn build_layout(plan: &PlanSpec) -> Result<SceneManifest> {
    plan.validate()?;

    let capacity = 1
        + plan.boundary.len()
        + plan.interior_walls.len()
        + plan.openings.len()
        + plan.furniture.len();
    let mut solids = Vec::with_capacity(capacity);

    solids.push(floor(plan).map_err(|e| e.at(PlanElement::Floor, 0))?);

    for (i, segment) in plan.outer_walls().enumerate() {
        let wall = resolve_wall(&segment).map_err(|e| e.at(PlanElement::OuterWall, i))?;
        solids.push(wall.named(format!("Wall_{}", i + 1)));
    }

    for (i, segment) in plan.interior_walls.iter().enumerate() {
        let wall = resolve_wall(segment).map_err(|e| e.at(PlanElement::InteriorWall, i))?;
        solids.push(wall.named(format!("InteriorWall_{}", i + 1)));
    }

    let windows = plan.openings.iter().enumerate().filter(|(_, o)| o.is_window());
    for (n, (i, opening)) in windows.enumerate() {
        let window = resolve_opening(opening, plan.wall_thickness)
            .map_err(|e| e.at(PlanElement::Opening, i))?;
        solids.push(window.named(format!("Window_{}", n + 1)));
    }

    let doors = plan.openings.iter().enumerate().filter(|(_, o)| o.is_door());
    for (n, (i, opening)) in doors.enumerate() {
        let door = resolve_opening(opening, plan.door_thickness)
            .map_err(|e| e.at(PlanElement::Opening, i))?;
        solids.push(door.named(format!("Door_{}", n + 1)));
    }

    for (i, item) in plan.furniture.iter().enumerate() {
        solids.push(resolve_furniture(item).map_err(|e| e.at(PlanElement::Furniture, i))?);
    }

    for solid in &solids {
        tracing::debug!(
            "{} {}: center {:.3}, extents {:.3}, rotation {:.4}",
            solid.kind.label(),
            solid.name,
            solid.center,
            solid.extents,
            solid.rotation_z
        );
    }
    warn_unknown_materials(plan, &solids);

    let manifest = SceneManifest {
        collection: plan.collection.clone(),
        solids,
        lights: plan.lights.clone(),
        camera: plan.camera.clone(),
        palette: plan.palette.clone(),
    };

    tracing::info!(
        "Compiled layout '{}': {} solids, {} lights",
        manifest.collection,
        manifest.solids.len(),
        manifest.lights.len()
    );

    Ok(manifest)
}

/// Slab under the footprint with its top face at z = 0
fn floor(plan: &PlanSpec) -> Result<SolidDescriptor> {
    let center = DVec3::new(plan.width / 2.0, plan.depth / 2.0, -plan.floor_thickness / 2.0);
    let extents = DVec3::new(plan.width, plan.depth, plan.floor_thickness);

    Ok(make_box(SolidKind::Floor, center, extents, 0.0)?.named("Floor"))
}

fn warn_unknown_materials(plan: &PlanSpec, solids: &[SolidDescriptor]) {
    for solid in solids {
        if !plan.palette.contains(&solid.material) {
            tracing::warn!(
                "{} uses material '{}' which is not in the palette",
                solid.name,
                solid.material
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::geom::Point2;
    use crate::material::MaterialTag;
    use crate::opening::Opening;
    use crate::wall::WallSegment;
    use approx::assert_abs_diff_eq;

    fn kinds(manifest: &SceneManifest) -> Vec<SolidKind> {
        manifest.solids.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_villa_group_order() {
        let manifest = build_layout(&PlanSpec::villa()).unwrap();

        let mut expected = vec![SolidKind::Floor];
        expected.extend([SolidKind::Wall; 9]);
        expected.extend([SolidKind::Window; 6]);
        expected.extend([SolidKind::Door; 6]);
        expected.extend([SolidKind::Furniture; 9]);
        assert_eq!(kinds(&manifest), expected);

        let names: Vec<&str> = manifest.solids.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(&names[..3], &["Floor", "Wall_1", "Wall_2"]);
        assert_eq!(names[5], "InteriorWall_1");
        assert_eq!(names[10], "Window_1");
        assert_eq!(names[16], "Door_1");
        assert_eq!(names[22], "Sofa");
        assert_eq!(names[30], "Shower");
    }

    #[test]
    fn test_outer_walls() {
        let manifest = build_layout(&PlanSpec::villa()).unwrap();
        let walls: Vec<&SolidDescriptor> = manifest.solids_of(SolidKind::Wall).take(4).collect();

        assert_abs_diff_eq!(walls[0].extents, DVec3::new(18.0, 0.15, 2.4), epsilon = 1e-9);
        assert_abs_diff_eq!(walls[0].center, DVec3::new(9.0, 0.0, 1.2), epsilon = 1e-9);
        assert_eq!(walls[0].rotation_z, 0.0);

        assert_abs_diff_eq!(walls[1].extents, DVec3::new(0.15, 9.0, 2.4), epsilon = 1e-9);
        assert_abs_diff_eq!(walls[1].center, DVec3::new(18.0, 4.5, 1.2), epsilon = 1e-9);

        assert_abs_diff_eq!(walls[2].center, DVec3::new(9.0, 9.0, 1.2), epsilon = 1e-9);
        assert_abs_diff_eq!(walls[3].center, DVec3::new(0.0, 4.5, 1.2), epsilon = 1e-9);
        assert_abs_diff_eq!(walls[3].extents, DVec3::new(0.15, 9.0, 2.4), epsilon = 1e-9);
    }

    #[test]
    fn test_floor_covers_footprint() {
        let manifest = build_layout(&PlanSpec::villa()).unwrap();
        let floor = &manifest.solids[0];

        let (min, max) = floor.bounds();
        assert_abs_diff_eq!(min, DVec3::new(0.0, 0.0, -0.02), epsilon = 1e-9);
        assert_abs_diff_eq!(max, DVec3::new(18.0, 9.0, 0.0), epsilon = 1e-9);
        assert_eq!(floor.material, MaterialTag::floor());
    }

    #[test]
    fn test_windows_and_doors_use_their_thickness() {
        let manifest = build_layout(&PlanSpec::villa()).unwrap();

        let front_window = manifest.solids_of(SolidKind::Window).next().unwrap();
        assert_abs_diff_eq!(front_window.extents, DVec3::new(1.2, 0.15, 1.4), epsilon = 1e-9);
        assert_abs_diff_eq!(front_window.center.z, 1.6, epsilon = 1e-9);

        let front_door = manifest.solids_of(SolidKind::Door).last().unwrap();
        assert_eq!(front_door.name, "Door_6");
        assert_abs_diff_eq!(front_door.extents, DVec3::new(0.05, 1.2, 2.1), epsilon = 1e-9);
        assert_abs_diff_eq!(front_door.center, DVec3::new(9.0, 0.5, 1.05), epsilon = 1e-9);
    }

    #[test]
    fn test_mixed_openings_are_grouped_in_plan_order() {
        let mut plan = PlanSpec::villa();
        plan.openings = vec![
            Opening::door(Point2::new(2.0, 0.0), 0.9, 2.1),
            Opening::window(Point2::new(4.0, 0.0), 1.0, 1.0),
            Opening::door(Point2::new(6.0, 0.0), 0.8, 2.0),
            Opening::window(Point2::new(8.0, 0.0), 1.1, 1.0),
        ];

        let manifest = build_layout(&plan).unwrap();
        let windows: Vec<f64> = manifest.solids_of(SolidKind::Window).map(|s| s.center.x).collect();
        let doors: Vec<f64> = manifest.solids_of(SolidKind::Door).map(|s| s.center.x).collect();

        assert_eq!(windows, vec![4.0, 8.0]);
        assert_eq!(doors, vec![2.0, 6.0]);
    }

    #[test]
    fn test_pentagon_boundary() {
        let mut plan = PlanSpec::villa();
        plan.boundary = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 6.0),
            Point2::new(5.0, 10.0),
            Point2::new(0.0, 6.0),
        ];

        let manifest = build_layout(&plan).unwrap();
        let outer: Vec<&SolidDescriptor> = manifest.solids.iter().skip(1).take(5).collect();

        assert_eq!(outer[4].name, "Wall_5");
        // (10,6) -> (5,10) has |dy| < |dx|: extruded along X without rotation
        assert_eq!(outer[2].rotation_z, 0.0);
        assert_abs_diff_eq!(outer[2].extents.x, 41.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let plan = PlanSpec::villa();
        assert_eq!(build_layout(&plan).unwrap(), build_layout(&plan).unwrap());
    }

    #[test]
    fn test_degenerate_interior_wall_aborts_with_index() {
        let mut plan = PlanSpec::villa();
        plan.interior_walls[2] =
            WallSegment::new(Point2::new(9.0, 4.0), Point2::new(9.0, 4.0), 2.4, 0.15);

        let err = build_layout(&plan).unwrap_err();
        match &err {
            Error::Assembly { element, index, source } => {
                assert_eq!(*element, PlanElement::InteriorWall);
                assert_eq!(*index, 2);
                assert!(matches!(**source, Error::DegenerateSegment { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_repeated_corner_fails_outer_wall() {
        let mut plan = PlanSpec::villa();
        plan.boundary.insert(2, Point2::new(18.0, 0.0));

        let err = build_layout(&plan).unwrap_err();
        assert!(matches!(
            err,
            Error::Assembly { element: PlanElement::OuterWall, index: 1, .. }
        ));
    }

    #[test]
    fn test_bad_opening_reports_plan_index() {
        let mut plan = PlanSpec::villa();
        plan.openings[7].width = -0.9;

        let err = build_layout(&plan).unwrap_err();
        assert!(matches!(
            err,
            Error::Assembly { element: PlanElement::Opening, index: 7, .. }
        ));
        assert!(matches!(err.root_cause(), Error::InvalidGeometry(_)));
    }

    #[test]
    fn test_bad_furniture_reports_index() {
        let mut plan = PlanSpec::villa();
        plan.furniture[4].extents.z = 0.0;

        let err = build_layout(&plan).unwrap_err();
        assert!(matches!(
            err,
            Error::Assembly { element: PlanElement::Furniture, index: 4, .. }
        ));
    }

    #[test]
    fn test_invalid_plan_is_not_wrapped() {
        let mut plan = PlanSpec::villa();
        plan.door_thickness = 0.0;
        assert!(matches!(build_layout(&plan), Err(Error::InvalidPlan(_))));
    }

    #[test]
    fn test_unknown_material_still_builds() {
        let mut plan = PlanSpec::villa();
        plan.furniture[0].material = MaterialTag::new("velvet");

        let manifest = build_layout(&plan).unwrap();
        assert_eq!(manifest.find("Sofa").map(|e| e.kind()), Some(SolidKind::Furniture));
    }

    #[test]
    fn test_build_is_thread_safe() {
        let plan = &PlanSpec::villa();
        let reference = build_layout(plan).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(move || build_layout(plan).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), reference);
            }
        });
    }
}
