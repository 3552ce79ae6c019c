//! # Blueprint Core
//!
//! Parametric layout compiler for procedural interiors.
//!
//! Blueprint turns a declarative floor plan (wall segments given by their
//! endpoints, openings given by wall-relative position and size, furniture
//! footprints) into an ordered list of oriented box descriptors that any
//! scene host can materialize.
//!
//! ## Quick Start
//!
//! ```rust
//! use blueprint_core::prelude::*;
//!
//! let plan = PlanSpec::villa();
//! let manifest = build_layout(&plan)?;
//!
//! // Floor, 4 outer walls, 5 interior walls, 6 windows, 6 doors, 9 furniture items
//! assert_eq!(manifest.solids.len(), 31);
//! # Ok::<(), blueprint_core::Error>(())
//! ```
//!
//! ## Units and Conventions
//!
//! - **Distances**: meters, plan origin at the building's bottom-left corner
//! - **Angles**: radians, rotations are about the vertical (Z) axis
//! - **Precision**: compiler math is `f64`; tessellated meshes are `f32`
//! - **Coordinate system**: right-handed, Z-up

pub mod export;
pub mod furniture;
pub mod geom;
pub mod layout;
pub mod material;
pub mod mesh;
pub mod opening;
pub mod plan;
pub mod scene;
pub mod wall;

mod error;

pub use error::{Error, PlanElement, Result};

/// Prelude module for convenient imports
pub mod prelude {
    // Geometry primitives
    pub use crate::geom::{
        EPSILON, Point2, SolidDescriptor, SolidKind, distance, make_box, midpoint,
    };

    // Plan elements and resolvers
    pub use crate::furniture::{FurnitureItem, resolve_furniture};
    pub use crate::opening::{Opening, OpeningKind, resolve_opening};
    pub use crate::wall::{WallSegment, resolve_wall};

    // Assembly
    pub use crate::layout::build_layout;
    pub use crate::plan::PlanSpec;
    pub use crate::scene::{CameraProxy, LightKind, LightProxy, ManifestEntry, SceneManifest};

    // Materials
    pub use crate::material::{Material, MaterialPalette, MaterialTag};

    // Tessellation and export
    pub use crate::export::{ExportFormat, MeshExport, export_manifest};
    pub use crate::mesh::{Mesh, MeshPart, SceneMesh, SolidToMesh, Vertex};

    // Math (re-export glam)
    pub use glam::{DVec2, DVec3};

    // Error handling
    pub use crate::{Error, PlanElement, Result};
}
