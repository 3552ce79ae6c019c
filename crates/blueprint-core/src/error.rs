//! Error types for Blueprint

use std::fmt;
use thiserror::Error;

/// Result type alias using Blueprint's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Category of plan element an assembly failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanElement {
    Floor,
    OuterWall,
    InteriorWall,
    Opening,
    Furniture,
}

impl fmt::Display for PlanElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Floor => "floor",
            Self::OuterWall => "outer wall",
            Self::InteriorWall => "interior wall",
            Self::Opening => "opening",
            Self::Furniture => "furniture item",
        };
        f.write_str(name)
    }
}

/// Errors that can occur in Blueprint operations
#[derive(Error, Debug)]
pub enum Error {
    /// A box would have a non-positive (or non-finite) extent
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Wall endpoints coincide
    #[error("Degenerate wall segment: length {length} m is below tolerance")]
    DegenerateSegment { length: f64 },

    /// A nested resolve failed while assembling a plan element
    #[error("Failed to assemble {element} #{index}: {source}")]
    Assembly {
        element: PlanElement,
        index: usize,
        #[source]
        source: Box<Error>,
    },

    /// Plan-level parameters are unusable
    #[error("Invalid plan: {0}")]
    InvalidPlan(String),

    /// Export failed
    #[error("Export failed: {0}")]
    Export(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap this error with the plan element it was raised for
    pub(crate) fn at(self, element: PlanElement, index: usize) -> Self {
        Self::Assembly {
            element,
            index,
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any assembly context
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::Assembly { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
