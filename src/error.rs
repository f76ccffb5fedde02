//! Error types for the geometry kernel and the simulation.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Failures of the geometry kernel's analytic queries.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Quadratic solver called with a (near) zero leading coefficient.
    #[error("invalid coefficient: leading coefficient must be non-zero, got {0}")]
    InvalidCoefficient(f64),

    /// Slope/intercept style query on a vertical segment.
    #[error("degenerate line: {0}")]
    DegenerateLine(&'static str),

    /// Two parallel lines have no single intersection point.
    #[error("lines are parallel and do not intersect")]
    NoIntersection,
}

/// Errors surfaced to the caller when building or driving a [`World`](crate::World).
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Non-positive radius or mass, malformed boundary, out-of-range setting.
    #[error("invalid construction: {0}")]
    InvalidConstruction(String),

    /// Negative or non-finite time step.
    #[error("invalid time step: {0}")]
    InvalidTimeStep(f64),

    #[error("body index {index} out of range for world with {len} bodies")]
    BodyIndexOutOfRange { index: usize, len: usize },

    /// World configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
