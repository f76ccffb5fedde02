//! Two-dimensional gravity sandbox: circular bodies attract each other,
//! bounce off a rectangular boundary and collide elastically.

pub mod collision;
pub mod config;
pub mod error;
pub mod forces;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use config::{BodyConfig, ImpulseModel, WorldConfig, WorldSettings};
pub use error::{GeometryError, Result, SimulationError};
pub use math::{solve_quadratic, Roots, Tolerance, Vec2};
pub use objects::CircleBody;
pub use shapes::{Circle, LineForm, LineIntersection, LineSegment, Rectangle, Triangle};
pub use world::{ScatterOptions, World};
