//! Serde-facing world configuration.
//!
//! A shell can describe a whole scene in JSON (or any serde format):
//!
//! ```json
//! {
//!   "gravitational_constant": 5000.0,
//!   "restitution": 0.1,
//!   "softening": 1.0,
//!   "tolerance": 1e-9,
//!   "impulse_model": "mass_weighted",
//!   "skip_separating_pairs": false,
//!   "boundary": { "left": -600, "right": 600, "bottom": -450, "top": 450 },
//!   "bodies": [
//!     { "center": { "x": -10.0, "y": 0.0 }, "radius": 5.0 },
//!     { "center": { "x": 10.0, "y": 0.0 }, "radius": 5.0, "mass": 2.0,
//!       "velocity": { "x": 0.0, "y": 1.0 } }
//!   ]
//! }
//! ```
//!
//! Every field except `boundary` has a default.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::math::tolerance::Tolerance;
use crate::math::vec2::Vec2;
use crate::objects::circle_body::CircleBody;
use crate::shapes::Rectangle;

/// How pairwise collisions exchange momentum along the contact normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpulseModel {
    /// Elastic two-body exchange weighted by each body's mass.
    #[default]
    MassWeighted,
    /// Swap normal velocity components as if both bodies had the same mass.
    EqualMass,
}

/// Physical constants and numeric settings of a world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub gravitational_constant: f64,
    /// Fraction of the perpendicular velocity kept after a boundary bounce, in `[0, 1]`.
    pub restitution: f64,
    /// Minimum distance used in the gravity law.
    pub softening: f64,
    pub tolerance: Tolerance,
    pub impulse_model: ImpulseModel,
    /// Leave overlapping pairs that already move apart without an impulse.
    pub skip_separating_pairs: bool,
}

impl WorldSettings {
    pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = 5000.0;
    pub const DEFAULT_RESTITUTION: f64 = 0.1;
    pub const DEFAULT_SOFTENING: f64 = 1.0;

    pub fn validate(&self) -> Result<()> {
        if !self.gravitational_constant.is_finite() {
            return Err(SimulationError::InvalidConstruction(format!(
                "gravitational constant must be finite, got {}",
                self.gravitational_constant
            )));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(SimulationError::InvalidConstruction(format!(
                "restitution must be in [0, 1], got {}",
                self.restitution
            )));
        }
        if !Tolerance::is_valid(self.tolerance.value()) {
            return Err(SimulationError::InvalidConstruction(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance.value()
            )));
        }
        if !(self.softening.is_finite() && self.softening >= 0.0) {
            return Err(SimulationError::InvalidConstruction(format!(
                "softening must be non-negative, got {}",
                self.softening
            )));
        }
        Ok(())
    }
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            gravitational_constant: Self::DEFAULT_GRAVITATIONAL_CONSTANT,
            restitution: Self::DEFAULT_RESTITUTION,
            softening: Self::DEFAULT_SOFTENING,
            tolerance: Tolerance::DEFAULT,
            impulse_model: ImpulseModel::default(),
            skip_separating_pairs: false,
        }
    }
}

fn default_mass() -> f64 {
    1.0
}

/// Initial state of one body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub center: Vec2,
    pub radius: f64,
    #[serde(default)]
    pub velocity: Vec2,
    #[serde(default = "default_mass")]
    pub mass: f64,
}

impl BodyConfig {
    pub fn build(&self) -> Result<CircleBody> {
        Ok(CircleBody::new(self.center, self.radius)?
            .with_mass(self.mass)?
            .with_velocity(self.velocity))
    }
}

/// A complete scene: settings, boundary and initial bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    #[serde(flatten)]
    pub settings: WorldSettings,
    pub boundary: Rectangle,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl WorldConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
