use crate::error::{GeometryError, Result, SimulationError};
use crate::integration::integrator;
use crate::math::tolerance::Tolerance;
use crate::math::vec2::Vec2;
use crate::shapes::{Circle, LineIntersection, LineSegment};

/// A circular point mass: geometry plus kinematic state.
///
/// There is no rotational state; the body never spins.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleBody {
    shape: Circle,
    pub velocity: Vec2,
    /// Set by the world each step from the gravity pass, not accumulated.
    pub acceleration: Vec2,
    mass: f64,
}

impl CircleBody {
    /// Creates a body at rest with unit mass.
    pub fn new(center: Vec2, radius: f64) -> Result<Self> {
        Ok(Self {
            shape: Circle::new(center, radius)?,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            mass: 1.0,
        })
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec2) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Replaces the mass. It must be positive and finite.
    pub fn with_mass(mut self, mass: f64) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimulationError::InvalidConstruction(format!(
                "body mass must be positive, got {}",
                mass
            )));
        }
        self.mass = mass;
        Ok(self)
    }

    pub fn shape(&self) -> &Circle {
        &self.shape
    }

    pub fn center(&self) -> Vec2 {
        self.shape.center
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.shape.center = center;
    }

    pub fn radius(&self) -> f64 {
        self.shape.radius()
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Advances the body by `dt` using its current acceleration.
    pub fn update_physics(&mut self, dt: f64) {
        integrator::integrate(self, dt);
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.shape.contains(point)
    }

    pub fn intersect(&self, line: &LineSegment) -> std::result::Result<LineIntersection, GeometryError> {
        self.shape.intersect(line)
    }

    pub fn is_tangent(&self, other: &CircleBody, tolerance: Tolerance) -> bool {
        self.shape.is_tangent(&other.shape, tolerance)
    }

    pub fn is_disjoint(&self, other: &CircleBody) -> bool {
        self.shape.is_disjoint(&other.shape)
    }

    pub fn is_intersecting(&self, other: &CircleBody) -> bool {
        self.shape.is_intersecting(&other.shape)
    }
}
