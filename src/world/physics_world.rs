use tracing::{debug, trace};

use crate::collision::{self, CollisionManifold};
use crate::config::{ImpulseModel, WorldConfig, WorldSettings};
use crate::error::{Result, SimulationError};
use crate::forces::gravity;
use crate::math::vec2::Vec2;
use crate::objects::circle_body::CircleBody;
use crate::shapes::Rectangle;
use super::scene::{scatter_bodies, ScatterOptions};

/// Owns the bodies and advances them under mutual gravity inside a boundary.
///
/// Body order is stable: indices returned by [`World::add_body`] stay valid
/// until a body before them is removed.
#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<CircleBody>,
    boundary: Rectangle,
    settings: WorldSettings,
    // Overlaps resolved during the last step
    contacts: Vec<CollisionManifold>,
    elapsed: f64,
    step_count: u64,
}

impl World {
    /// Creates a world with default softening, tolerance and impulse model.
    pub fn new(
        bodies: Vec<CircleBody>,
        boundary: Rectangle,
        gravitational_constant: f64,
        restitution: f64,
    ) -> Result<Self> {
        let settings = WorldSettings {
            gravitational_constant,
            restitution,
            ..WorldSettings::default()
        };
        Self::with_settings(bodies, boundary, settings)
    }

    /// Every body must fit inside `boundary` (diameter no larger than either side).
    pub fn with_settings(bodies: Vec<CircleBody>, boundary: Rectangle, settings: WorldSettings) -> Result<Self> {
        settings.validate()?;
        for body in &bodies {
            Self::check_fits(body, &boundary)?;
        }
        debug!(
            bodies = bodies.len(),
            g = settings.gravitational_constant,
            restitution = settings.restitution,
            ?boundary,
            "creating world"
        );
        Ok(Self {
            bodies,
            boundary,
            settings,
            contacts: Vec::new(),
            elapsed: 0.0,
            step_count: 0,
        })
    }

    pub fn from_config(config: &WorldConfig) -> Result<Self> {
        let bodies = config
            .bodies
            .iter()
            .map(|b| b.build())
            .collect::<Result<Vec<_>>>()?;
        Self::with_settings(bodies, config.boundary, config.settings)
    }

    /// Creates a world filled with randomly placed resting bodies.
    pub fn scatter(boundary: Rectangle, settings: WorldSettings, options: &ScatterOptions) -> Result<Self> {
        let bodies = scatter_bodies(&boundary, options)?;
        Self::with_settings(bodies, boundary, settings)
    }

    pub fn bodies(&self) -> &[CircleBody] {
        &self.bodies
    }

    /// Mutable access for the shell between steps (e.g. dragging a body).
    pub fn bodies_mut(&mut self) -> &mut [CircleBody] {
        &mut self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&CircleBody> {
        self.bodies.get(index)
    }

    pub fn boundary(&self) -> &Rectangle {
        &self.boundary
    }

    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    pub fn contacts(&self) -> &[CollisionManifold] {
        &self.contacts
    }

    /// Total simulated time.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Adds a body to the world and returns its index.
    pub fn add_body(&mut self, body: CircleBody) -> Result<usize> {
        Self::check_fits(&body, &self.boundary)?;
        let index = self.bodies.len();
        self.bodies.push(body);
        Ok(index)
    }

    fn check_fits(body: &CircleBody, boundary: &Rectangle) -> Result<()> {
        let diameter = 2.0 * body.radius();
        if diameter > boundary.width() || diameter > boundary.height() {
            return Err(SimulationError::InvalidConstruction(format!(
                "body of radius {} does not fit in a {}x{} boundary",
                body.radius(),
                boundary.width(),
                boundary.height()
            )));
        }
        Ok(())
    }

    /// Removes and returns the body at `index`, shifting later bodies down.
    pub fn remove_body(&mut self, index: usize) -> Result<CircleBody> {
        if index >= self.bodies.len() {
            return Err(SimulationError::BodyIndexOutOfRange {
                index,
                len: self.bodies.len(),
            });
        }
        Ok(self.bodies.remove(index))
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(CircleBody::kinetic_energy).sum()
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.bodies.iter().fold(Vec2::ZERO, |acc, b| acc + b.momentum())
    }

    /// Advances the simulation by one time step `dt`.
    ///
    /// Runs gravity, integration, boundary containment and pairwise collision
    /// resolution in that order, each phase over every body before the next
    /// begins. `dt == 0` skips motion but still corrects existing overlaps.
    pub fn step(&mut self, dt: f64) -> Result<()> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimulationError::InvalidTimeStep(dt));
        }

        // 1. Gravity, from one snapshot of positions
        let accelerations = gravity::gravitational_accelerations(
            &self.bodies,
            self.settings.gravitational_constant,
            self.settings.softening,
        );
        for (body, acceleration) in self.bodies.iter_mut().zip(accelerations) {
            body.acceleration = acceleration;
        }

        // 2. Integrate motion
        for body in self.bodies.iter_mut() {
            body.update_physics(dt);
        }

        // 3. Keep bodies inside the boundary
        for (idx, body) in self.bodies.iter_mut().enumerate() {
            let hits = collision::contain(body, &self.boundary, self.settings.restitution);
            if hits.any() {
                trace!(body = idx, ?hits, "boundary bounce");
            }
        }

        // 4. Separate overlapping pairs
        self.resolve_collisions();

        self.elapsed += dt;
        self.step_count += 1;
        trace!(dt, step = self.step_count, contacts = self.contacts.len(), "step complete");
        Ok(())
    }

    /// Visits every pair `(i, j)` with `i < j` once, in index order. Later
    /// pairs see positions already corrected by earlier ones.
    /// Penetration within the world tolerance is treated as touching.
    fn resolve_collisions(&mut self) {
        self.contacts.clear();
        let tolerance = self.settings.tolerance;

        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let maybe_manifold = collision::check_circle_circle(&self.bodies[i], i, &self.bodies[j], j)
                    .filter(|m| !tolerance.is_zero(m.depth));

                if let Some(manifold) = maybe_manifold {
                    trace!(a = i, b = j, depth = manifold.depth, "bodies overlap");
                    self.apply_positional_correction(&manifold);
                    self.apply_collision_impulse(&manifold);
                    self.contacts.push(manifold);
                }
            }
        }
    }

    /// Pushes both bodies apart along the normal by half the penetration each,
    /// leaving them tangent.
    fn apply_positional_correction(&mut self, manifold: &CollisionManifold) {
        let (body_a, body_b) = self.pair_mut(manifold);
        let correction = manifold.normal * manifold.half_depth();

        let center_a = body_a.center() - correction;
        let center_b = body_b.center() + correction;
        body_a.set_center(center_a);
        body_b.set_center(center_b);
    }

    /// Elastic impulse along the contact normal.
    ///
    /// Applied to every overlapping pair unless `skip_separating_pairs` is set,
    /// in which case pairs already moving apart are left alone.
    fn apply_collision_impulse(&mut self, manifold: &CollisionManifold) {
        let WorldSettings {
            impulse_model,
            skip_separating_pairs,
            ..
        } = self.settings;
        let (body_a, body_b) = self.pair_mut(manifold);
        let n = manifold.normal;

        // Closing speed along the normal; positive when approaching
        let closing_speed = (body_a.velocity - body_b.velocity).dot(n);
        if skip_separating_pairs && closing_speed <= 0.0 {
            return;
        }

        let (delta_a, delta_b) = match impulse_model {
            ImpulseModel::EqualMass => (closing_speed, closing_speed),
            ImpulseModel::MassWeighted => {
                let (m_a, m_b) = (body_a.mass(), body_b.mass());
                let p = 2.0 * closing_speed / (m_a + m_b);
                (p * m_b, p * m_a)
            }
        };

        body_a.velocity -= n * delta_a;
        body_b.velocity += n * delta_b;
    }

    /// Both bodies of a manifold, borrowed mutably via `split_at_mut`.
    fn pair_mut(&mut self, manifold: &CollisionManifold) -> (&mut CircleBody, &mut CircleBody) {
        let (head, tail) = self.bodies.split_at_mut(manifold.body_b_idx);
        (&mut head[manifold.body_a_idx], &mut tail[0])
    }
}
