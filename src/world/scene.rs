//! Random scene seeding.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{Result, SimulationError};
use crate::math::vec2::Vec2;
use crate::objects::circle_body::CircleBody;
use crate::shapes::Rectangle;

/// Parameters for [`scatter_bodies`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterOptions {
    pub count: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    pub mass: f64,
    /// Same seed, same scene.
    pub seed: u64,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self {
            count: 50,
            min_radius: 5.0,
            max_radius: 9.0,
            mass: 1.0,
            seed: 0,
        }
    }
}

/// Places `count` resting bodies uniformly at random, each fully inside `boundary`.
///
/// Bodies may overlap each other; the first world step separates them.
pub fn scatter_bodies(boundary: &Rectangle, options: &ScatterOptions) -> Result<Vec<CircleBody>> {
    let ScatterOptions {
        count,
        min_radius,
        max_radius,
        mass,
        seed,
    } = *options;

    if !(min_radius > 0.0 && min_radius <= max_radius && max_radius.is_finite()) {
        return Err(SimulationError::InvalidConstruction(format!(
            "radius range must satisfy 0 < min <= max, got [{}, {}]",
            min_radius, max_radius
        )));
    }
    if 2.0 * max_radius >= boundary.width() || 2.0 * max_radius >= boundary.height() {
        return Err(SimulationError::InvalidConstruction(format!(
            "bodies of radius {} do not fit in a {}x{} boundary",
            max_radius,
            boundary.width(),
            boundary.height()
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut bodies = Vec::with_capacity(count);
    for _ in 0..count {
        let radius = if min_radius < max_radius {
            rng.gen_range(min_radius..max_radius)
        } else {
            min_radius
        };
        let x = rng.gen_range((boundary.left() + radius)..(boundary.right() - radius));
        let y = rng.gen_range((boundary.bottom() + radius)..(boundary.top() - radius));
        bodies.push(CircleBody::new(Vec2::new(x, y), radius)?.with_mass(mass)?);
    }

    debug!(count, seed, "scattered bodies");
    Ok(bodies)
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    fn boundary() -> Rectangle {
        Rectangle::centered(1200.0, 900.0).unwrap()
    }

    #[test]
    fn test_scatter_stays_inside_boundary() {
        let bounds = boundary();
        let bodies = scatter_bodies(&bounds, &ScatterOptions { count: 200, ..Default::default() }).unwrap();
        assert_eq!(bodies.len(), 200);
        for body in &bodies {
            let (c, r) = (body.center(), body.radius());
            assert!((5.0..9.0).contains(&r));
            assert!(c.x - r >= bounds.left() - EPSILON && c.x + r <= bounds.right() + EPSILON);
            assert!(c.y - r >= bounds.bottom() - EPSILON && c.y + r <= bounds.top() + EPSILON);
            assert_eq!(body.velocity, Vec2::ZERO);
            assert_eq!(body.mass(), 1.0);
        }
    }

    #[test]
    fn test_scatter_is_deterministic_per_seed() {
        let bounds = boundary();
        let options = ScatterOptions { count: 20, seed: 42, ..Default::default() };
        let first = scatter_bodies(&bounds, &options).unwrap();
        let second = scatter_bodies(&bounds, &options).unwrap();
        assert_eq!(first, second);

        let other = scatter_bodies(&bounds, &ScatterOptions { seed: 43, ..options }).unwrap();
        assert_ne!(first, other);
    }

    #[test]
    fn test_scatter_fixed_radius() {
        let options = ScatterOptions { count: 5, min_radius: 3.0, max_radius: 3.0, ..Default::default() };
        let bodies = scatter_bodies(&boundary(), &options).unwrap();
        assert!(bodies.iter().all(|b| b.radius() == 3.0));
    }

    #[test]
    fn test_scatter_rejects_bad_options() {
        let bounds = boundary();
        let inverted = ScatterOptions { min_radius: 9.0, max_radius: 5.0, ..Default::default() };
        assert!(scatter_bodies(&bounds, &inverted).is_err());
        let too_big = ScatterOptions { min_radius: 1.0, max_radius: 500.0, ..Default::default() };
        assert!(scatter_bodies(&bounds, &too_big).is_err());
        let bad_mass = ScatterOptions { count: 1, mass: -1.0, ..Default::default() };
        assert!(scatter_bodies(&bounds, &bad_mass).is_err());
    }
}
