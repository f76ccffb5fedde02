//! Direct-summation Newtonian gravity with a distance clamp.

use crate::math::vec2::Vec2;
use crate::objects::circle_body::CircleBody;

/// Computes the gravitational acceleration of every body due to every other body.
///
/// `out[i] = Σ_j G * m_j * (c_j - c_i) / max(|c_j - c_i|, softening)³`
///
/// Only reads `bodies`, so every pair sees the same snapshot of positions.
/// Coincident centers contribute nothing.
pub fn gravitational_accelerations(bodies: &[CircleBody], g: f64, softening: f64) -> Vec<Vec2> {
    let n = bodies.len();
    let mut out = vec![Vec2::ZERO; n];

    // Each unordered pair (i, j) with i < j is visited once and applied to both.
    for i in 0..n {
        let ci = bodies[i].center();
        let mi = bodies[i].mass();

        for j in (i + 1)..n {
            let cj = bodies[j].center();
            let mj = bodies[j].mass();

            // r points from i to j: i is pulled along +r, j along -r
            let r = cj - ci;
            let distance = r.magnitude();
            if distance == 0.0 {
                continue;
            }

            let clamped = distance.max(softening);
            let coef = g / (clamped * clamped * clamped);

            out[i] += r * (coef * mj);
            out[j] -= r * (coef * mi);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    fn body(x: f64, y: f64, mass: f64) -> CircleBody {
        CircleBody::new(Vec2::new(x, y), 0.5).unwrap().with_mass(mass).unwrap()
    }

    #[test]
    fn test_empty_and_single_body() {
        assert!(gravitational_accelerations(&[], 1.0, 1.0).is_empty());
        let out = gravitational_accelerations(&[body(0.0, 0.0, 1.0)], 1.0, 1.0);
        assert_eq!(out, vec![Vec2::ZERO]);
    }

    #[test]
    fn test_two_body_inverse_square() {
        let bodies = [body(0.0, 0.0, 2.0), body(4.0, 0.0, 3.0)];
        let out = gravitational_accelerations(&bodies, 10.0, 1.0);
        // |a_0| = G * m_1 / d^2 = 10 * 3 / 16, toward +x
        assert!((out[0].x - 30.0 / 16.0).abs() < EPSILON);
        assert!(out[0].y.abs() < EPSILON);
        // |a_1| = G * m_0 / d^2 = 10 * 2 / 16, toward -x
        assert!((out[1].x - -20.0 / 16.0).abs() < EPSILON);
    }

    #[test]
    fn test_net_force_is_zero() {
        let bodies = [body(0.0, 0.0, 1.0), body(3.0, 4.0, 2.0), body(-2.0, 5.0, 5.0)];
        let out = gravitational_accelerations(&bodies, 7.0, 0.1);
        let net = bodies
            .iter()
            .zip(&out)
            .fold(Vec2::ZERO, |acc, (b, a)| acc + *a * b.mass());
        assert!(net.approx_eq(Vec2::ZERO, EPSILON));
    }

    #[test]
    fn test_softening_clamps_distance() {
        let bodies = [body(0.0, 0.0, 1.0), body(0.5, 0.0, 1.0)];
        let out = gravitational_accelerations(&bodies, 1.0, 1.0);
        // Distance is clamped to 1: |a| = G * m * 0.5 / 1^3
        assert!((out[0].x - 0.5).abs() < EPSILON);
        assert!((out[1].x - -0.5).abs() < EPSILON);
    }

    #[test]
    fn test_coincident_bodies_contribute_nothing() {
        let bodies = [body(1.0, 1.0, 1.0), body(1.0, 1.0, 1.0)];
        let out = gravitational_accelerations(&bodies, 1.0, 0.0);
        assert!(out.iter().all(|a| *a == Vec2::ZERO));
    }
}
