use tracing::warn;

use super::manifold::CollisionManifold;
use crate::objects::circle_body::CircleBody;

/// Checks for overlap between two circular bodies.
///
/// Returns a manifold only when the centers are strictly closer than the sum
/// of radii. Coincident centers have no usable normal, so that pair is
/// reported as no collision.
pub fn check_circle_circle(
    body_a: &CircleBody,
    body_a_idx: usize,
    body_b: &CircleBody,
    body_b_idx: usize,
) -> Option<CollisionManifold> {
    let dist_vec = body_b.center() - body_a.center();
    let dist_sq = dist_vec.magnitude_squared();
    let radii_sum = body_a.radius() + body_b.radius();

    if dist_sq >= radii_sum * radii_sum {
        return None;
    }

    let distance = dist_sq.sqrt();
    if distance == 0.0 {
        warn!(body_a_idx, body_b_idx, "coincident body centers, skipping collision response");
        return None;
    }

    Some(CollisionManifold {
        body_a_idx,
        body_b_idx,
        normal: dist_vec * (1.0 / distance),
        distance,
        depth: radii_sum - distance,
    })
}
