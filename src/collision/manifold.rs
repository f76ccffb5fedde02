use crate::math::vec2::Vec2;

/// Stores information about an overlap between two bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManifold {
    /// Index of the first body involved in the collision.
    pub body_a_idx: usize,
    /// Index of the second body involved in the collision.
    pub body_b_idx: usize,
    /// Unit collision normal, pointing from body A towards body B.
    pub normal: Vec2,
    /// Center-to-center distance at detection time. Always positive.
    pub distance: f64,
    /// The amount of penetration between the shapes (`r_a + r_b - distance`).
    pub depth: f64,
}

impl CollisionManifold {
    /// How far each body moves along the normal to leave the pair tangent.
    pub fn half_depth(&self) -> f64 {
        0.5 * self.depth
    }
}
