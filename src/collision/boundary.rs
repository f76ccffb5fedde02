//! Keeps bodies inside the world's rectangular boundary.

use crate::math::vec2::Vec2;
use crate::objects::circle_body::CircleBody;
use crate::shapes::Rectangle;

/// Which boundary edges a body was pushed back from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeHits {
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
    pub top: bool,
}

impl EdgeHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.bottom || self.top
    }
}

/// Clamps `body` so it is tangent to any edge it crossed and reflects the
/// velocity component perpendicular to that edge, scaled by `restitution`.
///
/// The four edges are tested against the body's position on entry, so a body
/// in a corner can bounce off two edges at once.
///
/// A body wider than the boundary would cross both opposite edges and have its
/// velocity reflected twice; `World` refuses such bodies.
pub fn contain(body: &mut CircleBody, boundary: &Rectangle, restitution: f64) -> EdgeHits {
    let Vec2 { x, y } = body.center();
    let r = body.radius();
    let mut center = body.center();
    let mut hits = EdgeHits::default();

    if x - r < boundary.left() {
        center.x = boundary.left() + r;
        body.velocity.x = -restitution * body.velocity.x;
        hits.left = true;
    }
    if x + r > boundary.right() {
        center.x = boundary.right() - r;
        body.velocity.x = -restitution * body.velocity.x;
        hits.right = true;
    }
    if y - r < boundary.bottom() {
        center.y = boundary.bottom() + r;
        body.velocity.y = -restitution * body.velocity.y;
        hits.bottom = true;
    }
    if y + r > boundary.top() {
        center.y = boundary.top() - r;
        body.velocity.y = -restitution * body.velocity.y;
        hits.top = true;
    }

    if hits.any() {
        body.set_center(center);
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    fn boundary() -> Rectangle {
        Rectangle::new(-10.0, 10.0, -10.0, 10.0).unwrap()
    }

    #[test]
    fn test_contain_inside_is_untouched() {
        let mut body = CircleBody::new(Vec2::new(1.0, 2.0), 1.0)
            .unwrap()
            .with_velocity(Vec2::new(3.0, -4.0));
        let before = body.clone();
        let hits = contain(&mut body, &boundary(), 0.5);
        assert!(!hits.any());
        assert_eq!(body, before);
    }

    #[test]
    fn test_contain_right_edge() {
        let mut body = CircleBody::new(Vec2::new(100.0, 0.0), 5.0)
            .unwrap()
            .with_velocity(Vec2::new(100.0, 7.0));
        let hits = contain(&mut body, &boundary(), 0.1);
        assert!(hits.right);
        assert!(!hits.left && !hits.top && !hits.bottom);
        assert!((body.center().x - 5.0).abs() < EPSILON);
        assert!((body.velocity.x - -10.0).abs() < EPSILON);
        assert!((body.velocity.y - 7.0).abs() < EPSILON); // Tangential component kept
    }

    #[test]
    fn test_contain_left_and_bottom_corner() {
        let mut body = CircleBody::new(Vec2::new(-12.0, -11.0), 2.0)
            .unwrap()
            .with_velocity(Vec2::new(-4.0, -6.0));
        let hits = contain(&mut body, &boundary(), 1.0);
        assert!(hits.left && hits.bottom);
        assert!(body.center().approx_eq(Vec2::new(-8.0, -8.0), EPSILON));
        assert!(body.velocity.approx_eq(Vec2::new(4.0, 6.0), EPSILON));
    }

    #[test]
    fn test_contain_top_edge_fully_damped() {
        let mut body = CircleBody::new(Vec2::new(0.0, 9.5), 1.0)
            .unwrap()
            .with_velocity(Vec2::new(0.0, 20.0));
        let hits = contain(&mut body, &boundary(), 0.0);
        assert!(hits.top);
        assert!((body.center().y - 9.0).abs() < EPSILON);
        assert!(body.velocity.y.abs() < EPSILON);
    }
}
