//! Axis-aligned rectangle, used as the world boundary.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::math::vec2::Vec2;
use crate::shapes::circle::Circle;

/// An axis-aligned rectangle with `left < right` and `bottom < top` (y up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectangleBounds")]
pub struct Rectangle {
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
}

/// Unvalidated edges, as read from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleBounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl TryFrom<RectangleBounds> for Rectangle {
    type Error = SimulationError;

    fn try_from(b: RectangleBounds) -> Result<Self> {
        Rectangle::new(b.left, b.right, b.bottom, b.top)
    }
}

impl Rectangle {
    /// Creates a rectangle from its four edges.
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Result<Self> {
        if ![left, right, bottom, top].iter().all(|v| v.is_finite()) {
            return Err(SimulationError::InvalidConstruction(
                "rectangle edges must be finite".to_string(),
            ));
        }
        if left >= right || bottom >= top {
            return Err(SimulationError::InvalidConstruction(format!(
                "rectangle requires left < right and bottom < top, got left={} right={} bottom={} top={}",
                left, right, bottom, top
            )));
        }
        Ok(Self { left, right, bottom, top })
    }

    /// Creates a rectangle from its upper-left and lower-right corners.
    pub fn from_corners(upper_left: Vec2, lower_right: Vec2) -> Result<Self> {
        Self::new(upper_left.x, lower_right.x, lower_right.y, upper_left.y)
    }

    /// A `width` x `height` rectangle centered on the origin.
    pub fn centered(width: f64, height: f64) -> Result<Self> {
        Self::new(-width / 2.0, width / 2.0, -height / 2.0, height / 2.0)
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.left + self.right) / 2.0, (self.bottom + self.top) / 2.0)
    }

    /// Corners in counter-clockwise order starting at the lower-left.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left, self.bottom),
            Vec2::new(self.right, self.bottom),
            Vec2::new(self.right, self.top),
            Vec2::new(self.left, self.top),
        ]
    }

    /// Whether `point` lies inside or on the rectangle.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.bottom && point.y <= self.top
    }

    /// Whether the whole circle fits inside the rectangle.
    pub fn contains_circle(&self, circle: &Circle) -> bool {
        let (c, r) = (circle.center, circle.radius());
        c.x - r >= self.left && c.x + r <= self.right && c.y - r >= self.bottom && c.y + r <= self.top
    }

    /// Checks if this rectangle overlaps another one.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        let x_overlap = self.right > other.left && self.left < other.right;
        let y_overlap = self.top > other.bottom && self.bottom < other.top;
        x_overlap && y_overlap
    }

    pub fn translate(self, offset: Vec2) -> Self {
        Self {
            left: self.left + offset.x,
            right: self.right + offset.x,
            bottom: self.bottom + offset.y,
            top: self.top + offset.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_rectangle_new() {
        let r = Rectangle::new(-10.0, 10.0, -5.0, 5.0).unwrap();
        assert_eq!(r.width(), 20.0);
        assert_eq!(r.height(), 10.0);
        assert!((r.area() - 200.0).abs() < EPSILON);
        assert!((r.perimeter() - 60.0).abs() < EPSILON);
        assert_eq!(r.center(), Vec2::ZERO);
    }

    #[test]
    fn test_rectangle_rejects_inverted_edges() {
        assert!(Rectangle::new(10.0, -10.0, -5.0, 5.0).is_err());
        assert!(Rectangle::new(-10.0, 10.0, 5.0, 5.0).is_err());
        assert!(Rectangle::new(f64::NEG_INFINITY, 10.0, 0.0, 5.0).is_err());
    }

    #[test]
    fn test_rectangle_from_corners() {
        let r = Rectangle::from_corners(Vec2::new(-600.0, 450.0), Vec2::new(600.0, -450.0)).unwrap();
        assert_eq!(r, Rectangle::centered(1200.0, 900.0).unwrap());
        assert_eq!(r.corners()[0], Vec2::new(-600.0, -450.0));
        assert_eq!(r.corners()[2], Vec2::new(600.0, 450.0));
    }

    #[test]
    fn test_rectangle_contains() {
        let r = Rectangle::new(0.0, 10.0, 0.0, 10.0).unwrap();
        assert!(r.contains(Vec2::new(5.0, 5.0)));
        assert!(r.contains(Vec2::new(10.0, 0.0)));
        assert!(!r.contains(Vec2::new(10.1, 5.0)));

        let inside = Circle::new(Vec2::new(5.0, 5.0), 5.0).unwrap();
        let poking_out = Circle::new(Vec2::new(6.0, 5.0), 5.0).unwrap();
        assert!(r.contains_circle(&inside));
        assert!(!r.contains_circle(&poking_out));
    }

    #[test]
    fn test_rectangle_overlaps() {
        let a = Rectangle::new(0.0, 2.0, 0.0, 2.0).unwrap();
        let b = a.translate(Vec2::new(1.0, 1.0));
        let c = a.translate(Vec2::new(3.0, 0.0));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_rectangle_deserialize_validates() {
        let ok: Rectangle = serde_json::from_str(r#"{"left":-1,"right":1,"bottom":-2,"top":2}"#).unwrap();
        assert_eq!(ok.height(), 4.0);
        let bad = serde_json::from_str::<Rectangle>(r#"{"left":1,"right":-1,"bottom":-2,"top":2}"#);
        assert!(bad.is_err());
    }
}
