use crate::error::{Result, SimulationError};
use crate::math::tolerance::Tolerance;
use crate::math::vec2::Vec2;

/// A triangle given by three vertices in any winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec2; 3],
}

impl Triangle {
    /// Creates a triangle. Collinear vertices are rejected.
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Result<Self> {
        Self::with_tolerance(a, b, c, Tolerance::DEFAULT)
    }

    /// Like [`Triangle::new`], treating any area within `tolerance` as collinear.
    pub fn with_tolerance(a: Vec2, b: Vec2, c: Vec2, tolerance: Tolerance) -> Result<Self> {
        let triangle = Triangle { vertices: [a, b, c] };
        if tolerance.is_zero(triangle.signed_area()) {
            return Err(SimulationError::InvalidConstruction(
                "triangle vertices must not be collinear".to_string(),
            ));
        }
        Ok(triangle)
    }

    /// Shoelace area, positive for counter-clockwise winding.
    fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        (b - a).cross(c - a) / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn perimeter(&self) -> f64 {
        let [a, b, c] = self.vertices;
        a.distance(b) + b.distance(c) + c.distance(a)
    }

    pub fn centroid(&self) -> Vec2 {
        let [a, b, c] = self.vertices;
        (a + b + c) / 3.0
    }

    /// Interior angles in radians, at vertices `a`, `b`, `c` respectively.
    pub fn angles(&self) -> [f64; 3] {
        let [a, b, c] = self.vertices;
        let angle_at = |p: Vec2, q: Vec2, r: Vec2| {
            let u = q - p;
            let v = r - p;
            u.cross(v).abs().atan2(u.dot(v))
        };
        [angle_at(a, b, c), angle_at(b, c, a), angle_at(c, a, b)]
    }

    /// Whether `point` lies inside or on the triangle.
    pub fn contains(&self, point: Vec2) -> bool {
        let [a, b, c] = self.vertices;
        let d1 = (b - a).cross(point - a);
        let d2 = (c - b).cross(point - b);
        let d3 = (a - c).cross(point - c);
        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }

    pub fn translate(self, offset: Vec2) -> Self {
        Triangle {
            vertices: self.vertices.map(|v| v + offset),
        }
    }

    pub fn rotate_around(self, center: Vec2, angle: f64) -> Self {
        Triangle {
            vertices: self.vertices.map(|v| v.rotate_around(center, angle)),
        }
    }

    pub fn rotate_about_centroid(self, angle: f64) -> Self {
        self.rotate_around(self.centroid(), angle)
    }
}
