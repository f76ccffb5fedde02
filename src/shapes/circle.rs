use std::f64::consts::PI;
use std::fmt;

use crate::error::{GeometryError, Result, SimulationError};
use crate::math::quadratic::{solve_quadratic, Roots};
use crate::math::tolerance::Tolerance;
use crate::math::vec2::Vec2;
use crate::shapes::line_segment::{LineForm, LineSegment};

/// Where an infinite line meets a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    None,
    Tangent(Vec2),
    Secant(Vec2, Vec2),
}

impl LineIntersection {
    pub fn points(&self) -> Vec<Vec2> {
        match *self {
            LineIntersection::None => Vec::new(),
            LineIntersection::Tangent(p) => vec![p],
            LineIntersection::Secant(p1, p2) => vec![p1, p2],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    radius: f64,
}

impl Circle {
    /// Creates a circle. The radius must be positive and finite.
    pub fn new(center: Vec2, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimulationError::InvalidConstruction(format!(
                "circle radius must be positive, got {}",
                radius
            )));
        }
        Ok(Self { center, radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Whether `point` lies inside or on the circle.
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) <= self.radius
    }

    /// Intersects the circle with the infinite line through `line`.
    ///
    /// A sloped line `y = m·x + c` is substituted into `(x-a)² + (y-b)² = r²`,
    /// giving `(1+m²)x² + (2m(c-b) - 2a)x + (a² + (c-b)² - r²) = 0`. A vertical
    /// line `x = k` is solved for `y` instead.
    pub fn intersect(&self, line: &LineSegment) -> std::result::Result<LineIntersection, GeometryError> {
        let (a, b, r) = (self.center.x, self.center.y, self.radius);
        let tolerance = line.tolerance();

        match line.form() {
            LineForm::Sloped { slope: m, intercept: c } => {
                let roots = solve_quadratic(
                    1.0 + m * m,
                    -2.0 * a + 2.0 * m * (c - b),
                    a * a + (c - b) * (c - b) - r * r,
                    tolerance,
                )?;
                let at = |x: f64| Vec2::new(x, m * x + c);
                Ok(match roots {
                    Roots::None => LineIntersection::None,
                    Roots::One(x) => LineIntersection::Tangent(at(x)),
                    Roots::Two(x1, x2) => LineIntersection::Secant(at(x1), at(x2)),
                })
            }
            LineForm::Vertical { x: k } => {
                let roots = solve_quadratic(
                    1.0,
                    -2.0 * b,
                    b * b + (k - a) * (k - a) - r * r,
                    tolerance,
                )?;
                let at = |y: f64| Vec2::new(k, y);
                Ok(match roots {
                    Roots::None => LineIntersection::None,
                    Roots::One(y) => LineIntersection::Tangent(at(y)),
                    Roots::Two(y1, y2) => LineIntersection::Secant(at(y1), at(y2)),
                })
            }
        }
    }

    /// Externally tangent: centers exactly one sum of radii apart.
    pub fn is_tangent(&self, other: &Circle, tolerance: Tolerance) -> bool {
        tolerance.approx_eq(self.center.distance(other.center), self.radius + other.radius)
    }

    pub fn is_disjoint(&self, other: &Circle) -> bool {
        self.center.distance(other.center) > self.radius + other.radius
    }

    pub fn is_intersecting(&self, other: &Circle) -> bool {
        self.center.distance(other.center) <= self.radius + other.radius
    }

    pub fn translate(self, offset: Vec2) -> Self {
        Self {
            center: self.center + offset,
            ..self
        }
    }

    /// Multiplies the radius by a positive `factor`.
    pub fn scale_radius(self, factor: f64) -> Result<Self> {
        Self::new(self.center, self.radius * factor)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle[{}, {}]", self.center, self.radius)
    }
}
