use std::fmt;

use crate::error::GeometryError;
use crate::math::tolerance::Tolerance;
use crate::math::vec2::Vec2;

/// Derived equation of the infinite line through a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineForm {
    /// `y = slope * x + intercept`
    Sloped { slope: f64, intercept: f64 },
    /// `x = x`, for segments whose endpoints share an x-coordinate.
    Vertical { x: f64 },
}

impl LineForm {
    fn from_points(start: Vec2, end: Vec2, tolerance: Tolerance) -> Self {
        let dx = end.x - start.x;
        if tolerance.is_zero(dx) {
            return LineForm::Vertical { x: start.x };
        }
        let slope = (end.y - start.y) / dx;
        LineForm::Sloped {
            slope,
            intercept: start.y - slope * start.x,
        }
    }
}

/// A line segment between two points.
///
/// The line form is recomputed whenever an endpoint changes, so endpoints are
/// only reachable through accessors and `with_*` constructors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    start: Vec2,
    end: Vec2,
    tolerance: Tolerance,
    form: LineForm,
}

impl LineSegment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self::with_tolerance(start, end, Tolerance::DEFAULT)
    }

    pub fn with_tolerance(start: Vec2, end: Vec2, tolerance: Tolerance) -> Self {
        Self {
            start,
            end,
            tolerance,
            form: LineForm::from_points(start, end, tolerance),
        }
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn end(&self) -> Vec2 {
        self.end
    }

    pub fn form(&self) -> LineForm {
        self.form
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Same segment with a different start point.
    pub fn with_start(self, start: Vec2) -> Self {
        Self::with_tolerance(start, self.end, self.tolerance)
    }

    /// Same segment with a different end point.
    pub fn with_end(self, end: Vec2) -> Self {
        Self::with_tolerance(self.start, end, self.tolerance)
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self.form, LineForm::Vertical { .. })
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self.form, LineForm::Sloped { slope, .. } if self.tolerance.is_zero(slope))
    }

    /// Slope of the line. Undefined for vertical segments.
    pub fn slope(&self) -> Result<f64, GeometryError> {
        match self.form {
            LineForm::Sloped { slope, .. } => Ok(slope),
            LineForm::Vertical { .. } => Err(GeometryError::DegenerateLine("vertical line has no slope")),
        }
    }

    /// y-intercept of the line. Undefined for vertical segments.
    pub fn intercept(&self) -> Result<f64, GeometryError> {
        match self.form {
            LineForm::Sloped { intercept, .. } => Ok(intercept),
            LineForm::Vertical { .. } => {
                Err(GeometryError::DegenerateLine("vertical line has no y-intercept"))
            }
        }
    }

    /// Calculates the length of the line segment.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Calculates the squared length of the line segment.
    pub fn length_squared(&self) -> f64 {
        self.start.distance_squared(self.end)
    }

    /// Returns the direction vector of the line segment (from start to end).
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    pub fn midpoint(&self) -> Vec2 {
        self.start.midpoint(self.end)
    }

    /// `y` on the extended line at `x`.
    pub fn evaluate_y(&self, x: f64) -> Result<f64, GeometryError> {
        match self.form {
            LineForm::Sloped { slope, intercept } => Ok(slope * x + intercept),
            LineForm::Vertical { .. } => {
                Err(GeometryError::DegenerateLine("vertical line is not a function of x"))
            }
        }
    }

    /// `x` on the extended line at `y`.
    pub fn evaluate_x(&self, y: f64) -> Result<f64, GeometryError> {
        match self.form {
            LineForm::Vertical { x } => Ok(x),
            LineForm::Sloped { slope, .. } if self.tolerance.is_zero(slope) => {
                Err(GeometryError::DegenerateLine("horizontal line is not a function of y"))
            }
            LineForm::Sloped { slope, intercept } => Ok((y - intercept) / slope),
        }
    }

    /// Whether `point` lies on the infinite line through the segment.
    pub fn on_extended_line(&self, point: Vec2) -> bool {
        match self.form {
            LineForm::Vertical { x } => self.tolerance.approx_eq(point.x, x),
            LineForm::Sloped { slope, intercept } => {
                self.tolerance.approx_eq(slope * point.x + intercept, point.y)
            }
        }
    }

    /// Whether `point` lies inside the segment's bounding box, regardless of endpoint order.
    pub fn between_bounds(&self, point: Vec2) -> bool {
        let tol = self.tolerance.value();
        let (min_x, max_x) = (self.start.x.min(self.end.x), self.start.x.max(self.end.x));
        let (min_y, max_y) = (self.start.y.min(self.end.y), self.start.y.max(self.end.y));
        point.x >= min_x - tol && point.x <= max_x + tol && point.y >= min_y - tol && point.y <= max_y + tol
    }

    /// Whether `point` lies on the segment itself.
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.on_extended_line(point) && self.between_bounds(point)
    }

    pub fn is_parallel(&self, other: &LineSegment) -> bool {
        match (self.form, other.form) {
            (LineForm::Vertical { .. }, LineForm::Vertical { .. }) => true,
            (LineForm::Vertical { .. }, _) | (_, LineForm::Vertical { .. }) => false,
            (LineForm::Sloped { slope: m1, .. }, LineForm::Sloped { slope: m2, .. }) => {
                self.tolerance.approx_eq(m1, m2)
            }
        }
    }

    pub fn is_perpendicular(&self, other: &LineSegment) -> bool {
        match (self.form, other.form) {
            (LineForm::Vertical { .. }, LineForm::Sloped { slope, .. })
            | (LineForm::Sloped { slope, .. }, LineForm::Vertical { .. }) => self.tolerance.is_zero(slope),
            (LineForm::Vertical { .. }, LineForm::Vertical { .. }) => false,
            (LineForm::Sloped { slope: m1, .. }, LineForm::Sloped { slope: m2, .. }) => {
                self.tolerance.is_zero(m1 * m2 + 1.0)
            }
        }
    }

    /// Whether the infinite lines meet in exactly one point.
    pub fn is_intersecting(&self, other: &LineSegment) -> bool {
        !self.is_parallel(other)
    }

    /// Whether both segments describe the same infinite line.
    pub fn approx_eq(&self, other: &LineSegment) -> bool {
        let tol = self.tolerance;
        match (self.form, other.form) {
            (LineForm::Vertical { x: x1 }, LineForm::Vertical { x: x2 }) => tol.approx_eq(x1, x2),
            (
                LineForm::Sloped { slope: m1, intercept: c1 },
                LineForm::Sloped { slope: m2, intercept: c2 },
            ) => tol.approx_eq(m1, m2) && tol.approx_eq(c1, c2),
            _ => false,
        }
    }

    /// Intersection point of the two infinite lines.
    ///
    /// Parallel lines yield `NoIntersection`; coincident lines have no unique
    /// answer and yield `DegenerateLine`.
    pub fn intersection(&self, other: &LineSegment) -> Result<Vec2, GeometryError> {
        if self.is_parallel(other) {
            if self.approx_eq(other) {
                return Err(GeometryError::DegenerateLine("coincident lines have no unique intersection"));
            }
            return Err(GeometryError::NoIntersection);
        }

        match (self.form, other.form) {
            (LineForm::Vertical { x }, LineForm::Sloped { slope, intercept })
            | (LineForm::Sloped { slope, intercept }, LineForm::Vertical { x }) => {
                Ok(Vec2::new(x, slope * x + intercept))
            }
            (
                LineForm::Sloped { slope: m1, intercept: c1 },
                LineForm::Sloped { slope: m2, intercept: c2 },
            ) => {
                let x = (c2 - c1) / (m1 - m2);
                Ok(Vec2::new(x, m1 * x + c1))
            }
            // Two vertical lines are always parallel.
            (LineForm::Vertical { .. }, LineForm::Vertical { .. }) => Err(GeometryError::NoIntersection),
        }
    }

    /// A unit-step segment starting at `point` and perpendicular to this line.
    pub fn perpendicular_line(&self, point: Vec2) -> LineSegment {
        let end = match self.form {
            LineForm::Vertical { .. } => Vec2::new(point.x + 1.0, point.y),
            LineForm::Sloped { slope, .. } if self.tolerance.is_zero(slope) => Vec2::new(point.x, point.y + 1.0),
            LineForm::Sloped { slope, .. } => Vec2::new(point.x + 1.0, point.y - 1.0 / slope),
        };
        Self::with_tolerance(point, end, self.tolerance)
    }

    pub fn translate(self, offset: Vec2) -> Self {
        Self::with_tolerance(self.start + offset, self.end + offset, self.tolerance)
    }

    /// Scales both endpoints about the origin.
    pub fn scale(self, factor: f64) -> Self {
        Self::with_tolerance(self.start * factor, self.end * factor, self.tolerance)
    }

    pub fn rotate_around(self, center: Vec2, angle: f64) -> Self {
        Self::with_tolerance(
            self.start.rotate_around(center, angle),
            self.end.rotate_around(center, angle),
            self.tolerance,
        )
    }

    pub fn rotate_about_origin(self, angle: f64) -> Self {
        self.rotate_around(Vec2::ZERO, angle)
    }

    pub fn rotate_about_midpoint(self, angle: f64) -> Self {
        self.rotate_around(self.midpoint(), angle)
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.form {
            LineForm::Sloped { slope, intercept } => {
                write!(f, "Line (y = {} * x + {}): {} -> {}", slope, intercept, self.start, self.end)
            }
            LineForm::Vertical { x } => write!(f, "Line (x = {}): {} -> {}", x, self.start, self.end),
        }
    }
}
