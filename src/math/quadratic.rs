use crate::error::GeometryError;
use crate::math::tolerance::Tolerance;

/// Real roots of a quadratic equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    None,
    One(f64),
    /// Two distinct roots, larger first.
    Two(f64, f64),
}

impl Roots {
    pub fn len(&self) -> usize {
        match self {
            Roots::None => 0,
            Roots::One(_) => 1,
            Roots::Two(_, _) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Roots::None)
    }

    pub fn as_vec(&self) -> Vec<f64> {
        match *self {
            Roots::None => Vec::new(),
            Roots::One(r) => vec![r],
            Roots::Two(r1, r2) => vec![r1, r2],
        }
    }
}

/// Solves `a·x² + b·x + c = 0` over the reals.
///
/// The discriminant is compared against `tolerance`, so near-tangent cases
/// collapse to a single root instead of being reported as no intersection.
/// A leading coefficient within tolerance of zero is rejected.
pub fn solve_quadratic(a: f64, b: f64, c: f64, tolerance: Tolerance) -> Result<Roots, GeometryError> {
    if tolerance.is_zero(a) || !a.is_finite() {
        return Err(GeometryError::InvalidCoefficient(a));
    }

    let discriminant = b * b - 4.0 * a * c;
    if tolerance.is_zero(discriminant) {
        return Ok(Roots::One(-b / (2.0 * a)));
    }
    if discriminant < 0.0 {
        return Ok(Roots::None);
    }

    let sqrt_d = discriminant.sqrt();
    let r1 = (-b + sqrt_d) / (2.0 * a);
    let r2 = (-b - sqrt_d) / (2.0 * a);
    Ok(Roots::Two(r1.max(r2), r1.min(r2)))
}
