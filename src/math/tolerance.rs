//! The single absolute tolerance used by every comparison in the kernel.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Absolute tolerance for distance, slope and discriminant comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Tolerance(f64);

impl Tolerance {
    pub const DEFAULT: Tolerance = Tolerance(1e-9);

    /// Creates a tolerance. Negative or non-finite values fall back to [`Tolerance::DEFAULT`].
    pub fn new(value: f64) -> Self {
        if Self::is_valid(value) {
            Self(value)
        } else {
            Self::DEFAULT
        }
    }

    /// Whether `value` is usable as a tolerance: finite and non-negative.
    pub fn is_valid(value: f64) -> bool {
        value.is_finite() && value >= 0.0
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `|value| <= tolerance`
    pub fn is_zero(self, value: f64) -> bool {
        value.abs() <= self.0
    }

    /// `|a - b| <= tolerance`
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.0
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = SimulationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if Self::is_valid(value) {
            Ok(Self(value))
        } else {
            Err(SimulationError::InvalidConstruction(format!(
                "tolerance must be finite and non-negative, got {}",
                value
            )))
        }
    }
}

impl From<Tolerance> for f64 {
    fn from(tolerance: Tolerance) -> f64 {
        tolerance.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_default() {
        assert_eq!(Tolerance::default().value(), 1e-9);
    }

    #[test]
    fn test_tolerance_rejects_bad_values() {
        assert_eq!(Tolerance::new(-1.0), Tolerance::DEFAULT);
        assert_eq!(Tolerance::new(f64::NAN), Tolerance::DEFAULT);
        assert_eq!(Tolerance::new(1e-3).value(), 1e-3);
    }

    #[test]
    fn test_tolerance_serde() {
        let tol: Tolerance = serde_json::from_str("0.001").unwrap();
        assert_eq!(tol.value(), 1e-3);
        assert_eq!(serde_json::to_string(&tol).unwrap(), "0.001");
        assert!(serde_json::from_str::<Tolerance>("-5.0").is_err());
    }

    #[test]
    fn test_tolerance_comparisons() {
        let tol = Tolerance::new(1e-6);
        assert!(tol.is_zero(5e-7));
        assert!(!tol.is_zero(2e-6));
        assert!(tol.approx_eq(1.0, 1.0 + 5e-7));
        assert!(!tol.approx_eq(1.0, 1.001));
    }
}
