use crate::error::{GeometryError, Result};

use super::{Point, EPSILON};

/// Absolute-tolerance comparison policy for scalars and points.
///
/// Two values are equal when `|a - b| <= eps`. The strict orderings exclude
/// equality, so for any pair exactly one of `lt`, `eq`, `gt` holds. Equality
/// is reflexive and symmetric but not transitive: chaining values that are
/// each within `eps` of the next can drift arbitrarily far.
///
/// Every algorithm in the crate takes one of these; results are only
/// mutually consistent (e.g. hull output fed into containment) when the same
/// tolerance is used throughout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { eps: EPSILON }
    }
}

impl Tolerance {
    /// Creates a tolerance with the given absolute epsilon.
    ///
    /// # Panics
    ///
    /// Panics if `eps` is negative, NaN or infinite.
    #[must_use]
    pub fn new(eps: f64) -> Self {
        assert!(
            eps.is_finite() && eps >= 0.0,
            "tolerance must be finite and non-negative, got {eps}"
        );
        Self { eps }
    }

    /// Creates a tolerance, rejecting negative or non-finite values.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidTolerance` if `eps` is not a finite,
    /// non-negative number.
    pub fn try_new(eps: f64) -> Result<Self> {
        if eps.is_finite() && eps >= 0.0 {
            Ok(Self { eps })
        } else {
            Err(GeometryError::InvalidTolerance(eps).into())
        }
    }

    /// The absolute epsilon.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// `|a - b| <= eps`.
    #[must_use]
    pub fn eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.eps
    }

    /// Negation of [`Tolerance::eq`].
    #[must_use]
    pub fn ne(&self, a: f64, b: f64) -> bool {
        !self.eq(a, b)
    }

    /// `a < b` and not within `eps` of each other.
    #[must_use]
    pub fn lt(&self, a: f64, b: f64) -> bool {
        a < b && !self.eq(a, b)
    }

    /// `a > b` and not within `eps` of each other.
    #[must_use]
    pub fn gt(&self, a: f64, b: f64) -> bool {
        a > b && !self.eq(a, b)
    }

    /// `a < b` or within `eps`.
    #[must_use]
    pub fn le(&self, a: f64, b: f64) -> bool {
        a < b || self.eq(a, b)
    }

    /// `a > b` or within `eps`.
    #[must_use]
    pub fn ge(&self, a: f64, b: f64) -> bool {
        a > b || self.eq(a, b)
    }

    /// Returns `true` if `v` is within `eps` of zero.
    #[must_use]
    pub fn is_zero(&self, v: f64) -> bool {
        v.abs() <= self.eps
    }

    /// Component-wise equality of two points.
    #[must_use]
    pub fn points_eq<const D: usize>(&self, a: &Point<D>, b: &Point<D>) -> bool {
        a.coords
            .iter()
            .zip(b.coords.iter())
            .all(|(&x, &y)| self.eq(x, y))
    }
}
