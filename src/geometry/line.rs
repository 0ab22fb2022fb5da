use crate::error::{GeometryError, Result};
use crate::math::{Point, Tolerance, Vector};

/// An infinite line defined by an origin point and a unit direction vector.
///
/// The parametric form is: `P(t) = origin + t * direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<const D: usize> {
    origin: Point<D>,
    direction: Vector<D>,
}

/// 2D line.
pub type Line2 = Line<2>;

/// 3D line.
pub type Line3 = Line<3>;

impl<const D: usize> Line<D> {
    /// Creates the line through `p1` and `p2`, oriented from `p1` towards `p2`.
    ///
    /// # Panics
    ///
    /// Panics if the two points are identical.
    #[must_use]
    pub fn from_points(p1: Point<D>, p2: Point<D>) -> Self {
        let direction = p2 - p1;
        assert!(
            direction.norm_squared() > 0.0,
            "points for line construction cannot be the same"
        );
        Self::normalized(p1, direction)
    }

    /// Creates a line from an origin and a (not necessarily unit) direction.
    ///
    /// # Panics
    ///
    /// Panics if the direction vector is zero.
    #[must_use]
    pub fn from_point_direction(origin: Point<D>, direction: Vector<D>) -> Self {
        assert!(
            direction.norm_squared() > 0.0,
            "line direction vector cannot be zero"
        );
        Self::normalized(origin, direction)
    }

    /// Fallible counterpart of [`Line::from_points`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the points are identical.
    pub fn try_from_points(p1: Point<D>, p2: Point<D>) -> Result<Self> {
        Self::try_from_point_direction(p1, p2 - p1)
    }

    /// Fallible counterpart of [`Line::from_point_direction`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the direction vector is zero.
    pub fn try_from_point_direction(origin: Point<D>, direction: Vector<D>) -> Result<Self> {
        if direction.norm_squared() > 0.0 {
            Ok(Self::normalized(origin, direction))
        } else {
            Err(GeometryError::ZeroVector.into())
        }
    }

    fn normalized(origin: Point<D>, direction: Vector<D>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point<D> {
        &self.origin
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector<D> {
        &self.direction
    }

    /// Evaluates `origin + t * direction`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point<D> {
        self.origin + self.direction * t
    }

    /// Signed distance along the line from the origin to the foot of `p`.
    #[must_use]
    pub fn parameter_of(&self, p: &Point<D>) -> f64 {
        (p - self.origin).dot(&self.direction)
    }

    /// Orthogonal projection of `p` onto the line.
    #[must_use]
    pub fn project(&self, p: &Point<D>) -> Point<D> {
        self.point_at(self.parameter_of(p))
    }

    /// Euclidean distance from `p` to the line.
    #[must_use]
    pub fn distance(&self, p: &Point<D>) -> f64 {
        (p - self.project(p)).norm()
    }

    /// Returns `true` if `p` lies on the line under the default tolerance.
    #[must_use]
    pub fn contains(&self, p: &Point<D>) -> bool {
        self.contains_with(p, Tolerance::default())
    }

    /// Returns `true` if `p` coincides with its own projection under `tol`.
    #[must_use]
    pub fn contains_with(&self, p: &Point<D>, tol: Tolerance) -> bool {
        tol.points_eq(p, &self.project(p))
    }
}
