use crate::error::{GeometryError, Result};
use crate::math::{Point, Tolerance, Vector};

use super::Line;

/// A half-infinite line `origin + t * direction` with `t >= 0`.
///
/// The direction is stored with unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<const D: usize> {
    origin: Point<D>,
    direction: Vector<D>,
}

/// 2D ray.
pub type Ray2 = Ray<2>;

/// 3D ray.
pub type Ray3 = Ray<3>;

impl<const D: usize> Ray<D> {
    /// Creates a ray starting at `origin` heading along `direction`.
    ///
    /// # Panics
    ///
    /// Panics if the direction vector is zero.
    #[must_use]
    pub fn from_point_direction(origin: Point<D>, direction: Vector<D>) -> Self {
        assert!(
            direction.norm_squared() > 0.0,
            "ray direction vector cannot be zero"
        );
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Creates a ray starting at `start` and passing through `through`.
    ///
    /// # Panics
    ///
    /// Panics if the two points are identical.
    #[must_use]
    pub fn from_points(start: Point<D>, through: Point<D>) -> Self {
        let direction = through - start;
        assert!(
            direction.norm_squared() > 0.0,
            "points for ray construction cannot be the same"
        );
        Self::from_point_direction(start, direction)
    }

    /// Fallible counterpart of [`Ray::from_point_direction`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the direction vector is zero.
    pub fn try_from_point_direction(origin: Point<D>, direction: Vector<D>) -> Result<Self> {
        if direction.norm_squared() > 0.0 {
            Ok(Self::from_point_direction(origin, direction))
        } else {
            Err(GeometryError::ZeroVector.into())
        }
    }

    /// Fallible counterpart of [`Ray::from_points`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the points are identical.
    pub fn try_from_points(start: Point<D>, through: Point<D>) -> Result<Self> {
        Self::try_from_point_direction(start, through - start)
    }

    /// Returns the start point of the ray.
    #[must_use]
    pub fn origin(&self) -> &Point<D> {
        &self.origin
    }

    /// Returns the unit direction vector.
    #[must_use]
    pub fn direction(&self) -> &Vector<D> {
        &self.direction
    }

    /// Evaluates the ray at parameter `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t` is negative.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point<D> {
        assert!(t >= 0.0, "ray parameter must be non-negative, got {t}");
        self.origin + self.direction * t
    }

    /// Fallible counterpart of [`Ray::point_at`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `t` is negative or NaN.
    pub fn try_point_at(&self, t: f64) -> Result<Point<D>> {
        if t >= 0.0 {
            Ok(self.origin + self.direction * t)
        } else {
            Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into())
        }
    }

    /// The infinite line carrying this ray, with the same origin and direction.
    #[must_use]
    pub fn supporting_line(&self) -> Line<D> {
        Line::from_point_direction(self.origin, self.direction)
    }

    /// Signed parameter of the foot of `p` along the ray's direction.
    #[must_use]
    pub fn parameter_of(&self, p: &Point<D>) -> f64 {
        (p - self.origin).dot(&self.direction)
    }

    /// Closest point on the ray to `p`; points behind the origin project onto it.
    #[must_use]
    pub fn project(&self, p: &Point<D>) -> Point<D> {
        self.origin + self.direction * self.parameter_of(p).max(0.0)
    }

    /// Returns `true` if `p` lies on the ray under the default tolerance.
    #[must_use]
    pub fn contains(&self, p: &Point<D>) -> bool {
        self.contains_with(p, Tolerance::default())
    }

    /// Returns `true` if `p` is on the supporting line and not behind the origin.
    #[must_use]
    pub fn contains_with(&self, p: &Point<D>, tol: Tolerance) -> bool {
        self.supporting_line().contains_with(p, tol) && tol.ge(self.parameter_of(p), 0.0)
    }
}
