use crate::math::{Point, Tolerance};

use super::Line;

/// A bounded line segment between two points.
///
/// Zero-length segments are allowed and behave like a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<const D: usize> {
    p1: Point<D>,
    p2: Point<D>,
}

/// 2D segment.
pub type Segment2 = Segment<2>;

/// 3D segment.
pub type Segment3 = Segment<3>;

impl<const D: usize> Segment<D> {
    /// Creates the segment from `p1` to `p2`. The endpoints may coincide.
    #[must_use]
    pub fn new(p1: Point<D>, p2: Point<D>) -> Self {
        Self { p1, p2 }
    }

    /// Start point.
    #[must_use]
    pub fn p1(&self) -> &Point<D> {
        &self.p1
    }

    /// End point.
    #[must_use]
    pub fn p2(&self) -> &Point<D> {
        &self.p2
    }

    /// Squared length.
    #[must_use]
    pub fn length_sq(&self) -> f64 {
        (self.p2 - self.p1).norm_squared()
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }

    /// Returns `true` if the segment is no longer than the tolerance.
    #[must_use]
    pub fn is_degenerate(&self, tol: Tolerance) -> bool {
        tol.is_zero(self.length())
    }

    /// Same segment traversed from `p2` to `p1`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.p2, self.p1)
    }

    /// The infinite line through both endpoints, or `None` for a zero-length segment.
    #[must_use]
    pub fn supporting_line(&self) -> Option<Line<D>> {
        Line::try_from_points(self.p1, self.p2).ok()
    }

    /// Parameter in `[0, 1]` of the point closest to `p`, measured from `p1`.
    ///
    /// Always `0` for a zero-length segment.
    #[must_use]
    pub fn parameter_of(&self, p: &Point<D>) -> f64 {
        let v = self.p2 - self.p1;
        let len_sq = v.norm_squared();
        if len_sq <= 0.0 {
            return 0.0;
        }
        ((p - self.p1).dot(&v) / len_sq).clamp(0.0, 1.0)
    }

    /// Closest point on the segment to `p`.
    #[must_use]
    pub fn project(&self, p: &Point<D>) -> Point<D> {
        self.p1 + (self.p2 - self.p1) * self.parameter_of(p)
    }

    /// Euclidean distance from `p` to the closest point of the segment.
    #[must_use]
    pub fn distance(&self, p: &Point<D>) -> f64 {
        (p - self.project(p)).norm()
    }

    /// Returns `true` if `p` lies on the segment under the default tolerance.
    #[must_use]
    pub fn contains(&self, p: &Point<D>) -> bool {
        self.contains_with(p, Tolerance::default())
    }

    /// Returns `true` if `p` is strictly closer than `tol` to the segment.
    #[must_use]
    pub fn contains_with(&self, p: &Point<D>, tol: Tolerance) -> bool {
        self.distance(p) < tol.eps()
    }
}
