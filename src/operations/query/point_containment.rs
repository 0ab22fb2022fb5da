use crate::math::containment_2d::Contains;
use crate::math::{Point2, Tolerance};

/// Tests whether a point lies in or on a planar shape.
pub struct PointContainment<'a, S: Contains + ?Sized> {
    point: Point2,
    shape: &'a S,
    tolerance: Tolerance,
}

impl<'a, S: Contains + ?Sized> PointContainment<'a, S> {
    /// Creates a new `PointContainment` query.
    #[must_use]
    pub fn new(point: Point2, shape: &'a S) -> Self {
        Self {
            point,
            shape,
            tolerance: Tolerance::default(),
        }
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query, returning `true` for interior and boundary points.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.shape.contains_point_with(&self.point, self.tolerance)
    }
}
