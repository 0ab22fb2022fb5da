use crate::math::intersect_2d::Intersect;
use crate::math::Tolerance;

/// Computes the intersection of two planar primitives.
///
/// Accepts any pair for which [`Intersect`] is implemented; the output type
/// follows the pair (`LineIntersection` for two lines, `SegmentIntersection`
/// otherwise).
pub struct Intersection<'a, A, B> {
    a: &'a A,
    b: &'a B,
    tolerance: Tolerance,
}

impl<'a, A, B> Intersection<'a, A, B>
where
    A: Intersect<B>,
{
    /// Creates a new `Intersection` query with the default tolerance.
    #[must_use]
    pub fn new(a: &'a A, b: &'a B) -> Self {
        Self {
            a,
            b,
            tolerance: Tolerance::default(),
        }
    }

    /// Overrides the comparison tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> A::Output {
        self.a.intersect_with(self.b, self.tolerance)
    }
}
