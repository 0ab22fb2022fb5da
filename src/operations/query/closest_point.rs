use crate::geometry::{Line, Ray, Segment};
use crate::math::Point;

/// A linear element a closest-point query can target.
#[derive(Debug, Clone, Copy)]
pub enum LinearElement<'a, const D: usize> {
    Line(&'a Line<D>),
    Segment(&'a Segment<D>),
    Ray(&'a Ray<D>),
}

/// Result of a closest point query.
#[derive(Debug, Clone, Copy)]
pub struct ClosestPointResult<const D: usize> {
    /// The closest point on the element.
    pub point: Point<D>,
    /// Parameter of the closest point: arc length from the origin for lines
    /// and rays, `[0, 1]` from `p1` for segments.
    pub parameter: f64,
    /// The distance from the query point to the closest point.
    pub distance: f64,
}

/// Finds the closest point on a line, segment or ray to a given point.
pub struct ClosestPoint<'a, const D: usize> {
    element: LinearElement<'a, D>,
    point: Point<D>,
}

impl<'a, const D: usize> ClosestPoint<'a, D> {
    /// Creates a new `ClosestPoint` query.
    #[must_use]
    pub fn new(element: LinearElement<'a, D>, point: Point<D>) -> Self {
        Self { element, point }
    }

    /// Executes the query.
    ///
    /// Lines project orthogonally, segments clamp to their endpoints, rays
    /// clamp to their origin.
    #[must_use]
    pub fn execute(&self) -> ClosestPointResult<D> {
        let (point, parameter) = match self.element {
            LinearElement::Line(line) => {
                let t = line.parameter_of(&self.point);
                (line.point_at(t), t)
            }
            LinearElement::Segment(segment) => {
                let t = segment.parameter_of(&self.point);
                (segment.project(&self.point), t)
            }
            LinearElement::Ray(ray) => {
                let t = ray.parameter_of(&self.point).max(0.0);
                (ray.point_at(t), t)
            }
        };
        ClosestPointResult {
            point,
            parameter,
            distance: (self.point - point).norm(),
        }
    }
}
