use crate::geometry::Polygon2;
use crate::math::polygon_2d::convex_hull;
use crate::math::Point2;

/// Computes the convex hull of a point set.
///
/// The query owns its points, so the caller's collection is never reordered.
pub struct ConvexHull {
    points: Vec<Point2>,
}

impl ConvexHull {
    /// Creates a new `ConvexHull` query.
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = Point2>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Executes the query, returning the counter-clockwise hull, or `None`
    /// if the points do not span an area.
    #[must_use]
    pub fn execute(&self) -> Option<Polygon2> {
        let mut scratch = self.points.clone();
        convex_hull(&mut scratch)
    }
}
