use crate::geometry::{Line2, Polygon2, Ray2, Segment2};

use super::{Point2, Tolerance};

/// Even-odd ray casting with an explicit boundary check.
///
/// Points on an edge (within `tol`) count as inside. Otherwise a horizontal
/// ray is cast towards `+x` and edge crossings are counted; an edge crosses
/// when exactly one endpoint lies above `p` and its `x` at `p.y` is greater
/// than `p.x`.
#[must_use]
pub fn point_in_polygon(p: &Point2, polygon: &Polygon2, tol: Tolerance) -> bool {
    let mut inside = false;
    for edge in polygon.edges() {
        if edge.contains_with(p, tol) {
            return true;
        }
        let (a, b) = (edge.p1(), edge.p2());
        if tol.gt(a.y, p.y) != tol.gt(b.y, p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if tol.gt(x_cross, p.x) {
                inside = !inside;
            }
        }
    }
    inside
}

/// Point containment for planar shapes.
pub trait Contains {
    /// Returns `true` if `p` lies in or on the shape under `tol`.
    fn contains_point_with(&self, p: &Point2, tol: Tolerance) -> bool;

    /// Same as [`Contains::contains_point_with`] with the default tolerance.
    fn contains_point(&self, p: &Point2) -> bool {
        self.contains_point_with(p, Tolerance::default())
    }
}

impl Contains for Segment2 {
    fn contains_point_with(&self, p: &Point2, tol: Tolerance) -> bool {
        self.contains_with(p, tol)
    }
}

impl Contains for Line2 {
    fn contains_point_with(&self, p: &Point2, tol: Tolerance) -> bool {
        self.contains_with(p, tol)
    }
}

impl Contains for Ray2 {
    fn contains_point_with(&self, p: &Point2, tol: Tolerance) -> bool {
        self.contains_with(p, tol)
    }
}

impl Contains for Polygon2 {
    fn contains_point_with(&self, p: &Point2, tol: Tolerance) -> bool {
        point_in_polygon(p, self, tol)
    }
}

/// Returns `true` if `p` lies in or on `shape`.
#[must_use]
pub fn contains<S: Contains + ?Sized>(p: &Point2, shape: &S) -> bool {
    shape.contains_point(p)
}

/// Returns `true` if `p` lies in or on `shape` under `tol`.
#[must_use]
pub fn contains_with<S: Contains + ?Sized>(p: &Point2, shape: &S, tol: Tolerance) -> bool {
    shape.contains_point_with(p, tol)
}
