use crate::geometry::{Line, Line2, Segment};

use super::{cross_2d, Point, Point2, Tolerance};

/// Which side of a directed line a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Counter-clockwise of the direction.
    Left,
    /// Clockwise of the direction.
    Right,
    On,
}

/// Returns the distance from `p` to its orthogonal projection on `line`.
#[must_use]
pub fn distance_to_line<const D: usize>(p: &Point<D>, line: &Line<D>) -> f64 {
    (p - line.project(p)).norm()
}

/// Returns the distance from `p` to the closest point of `segment`.
#[must_use]
pub fn distance_to_segment<const D: usize>(p: &Point<D>, segment: &Segment<D>) -> f64 {
    (p - segment.project(p)).norm()
}

/// Signed side test of `p` against `line`.
///
/// Computes `(p - origin) x direction`: positive on the right of the line,
/// negative on the left, zero on it. Since the direction is unit length the
/// magnitude is the distance to the line.
#[must_use]
pub fn side_of_line(p: &Point2, line: &Line2) -> f64 {
    cross_2d(&(p - line.origin()), line.direction())
}

/// Classifies [`side_of_line`] with a tolerance band around the line.
#[must_use]
pub fn classify_side(p: &Point2, line: &Line2, tol: Tolerance) -> Side {
    let s = side_of_line(p, line);
    if tol.gt(s, 0.0) {
        Side::Right
    } else if tol.lt(s, 0.0) {
        Side::Left
    } else {
        Side::On
    }
}
