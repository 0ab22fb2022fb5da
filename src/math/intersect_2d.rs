//! Line, segment and ray intersection in the plane.
//!
//! Every pairing reduces to [`line_line`] on the supporting lines followed by
//! a containment filter on the bounded operand(s). Keeping one core routine is
//! what makes e.g. segment-segment hits agree with polygon edge containment.

use tracing::trace;

use crate::geometry::{Line2, Ray2, Segment2};

use super::{cross_2d, Point2, Tolerance};

/// Relationship between two infinite lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    /// The lines cross at exactly one point.
    Intersecting(Point2),
    /// Distinct lines with the same direction.
    Parallel,
    /// Both lines describe the same set of points.
    Coincident,
}

/// The shared part of two collinear primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlap {
    /// A bounded overlap, endpoints in ascending `(x, y)` order.
    Segment(Segment2),
    /// A half-infinite overlap (a ray lying on a line).
    Ray(Ray2),
}

/// Result of intersecting two primitives where at least one is bounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    NoIntersection,
    /// The primitives share exactly one point.
    Intersecting(Point2),
    /// The primitives share more than one point.
    Overlapping(Overlap),
}

impl SegmentIntersection {
    /// The single intersection point, if that is what was found.
    #[must_use]
    pub fn point(&self) -> Option<Point2> {
        match self {
            Self::Intersecting(p) => Some(*p),
            _ => None,
        }
    }

    /// The overlap, if the primitives are collinear and share more than a point.
    #[must_use]
    pub fn overlap(&self) -> Option<&Overlap> {
        match self {
            Self::Overlapping(o) => Some(o),
            _ => None,
        }
    }

    /// Returns `true` unless the result is `NoIntersection`.
    #[must_use]
    pub fn is_intersection(&self) -> bool {
        !matches!(self, Self::NoIntersection)
    }
}

impl Overlap {
    #[must_use]
    pub fn as_segment(&self) -> Option<&Segment2> {
        match self {
            Self::Segment(s) => Some(s),
            Self::Ray(_) => None,
        }
    }

    #[must_use]
    pub fn as_ray(&self) -> Option<&Ray2> {
        match self {
            Self::Ray(r) => Some(r),
            Self::Segment(_) => None,
        }
    }
}

/// Intersects two infinite lines.
///
/// With unit directions, `d1 x d2` is the sine of the angle between them, so
/// the parallel test compares it directly against the tolerance.
#[must_use]
pub fn line_line(l1: &Line2, l2: &Line2, tol: Tolerance) -> LineIntersection {
    let d1 = l1.direction();
    let d2 = l2.direction();
    let denom = cross_2d(d1, d2);
    let diff = l2.origin() - l1.origin();

    if tol.is_zero(denom) {
        // |diff x d1| is the distance from l2's origin to l1.
        return if tol.is_zero(cross_2d(&diff, d1)) {
            LineIntersection::Coincident
        } else {
            LineIntersection::Parallel
        };
    }

    let t = cross_2d(&diff, d2) / denom;
    LineIntersection::Intersecting(l1.point_at(t))
}

/// Intersects two bounded segments.
#[must_use]
pub fn segment_segment(s1: &Segment2, s2: &Segment2, tol: Tolerance) -> SegmentIntersection {
    if s1.is_degenerate(tol) {
        trace!(x = s1.p1().x, y = s1.p1().y, "zero-length segment treated as a point");
        return point_hit(s1.p1(), s2.contains_with(s1.p1(), tol));
    }
    if s2.is_degenerate(tol) {
        trace!(x = s2.p1().x, y = s2.p1().y, "zero-length segment treated as a point");
        return point_hit(s2.p1(), s1.contains_with(s2.p1(), tol));
    }
    let (Some(l1), Some(l2)) = (s1.supporting_line(), s2.supporting_line()) else {
        return SegmentIntersection::NoIntersection;
    };

    match line_line(&l1, &l2, tol) {
        LineIntersection::Parallel => SegmentIntersection::NoIntersection,
        LineIntersection::Intersecting(p) => {
            point_hit(&p, s1.contains_with(&p, tol) && s2.contains_with(&p, tol))
        }
        LineIntersection::Coincident => {
            trace!("collinear segments, reducing to 1-D overlap");
            collinear_segments(&l1, s1, s2, tol)
        }
    }
}

/// Intersects an infinite line with a bounded segment.
///
/// A segment lying on the line overlaps it entirely.
#[must_use]
pub fn line_segment(line: &Line2, segment: &Segment2, tol: Tolerance) -> SegmentIntersection {
    if segment.is_degenerate(tol) {
        trace!("zero-length segment treated as a point");
        return point_hit(segment.p1(), line.contains_with(segment.p1(), tol));
    }
    let Some(seg_line) = segment.supporting_line() else {
        return SegmentIntersection::NoIntersection;
    };

    match line_line(line, &seg_line, tol) {
        LineIntersection::Parallel => SegmentIntersection::NoIntersection,
        LineIntersection::Intersecting(p) => point_hit(&p, segment.contains_with(&p, tol)),
        LineIntersection::Coincident => {
            SegmentIntersection::Overlapping(Overlap::Segment(*segment))
        }
    }
}

/// Intersects an infinite line with a ray.
///
/// A ray lying on the line overlaps it entirely and is reported as
/// [`Overlap::Ray`].
#[must_use]
pub fn line_ray(line: &Line2, ray: &Ray2, tol: Tolerance) -> SegmentIntersection {
    match line_line(line, &ray.supporting_line(), tol) {
        LineIntersection::Parallel => SegmentIntersection::NoIntersection,
        LineIntersection::Intersecting(p) => point_hit(&p, ray.contains_with(&p, tol)),
        LineIntersection::Coincident => SegmentIntersection::Overlapping(Overlap::Ray(*ray)),
    }
}

/// Intersects a bounded segment with a ray.
///
/// When the two are collinear the result is the part of the segment at or
/// ahead of the ray origin. A ray that starts inside the segment overlaps the
/// piece between its origin and the endpoint it points at, in either
/// direction.
#[must_use]
pub fn segment_ray(segment: &Segment2, ray: &Ray2, tol: Tolerance) -> SegmentIntersection {
    if segment.is_degenerate(tol) {
        trace!("zero-length segment treated as a point");
        return point_hit(segment.p1(), ray.contains_with(segment.p1(), tol));
    }
    let Some(seg_line) = segment.supporting_line() else {
        return SegmentIntersection::NoIntersection;
    };

    match line_line(&seg_line, &ray.supporting_line(), tol) {
        LineIntersection::Parallel => SegmentIntersection::NoIntersection,
        LineIntersection::Intersecting(p) => {
            point_hit(&p, segment.contains_with(&p, tol) && ray.contains_with(&p, tol))
        }
        LineIntersection::Coincident => {
            trace!("segment collinear with ray, clipping at the ray origin");
            collinear_segment_ray(segment, ray, tol)
        }
    }
}

fn point_hit(p: &Point2, hit: bool) -> SegmentIntersection {
    if hit {
        SegmentIntersection::Intersecting(*p)
    } else {
        SegmentIntersection::NoIntersection
    }
}

/// Endpoints of `segment` as `(parameter, point)` pairs sorted along `line`.
fn ordered_along(line: &Line2, segment: &Segment2) -> [(f64, Point2); 2] {
    let a = (line.parameter_of(segment.p1()), *segment.p1());
    let b = (line.parameter_of(segment.p2()), *segment.p2());
    if a.0 <= b.0 {
        [a, b]
    } else {
        [b, a]
    }
}

fn collinear_segments(
    line: &Line2,
    s1: &Segment2,
    s2: &Segment2,
    tol: Tolerance,
) -> SegmentIntersection {
    let [a_start, a_end] = ordered_along(line, s1);
    let [b_start, b_end] = ordered_along(line, s2);

    let start = if a_start.0 >= b_start.0 { a_start } else { b_start };
    let end = if a_end.0 <= b_end.0 { a_end } else { b_end };
    overlap_from_range(start, end, tol)
}

fn collinear_segment_ray(segment: &Segment2, ray: &Ray2, tol: Tolerance) -> SegmentIntersection {
    let [near, far] = ordered_along(&ray.supporting_line(), segment);
    // Clip the part of the segment behind the ray origin.
    let start = if near.0 > 0.0 { near } else { (0.0, *ray.origin()) };
    overlap_from_range(start, far, tol)
}

fn overlap_from_range(
    start: (f64, Point2),
    end: (f64, Point2),
    tol: Tolerance,
) -> SegmentIntersection {
    let len = end.0 - start.0;
    if tol.lt(len, 0.0) {
        SegmentIntersection::NoIntersection
    } else if tol.is_zero(len) {
        SegmentIntersection::Intersecting(start.1)
    } else {
        SegmentIntersection::Overlapping(Overlap::Segment(canonical_segment(start.1, end.1, tol)))
    }
}

/// Orders the endpoints ascending by `x`, then `y`, so overlaps do not depend
/// on argument order.
fn canonical_segment(a: Point2, b: Point2, tol: Tolerance) -> Segment2 {
    if tol.lt(a.x, b.x) || (tol.eq(a.x, b.x) && a.y <= b.y) {
        Segment2::new(a, b)
    } else {
        Segment2::new(b, a)
    }
}

/// Pairwise intersection between planar primitives.
///
/// Implemented for every ordered pair of [`Line2`], [`Segment2`] and [`Ray2`]
/// except ray-ray; swapped orders delegate to the same routine and always
/// classify identically.
pub trait Intersect<Rhs> {
    type Output;

    /// Intersects `self` with `other` under the given tolerance.
    fn intersect_with(&self, other: &Rhs, tol: Tolerance) -> Self::Output;

    /// Intersects `self` with `other` under the default tolerance.
    fn intersect(&self, other: &Rhs) -> Self::Output {
        self.intersect_with(other, Tolerance::default())
    }
}

impl Intersect<Line2> for Line2 {
    type Output = LineIntersection;

    fn intersect_with(&self, other: &Line2, tol: Tolerance) -> LineIntersection {
        line_line(self, other, tol)
    }
}

impl Intersect<Segment2> for Segment2 {
    type Output = SegmentIntersection;

    fn intersect_with(&self, other: &Segment2, tol: Tolerance) -> SegmentIntersection {
        segment_segment(self, other, tol)
    }
}

impl Intersect<Segment2> for Line2 {
    type Output = SegmentIntersection;

    fn intersect_with(&self, other: &Segment2, tol: Tolerance) -> SegmentIntersection {
        line_segment(self, other, tol)
    }
}

impl Intersect<Line2> for Segment2 {
    type Output = SegmentIntersection;

    fn intersect_with(&self, other: &Line2, tol: Tolerance) -> SegmentIntersection {
        line_segment(other, self, tol)
    }
}

impl Intersect<Ray2> for Line2 {
    type Output = SegmentIntersection;

    fn intersect_with(&self, other: &Ray2, tol: Tolerance) -> SegmentIntersection {
        line_ray(self, other, tol)
    }
}

impl Intersect<Line2> for Ray2 {
    type Output = SegmentIntersection;

    fn intersect_with(&self, other: &Line2, tol: Tolerance) -> SegmentIntersection {
        line_ray(other, self, tol)
    }
}

impl Intersect<Ray2> for Segment2 {
    type Output = SegmentIntersection;

    fn intersect_with(&self, other: &Ray2, tol: Tolerance) -> SegmentIntersection {
        segment_ray(self, other, tol)
    }
}

impl Intersect<Segment2> for Ray2 {
    type Output = SegmentIntersection;

    fn intersect_with(&self, other: &Segment2, tol: Tolerance) -> SegmentIntersection {
        segment_ray(other, self, tol)
    }
}

/// Intersects `a` with `b` under the default tolerance.
#[must_use]
pub fn intersection<A, B>(a: &A, b: &B) -> A::Output
where
    A: Intersect<B>,
{
    a.intersect(b)
}

/// Intersects `a` with `b` under `tol`.
#[must_use]
pub fn intersection_with<A, B>(a: &A, b: &B, tol: Tolerance) -> A::Output
where
    A: Intersect<B>,
{
    a.intersect_with(b, tol)
}
