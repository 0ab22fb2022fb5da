//! Cross-module invariants: argument-order symmetry, containment of reported
//! hits, hull minimality, collinear overlap classification and polygon
//! boundary inclusion.
//!
//! Coordinates are mostly drawn from a small integer grid so that collinear,
//! touching and coincident configurations come up often and cross products
//! are exact. Hull properties also run on clusters of points a few
//! micrometres apart, where cross products are far below `EPSILON`.

#![allow(clippy::unwrap_used)]

use planar::math::intersect_2d::{line_segment, segment_ray, segment_segment};
use planar::{
    contains, convex_hull, intersection, Line2, LineIntersection, Overlap, Point2, Polygon2,
    Ray2, Segment2, SegmentIntersection, Tolerance, Vector2,
};
use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn coord() -> impl Strategy<Value = f64> {
    (-10i32..=10).prop_map(f64::from)
}

fn point() -> impl Strategy<Value = Point2> {
    (coord(), coord()).prop_map(|(x, y)| Point2::new(x, y))
}

/// A grid point nudged by a multiple of `1e-6` on each axis.
fn clustered_point() -> impl Strategy<Value = Point2> {
    (-2i32..=2, -2i32..=2, -3i32..=3, -3i32..=3).prop_map(|(x, y, dx, dy)| {
        Point2::new(
            f64::from(x) * 5.0 + f64::from(dx) * 1e-6,
            f64::from(y) * 5.0 + f64::from(dy) * 1e-6,
        )
    })
}

fn segment() -> impl Strategy<Value = Segment2> {
    (point(), point()).prop_map(|(a, b)| Segment2::new(a, b))
}

fn distinct_pair() -> impl Strategy<Value = (Point2, Point2)> {
    (point(), point()).prop_filter("points must differ", |(a, b)| a != b)
}

fn ray() -> impl Strategy<Value = Ray2> {
    distinct_pair().prop_map(|(a, b)| Ray2::from_points(a, b))
}

fn line() -> impl Strategy<Value = Line2> {
    distinct_pair().prop_map(|(a, b)| Line2::from_points(a, b))
}

fn near(a: &Point2, b: &Point2) -> bool {
    (a - b).norm() < 1e-9
}

fn same_result(a: &SegmentIntersection, b: &SegmentIntersection) -> bool {
    match (a, b) {
        (SegmentIntersection::NoIntersection, SegmentIntersection::NoIntersection) => true,
        (SegmentIntersection::Intersecting(p), SegmentIntersection::Intersecting(q)) => near(p, q),
        (
            SegmentIntersection::Overlapping(Overlap::Segment(s)),
            SegmentIntersection::Overlapping(Overlap::Segment(t)),
        ) => near(s.p1(), t.p1()) && near(s.p2(), t.p2()),
        (
            SegmentIntersection::Overlapping(Overlap::Ray(r)),
            SegmentIntersection::Overlapping(Overlap::Ray(q)),
        ) => r == q,
        _ => false,
    }
}

proptest! {
    #[test]
    fn segment_segment_is_symmetric(s1 in segment(), s2 in segment()) {
        init_tracing();
        let ab = intersection(&s1, &s2);
        let ba = intersection(&s2, &s1);
        prop_assert!(same_result(&ab, &ba), "{ab:?} vs {ba:?}");
    }

    #[test]
    fn mixed_pairs_are_symmetric(l in line(), s in segment(), r in ray()) {
        let ls = intersection(&l, &s);
        prop_assert!(same_result(&ls, &intersection(&s, &l)));
        let lr = intersection(&l, &r);
        prop_assert!(same_result(&lr, &intersection(&r, &l)));
        let sr = intersection(&s, &r);
        prop_assert!(same_result(&sr, &intersection(&r, &s)));
    }

    #[test]
    fn reported_points_lie_on_both_operands(s1 in segment(), s2 in segment(), l in line(), r in ray()) {
        let tol = Tolerance::default();
        if let Some(p) = segment_segment(&s1, &s2, tol).point() {
            prop_assert!(contains(&p, &s1) && contains(&p, &s2), "{p:?}");
        }
        if let Some(p) = line_segment(&l, &s1, tol).point() {
            prop_assert!(contains(&p, &l) && contains(&p, &s1), "{p:?}");
        }
        if let Some(p) = segment_ray(&s1, &r, tol).point() {
            prop_assert!(contains(&p, &s1) && contains(&p, &r), "{p:?}");
        }
    }

    #[test]
    fn collinear_overlap_matches_interval_overlap(
        base in point(),
        dir in (-5i32..=5, -5i32..=5).prop_filter("non-zero", |&(x, y)| x != 0 || y != 0),
        a in (-10i32..=10, -10i32..=10),
        b in (-10i32..=10, -10i32..=10),
    ) {
        let d = Vector2::new(f64::from(dir.0), f64::from(dir.1));
        let at = |t: i32| base + d * f64::from(t);
        let s1 = Segment2::new(at(a.0), at(a.1));
        let s2 = Segment2::new(at(b.0), at(b.1));

        let overlap = a.0.max(a.1).min(b.0.max(b.1)) - a.0.min(a.1).max(b.0.min(b.1));
        let result = intersection(&s1, &s2);
        match overlap {
            o if o > 0 => prop_assert!(
                matches!(result, SegmentIntersection::Overlapping(Overlap::Segment(_))),
                "expected overlap, got {result:?}"
            ),
            0 => prop_assert!(
                matches!(result, SegmentIntersection::Intersecting(_)),
                "expected single point, got {result:?}"
            ),
            _ => prop_assert_eq!(result, SegmentIntersection::NoIntersection),
        }
    }

    #[test]
    fn hull_is_minimal_and_encloses_input(pts in prop::collection::vec(point(), 3..40)) {
        init_tracing();
        let input = pts.clone();
        let mut sorted = pts;
        match convex_hull(&mut sorted) {
            Some(hull) => {
                for v in hull.vertices() {
                    prop_assert!(input.contains(v), "{v:?} is not an input point");
                }
                for p in &input {
                    prop_assert!(contains(p, &hull), "{p:?} lies outside the hull");
                }
                prop_assert!(hull.signed_area() > 0.0);
            }
            None => {
                // Only collinear (or coincident) input has no hull.
                let a = input[0];
                let far = input.iter().copied().find(|p| *p != a);
                if let Some(b) = far {
                    for p in &input {
                        let cross = planar::math::cross_2d(&(b - a), &(p - a));
                        prop_assert!(cross.abs() < 1e-9, "{p:?} is off the line");
                    }
                }
            }
        }
    }

    #[test]
    fn hull_encloses_clustered_input(pts in prop::collection::vec(clustered_point(), 3..30)) {
        let input = pts.clone();
        let mut sorted = pts;
        if let Some(hull) = convex_hull(&mut sorted) {
            for v in hull.vertices() {
                prop_assert!(input.contains(v), "{v:?} is not an input point");
            }
            for p in &input {
                prop_assert!(contains(p, &hull), "{p:?} lies outside the hull");
            }
        }
    }

    #[test]
    fn polygon_boundary_is_contained(
        pts in prop::collection::vec(point(), 3..20),
        edge_pick in any::<prop::sample::Index>(),
        t in 0.0f64..=1.0,
    ) {
        let mut pts = pts;
        if let Some(hull) = convex_hull(&mut pts) {
            let edge = hull.edge(edge_pick.index(hull.num_vertices()));
            let p = edge.p1() + (edge.p2() - edge.p1()) * t;
            prop_assert!(contains(&p, &hull), "{p:?} on {edge:?}");
        }
    }
}

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

#[test]
fn crossing_lines() {
    init_tracing();
    let l1 = Line2::from_points(p(0.0, 1.0), p(10.0, 1.0));
    let l2 = Line2::from_points(p(5.0, 0.0), p(5.0, 10.0));
    let LineIntersection::Intersecting(hit) = intersection(&l1, &l2) else {
        panic!("lines should cross");
    };
    assert_abs_diff_eq!(hit, p(5.0, 1.0), epsilon = 1e-9);
}

#[test]
fn parallel_lines() {
    let l1 = Line2::from_points(p(0.0, 1.0), p(10.0, 1.0));
    let l2 = Line2::from_points(p(0.0, 3.0), p(10.0, 3.0));
    assert_eq!(intersection(&l1, &l2), LineIntersection::Parallel);
}

#[test]
fn crossing_diagonals() {
    let s1 = Segment2::new(p(0.0, 0.0), p(10.0, 10.0));
    let s2 = Segment2::new(p(0.0, 10.0), p(10.0, 0.0));
    let hit = intersection(&s1, &s2).point().unwrap();
    assert_abs_diff_eq!(hit, p(5.0, 5.0), epsilon = 1e-9);
}

#[test]
fn overlapping_horizontal_segments() {
    let s1 = Segment2::new(p(0.0, 0.0), p(5.0, 0.0));
    let s2 = Segment2::new(p(3.0, 0.0), p(8.0, 0.0));
    let shared = intersection(&s1, &s2)
        .overlap()
        .and_then(Overlap::as_segment)
        .copied()
        .unwrap();
    assert_abs_diff_eq!(*shared.p1(), p(3.0, 0.0), epsilon = 1e-9);
    assert_abs_diff_eq!(*shared.p2(), p(5.0, 0.0), epsilon = 1e-9);
}

#[test]
fn hull_drops_interior_points() {
    init_tracing();
    let mut pts = vec![
        p(0.0, 0.0),
        p(5.0, 1.0),
        p(10.0, 0.0),
        p(1.0, 5.0),
        p(9.0, 5.0),
        p(5.0, 2.0),
        p(3.0, 3.0),
        p(7.0, 3.0),
    ];
    let hull = convex_hull(&mut pts).unwrap();
    assert_eq!(
        hull.vertices(),
        &[p(0.0, 0.0), p(10.0, 0.0), p(9.0, 5.0), p(1.0, 5.0)]
    );
}

#[test]
fn point_on_house_wall() {
    let house = Polygon2::new(vec![
        p(0.0, 0.0),
        p(10.0, 0.0),
        p(10.0, 10.0),
        p(5.0, 15.0),
        p(0.0, 10.0),
    ]);
    assert!(contains(&p(10.0, 5.0), &house));
}
