use tracing::debug;

use crate::geometry::Polygon2;

use super::{cross_2d, Point2};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Convex hull by Andrew's monotone chain.
///
/// Sorts `points` in place, ascending by `x` then `y`, and returns the hull
/// counter-clockwise starting from the lowest-`x` point. Collinear points
/// on hull edges are dropped. Returns `None` for fewer than three points or
/// when every point lies on one line.
///
/// The turn test is exact (`cross <= 0` pops). The cross product scales with
/// edge length, so an epsilon threshold here would discard real hull
/// vertices of tightly clustered points.
#[must_use]
pub fn convex_hull(points: &mut [Point2]) -> Option<Polygon2> {
    if points.len() < 3 {
        return None;
    }

    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

    let mut hull = monotone_chain(points.iter());
    let upper = monotone_chain(points.iter().rev());

    // The upper chain starts and ends on the lower chain's endpoints.
    let inner = upper.len().saturating_sub(1);
    hull.extend(upper.into_iter().take(inner).skip(1));

    if hull.len() < 3 {
        debug!(
            input = points.len(),
            vertices = hull.len(),
            "convex hull collapsed, input is collinear"
        );
        return None;
    }
    debug!(input = points.len(), vertices = hull.len(), "convex hull built");
    Some(Polygon2::new(hull))
}

/// Owned-input variant of [`convex_hull`] for callers that need their
/// collection left untouched.
#[must_use]
pub fn convex_hull_owned(mut points: Vec<Point2>) -> Option<Polygon2> {
    convex_hull(&mut points)
}

/// One half of the monotone chain: pops while the last two points and the
/// candidate do not make a strict left turn.
fn monotone_chain<'a>(points: impl Iterator<Item = &'a Point2>) -> Vec<Point2> {
    let mut chain: Vec<Point2> = Vec::new();
    for &p in points {
        while let [.., a, b] = chain.as_slice() {
            if cross_2d(&(b - a), &(p - b)) > 0.0 {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::EPSILON;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert!((signed_area_2d(&pts) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert!((signed_area_2d(&pts) + 1.0).abs() < EPSILON);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0)]).abs() < EPSILON);
        assert!(signed_area_2d(&[]).abs() < EPSILON);
    }

    #[test]
    fn hull_drops_interior_points() {
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
        assert!(hull.signed_area() > 0.0);
    }

    #[test]
    fn hull_sorts_input_in_place() {
        let mut pts = vec![p(3.0, 1.0), p(0.0, 2.0), p(0.0, 0.0), p(1.0, 5.0)];
        let _ = convex_hull(&mut pts);
        assert_eq!(pts, vec![p(0.0, 0.0), p(0.0, 2.0), p(1.0, 5.0), p(3.0, 1.0)]);
    }

    #[test]
    fn owned_variant_matches() {
        let pts = vec![p(0.0, 0.0), p(4.0, 0.0), p(2.0, 1.0), p(2.0, 3.0)];
        let mut scratch = pts.clone();
        assert_eq!(convex_hull_owned(pts), convex_hull(&mut scratch));
    }

    #[test]
    fn hull_removes_collinear_edge_points() {
        let mut pts = vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
        ];
        let hull = convex_hull(&mut pts).unwrap();
        assert_eq!(
            hull.vertices(),
            &[p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]
        );
    }

    #[test]
    fn hull_ignores_duplicates() {
        let mut pts = vec![p(0.0, 0.0), p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)];
        let hull = convex_hull(&mut pts).unwrap();
        assert_eq!(hull.num_vertices(), 3);
    }

    #[test]
    fn hull_keeps_vertices_of_a_tight_cluster() {
        let corner = p(5e-7, -5e-7);
        let mut pts = vec![p(0.0, 0.0), corner, p(1e-6, 0.0), p(5.0, 10.0), p(10.0, 0.0)];
        let input = pts.clone();
        let hull = convex_hull(&mut pts).unwrap();
        assert_eq!(
            hull.vertices(),
            &[p(0.0, 0.0), corner, p(10.0, 0.0), p(5.0, 10.0)]
        );
        for q in &input {
            assert!(hull.contains(q), "{q:?} outside the hull");
        }
    }

    #[test]
    fn hull_keeps_nearly_collinear_vertex() {
        let mut pts = vec![p(0.0, 0.0), p(1.0, -1e-12), p(2.0, 0.0), p(1.0, 1.0)];
        let hull = convex_hull(&mut pts).unwrap();
        assert_eq!(hull.num_vertices(), 4);
        assert!(hull.contains(&p(1.0, -1e-12)));
    }

    #[test]
    fn too_few_points() {
        assert!(convex_hull(&mut []).is_none());
        assert!(convex_hull(&mut [p(0.0, 0.0), p(1.0, 1.0)]).is_none());
    }

    #[test]
    fn collinear_input_has_no_hull() {
        let mut pts = vec![p(0.0, 0.0), p(1.0, 1.0), p(3.0, 3.0), p(2.0, 2.0)];
        assert!(convex_hull(&mut pts).is_none());
        let mut same = vec![p(1.0, 1.0); 4];
        assert!(convex_hull(&mut same).is_none());
    }
}
