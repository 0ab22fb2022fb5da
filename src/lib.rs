pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeometryError, PlanarError, Result};
pub use geometry::{Line, Line2, Polygon, Polygon2, Ray, Ray2, Segment, Segment2};
pub use math::containment_2d::{contains, contains_with, Contains};
pub use math::intersect_2d::{
    intersection, intersection_with, Intersect, LineIntersection, Overlap, SegmentIntersection,
};
pub use math::polygon_2d::{convex_hull, convex_hull_owned};
pub use math::{Point2, Tolerance, Vector2, EPSILON};
