mod closest_point;
mod convex_hull;
mod intersect;
mod point_containment;

pub use closest_point::{ClosestPoint, ClosestPointResult, LinearElement};
pub use convex_hull::ConvexHull;
pub use intersect::Intersection;
pub use point_containment::PointContainment;
