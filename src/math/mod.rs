pub mod containment_2d;
pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod tolerance;

pub use tolerance::Tolerance;

/// Point in `D`-dimensional space.
pub type Point<const D: usize> = nalgebra::Point<f64, D>;

/// Vector in `D`-dimensional space.
pub type Vector<const D: usize> = nalgebra::SVector<f64, D>;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global absolute tolerance shared by every comparison in the crate.
///
/// Not scaled by operand magnitude: coordinates far from the unit range get
/// proportionally tighter (or looser) classification.
pub const EPSILON: f64 = 1e-9;

/// 2D cross product: `(a.x * b.y - a.y * b.x)`.
///
/// For unit vectors this is the sine of the angle from `a` to `b`.
#[inline]
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}
