mod line;
mod polygon;
mod ray;
mod segment;

pub use line::{Line, Line2, Line3};
pub use polygon::{Polygon, Polygon2, Polygon3};
pub use ray::{Ray, Ray2, Ray3};
pub use segment::{Segment, Segment2, Segment3};
