use crate::error::{GeometryError, Result};
use crate::math::containment_2d::point_in_polygon;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Point, Point2, Tolerance};

use super::Segment;

/// An ordered, implicitly closed sequence of at least three vertices.
///
/// Edge `i` runs from `vertices[i]` to `vertices[(i + 1) % n]`. Simplicity is
/// not checked; queries on self-intersecting polygons are unspecified.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<const D: usize> {
    vertices: Vec<Point<D>>,
}

/// 2D polygon.
pub type Polygon2 = Polygon<2>;

/// 3D polygon.
pub type Polygon3 = Polygon<3>;

impl<const D: usize> Polygon<D> {
    /// Creates a polygon from its vertices.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 3 vertices are given.
    #[must_use]
    pub fn new(vertices: Vec<Point<D>>) -> Self {
        assert!(
            vertices.len() >= 3,
            "polygon must have at least 3 vertices, got {}",
            vertices.len()
        );
        Self { vertices }
    }

    /// Fallible counterpart of [`Polygon::new`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` if fewer than 3 vertices are given.
    pub fn try_new(vertices: Vec<Point<D>>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            }
            .into());
        }
        Ok(Self { vertices })
    }

    /// Number of vertices, which is also the number of edges.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Vertices in the order they were given.
    #[must_use]
    pub fn vertices(&self) -> &[Point<D>] {
        &self.vertices
    }

    /// Returns edge `i`; the last edge wraps back to the first vertex.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_vertices()`.
    #[must_use]
    pub fn edge(&self, i: usize) -> Segment<D> {
        let n = self.vertices.len();
        assert!(i < n, "edge index {i} out of bounds for {n} edges");
        Segment::new(self.vertices[i], self.vertices[(i + 1) % n])
    }

    /// Fallible counterpart of [`Polygon::edge`].
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EdgeIndexOutOfRange` if `i >= num_vertices()`.
    pub fn try_edge(&self, i: usize) -> Result<Segment<D>> {
        let len = self.vertices.len();
        if i >= len {
            return Err(GeometryError::EdgeIndexOutOfRange { index: i, len }.into());
        }
        Ok(self.edge(i))
    }

    /// Iterates over all edges in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = Segment<D>> + '_ {
        (0..self.vertices.len()).map(|i| self.edge(i))
    }

    /// Consumes the polygon, returning its vertices.
    #[must_use]
    pub fn into_vertices(self) -> Vec<Point<D>> {
        self.vertices
    }
}

impl Polygon<2> {
    /// Shoelace area: positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Unsigned area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns `true` if `p` is inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        point_in_polygon(p, self, Tolerance::default())
    }

    /// [`Polygon::contains`] under `tol`.
    #[must_use]
    pub fn contains_with(&self, p: &Point2, tol: Tolerance) -> bool {
        point_in_polygon(p, self, tol)
    }
}
