use thiserror::Error;

/// Top-level error type for the planar geometry toolkit.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised when a geometric object cannot be constructed.
///
/// Degenerate configurations met *during* a query (parallel lines, empty
/// overlaps, too few hull points) are never errors; they are result variants.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("edge index {index} is out of bounds for a polygon with {len} edges")]
    EdgeIndexOutOfRange { index: usize, len: usize },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
