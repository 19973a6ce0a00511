//! Input validation errors for triangulation.

use thiserror::Error;

/// Errors returned before any geometry is built.
///
/// Degenerate geometry (collinear triples, coincident points) is not an error;
/// it is handled by the best-effort policy documented on `Triangulator`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// An input point has a NaN or infinite coordinate.
    #[error("non-finite coordinate at input index {index}")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input slice.
        index: usize,
    },

    /// The bounding-box margin is negative or not finite.
    #[error("margin must be finite and non-negative, got {0}")]
    InvalidMargin(f64),

    /// The collinearity tolerance is negative or not finite.
    #[error("collinearity tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}
