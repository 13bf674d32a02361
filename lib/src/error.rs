//! Error types returned by the index.

use thiserror::Error;

/// Errors reported by [`KdTree`](crate::KdTree) construction and queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The point set handed to the builder cannot form a tree.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// A query argument does not have the tree's dimensionality.
    #[error("{argument} has {actual} coordinates, but the tree is {expected}-dimensional")]
    DimensionMismatch {
        argument: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Reasons a point set is rejected at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("at least one point is required to build the tree")]
    Empty,

    #[error("points must have at least one coordinate")]
    ZeroDimensional,

    #[error("point {index} has {actual} coordinates, expected {expected}")]
    InconsistentDimensions {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("point {index} has a NaN coordinate on axis {axis}")]
    NanCoordinate { index: usize, axis: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
