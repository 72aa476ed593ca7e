/// An error type for the fallible vector, matrix and quaternion operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// The number of elements does not match the size of the target type.
    #[error("Invalid number of elements: expected {expected}, got {actual}")]
    InvalidLength {
        /// The number of elements the target type holds.
        expected: usize,
        /// The number of elements provided.
        actual: usize,
    },

    /// An index lies outside of a dimension.
    #[error("Index {index} is out of bounds for a dimension of size {size}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The size of the indexed dimension.
        size: usize,
    },

    /// The matrix has no inverse.
    #[error("Matrix is singular")]
    Singular,

    /// A zero length vector cannot be normalized.
    #[error("Cannot normalize a vector of zero length")]
    ZeroLength,

    /// An element could not be represented in the target element type.
    #[error("Element cast failed")]
    CastError,
}
