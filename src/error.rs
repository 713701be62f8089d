use thiserror::Error;

/// Errors surfaced by the clustering engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The document collection contained no vectors.
    #[error("document collection is empty")]
    EmptyInput,

    /// The requested cluster count cannot partition the collection.
    #[error("invalid cluster count k={k} for {dc} documents")]
    InvalidClusterCount { k: usize, dc: usize },

    /// A document vector's length disagrees with the rest of the matrix.
    #[error("document {index} has {found} weights, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A document vector is all zeros and cannot be normalized.
    #[error("document {index} is a zero vector and cannot be normalized")]
    ZeroVector { index: usize },

    /// An assignment step emptied a partition and no donor document could
    /// be found to reseed it.
    #[error("partition {index} became empty and could not be reseeded")]
    EmptyPartition { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
