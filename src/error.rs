//! Error types for the classifier.

use thiserror::Error;

/// Errors returned by classifier operations.
///
/// An impossible classification (`k == 0` or `k` larger than the number of
/// stored examples) is not an error, see [`KnnClassifier::classify`].
///
/// [`KnnClassifier::classify`]: crate::KnnClassifier::classify
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnnError {
    /// The classifier was constructed with an input length of zero.
    #[error("Invalid input length: must be greater than zero")]
    InvalidInputLength,

    /// A feature or query vector does not have the configured length.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Configured input length
        expected: usize,
        /// Length of the vector received
        actual: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnnError>;
