//! Error types for kernel operations.

use thiserror::Error;

/// Error type for kernel parsing and construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// A row has a different element count than the rows before it.
    #[error("matrix row {row} contains {found} elements, whereas previous rows had {expected}")]
    DimensionMismatch {
        /// Zero-based index of the offending row.
        row: usize,
        /// Element count of the offending row.
        found: usize,
        /// Element count established by the first row.
        expected: usize,
    },

    /// A matrix element is not a valid number.
    #[error("matrix element at row {row}, column {column} is not a number: {token:?}")]
    InvalidElement {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// The raw token.
        token: String,
    },

    /// Declared dimensions disagree with the weight count.
    #[error("kernel data size {len} doesn't match {width}x{height}")]
    SizeMismatch {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
        /// Actual number of weights.
        len: usize,
    },

    /// Kernel has a zero dimension.
    #[error("kernel must have at least one element")]
    Empty,

    /// Image buffer does not match its declared dimensions.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;
