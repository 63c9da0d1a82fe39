//! Structured failures for matrix validation and S-box resolution.

use thiserror::Error;

/// Errors produced while validating matrices or resolving S-boxes.
///
/// Every variant is local and non-retryable: the inputs are wrong, not the
/// environment. Format failures name the offending location; algebraic
/// failures carry the computed rank or the detected collision.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SboxError {
    /// The matrix does not have exactly 8 rows.
    #[error("matrix must have 8 rows, found {found}")]
    RowCount {
        /// Number of rows supplied.
        found: usize,
    },
    /// A matrix row does not have exactly 8 entries.
    #[error("row {row} must have 8 columns, found {found}")]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of entries in that row.
        found: usize,
    },
    /// A matrix entry is neither 0 nor 1.
    #[error("entry at ({row}, {col}) must be 0 or 1, found {value}")]
    NonBinaryEntry {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending value.
        value: u8,
    },
    /// The matrix is singular over GF(2), so the affine map is not a
    /// bijection and no S-box can be constructed from it.
    #[error("matrix must have full rank 8 over GF(2), found rank {rank}")]
    NotInvertible {
        /// Rank computed by Gaussian elimination.
        rank: usize,
    },
    /// The S-box grid does not have exactly 16 rows of 16 entries.
    #[error("s-box table must be 16x16, row {row} has {found} entries")]
    TableShape {
        /// Zero-based row index (16 marks a wrong row count).
        row: usize,
        /// Number of entries found in that row, or the row count itself.
        found: usize,
    },
    /// An explicit S-box table repeats a value and is not a bijection.
    #[error("s-box is not a bijection: value {value:#04x} appears at indices {first} and {second}")]
    NotBijective {
        /// The duplicated output value.
        value: u8,
        /// First index mapping to `value`.
        first: usize,
        /// Second index mapping to `value`.
        second: usize,
    },
    /// A named matrix id is absent from the catalog.
    #[error("no catalog entry named {id:?}")]
    UnknownId {
        /// The requested identifier.
        id: String,
    },
    /// A named matrix exists in the catalog but carries no matrix data.
    #[error("catalog entry {id:?} is a placeholder with no matrix data")]
    PlaceholderEntry {
        /// The requested identifier.
        id: String,
    },
}
