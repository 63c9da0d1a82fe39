//! 8×8 matrices over GF(2) with structured validation.

use crate::error::SboxError;

/// 8×8 binary matrix over GF(2), stored row-major with each row packed
/// into a `u8`. Bit `j` of row `i` holds entry `(i, j)`; bit 0 is the
/// least significant, matching the bit-vector convention used by
/// [`apply`](Matrix8::apply).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Matrix8 {
    rows: [u8; 8],
}

/// The affine matrix of the canonical AES S-box (row `i` holds ones at
/// columns `i, i+4, i+5, i+6, i+7` mod 8).
pub const AES_MATRIX: Matrix8 =
    Matrix8::from_packed_rows([0xF1, 0xE3, 0xC7, 0x8F, 0x1F, 0x3E, 0x7C, 0xF8]);

/// The affine constant of the canonical AES S-box.
pub const AES_CONSTANT: u8 = 0x63;

impl Matrix8 {
    /// Builds a matrix from rows already packed into bytes.
    pub const fn from_packed_rows(rows: [u8; 8]) -> Self {
        Self { rows }
    }

    /// Returns the identity matrix.
    pub fn identity() -> Self {
        let mut rows = [0u8; 8];
        for (i, row) in rows.iter_mut().enumerate() {
            *row = 1u8 << i;
        }
        Self { rows }
    }

    /// Builds a matrix from a nested row-major array of 0/1 entries,
    /// checking dimensions and binary values. Rank is not checked here;
    /// see [`validate_matrix`] for the full validation used before S-box
    /// construction.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, SboxError> {
        if rows.len() != 8 {
            return Err(SboxError::RowCount { found: rows.len() });
        }
        let mut packed = [0u8; 8];
        for (i, row) in rows.iter().enumerate() {
            if row.len() != 8 {
                return Err(SboxError::RowLength {
                    row: i,
                    found: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 => packed[i] |= 1u8 << j,
                    _ => {
                        return Err(SboxError::NonBinaryEntry {
                            row: i,
                            col: j,
                            value,
                        })
                    }
                }
            }
        }
        Ok(Self { rows: packed })
    }

    /// Applies the matrix to an 8-bit value treated as a column vector
    /// (bit `i` of the byte is vector component `i`). Each output bit is
    /// the parity of `row & value`, i.e. XOR accumulation of the boolean
    /// matrix-vector product.
    pub fn apply(&self, value: u8) -> u8 {
        let mut out = 0u8;
        for (row_idx, row) in self.rows.iter().enumerate() {
            let parity = (row & value).count_ones() as u8 & 1;
            out |= parity << row_idx;
        }
        out
    }

    /// Computes the rank over GF(2) by Gaussian elimination on the packed
    /// rows. Integer arithmetic only; floating-point rank estimation would
    /// introduce precision artifacts at exactly the boundary this check
    /// guards.
    pub fn rank(&self) -> usize {
        let mut rows = self.rows;
        let mut rank = 0usize;
        for col in 0..8 {
            let pivot = (rank..8).find(|&r| (rows[r] >> col) & 1 == 1);
            let Some(pivot) = pivot else { continue };
            rows.swap(rank, pivot);
            for r in 0..8 {
                if r != rank && (rows[r] >> col) & 1 == 1 {
                    rows[r] ^= rows[rank];
                }
            }
            rank += 1;
        }
        rank
    }

    /// Returns true if the matrix has full rank 8.
    pub fn is_invertible(&self) -> bool {
        self.rank() == 8
    }

    /// Exposes the packed rows (bit `j` of row `i` = entry `(i, j)`).
    pub fn packed_rows(&self) -> &[u8; 8] {
        &self.rows
    }

    /// Returns the matrix as nested 0/1 rows, the wire form used at the
    /// workspace boundary.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|&row| (0..8).map(|j| (row >> j) & 1).collect())
            .collect()
    }
}

/// Full matrix validation: dimensions, binary entries, and rank 8 over
/// GF(2). Returns the parsed matrix so callers validate and construct in
/// one step.
pub fn validate_matrix(rows: &[Vec<u8>]) -> Result<Matrix8, SboxError> {
    let matrix = Matrix8::from_rows(rows)?;
    let rank = matrix.rank();
    if rank != 8 {
        return Err(SboxError::NotInvertible { rank });
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aes_rows() -> Vec<Vec<u8>> {
        vec![
            vec![1, 0, 0, 0, 1, 1, 1, 1],
            vec![1, 1, 0, 0, 0, 1, 1, 1],
            vec![1, 1, 1, 0, 0, 0, 1, 1],
            vec![1, 1, 1, 1, 0, 0, 0, 1],
            vec![1, 1, 1, 1, 1, 0, 0, 0],
            vec![0, 1, 1, 1, 1, 1, 0, 0],
            vec![0, 0, 1, 1, 1, 1, 1, 0],
            vec![0, 0, 0, 1, 1, 1, 1, 1],
        ]
    }

    #[test]
    fn aes_matrix_matches_nested_form() {
        let parsed = Matrix8::from_rows(&aes_rows()).expect("valid matrix");
        assert_eq!(parsed, AES_MATRIX);
        assert_eq!(AES_MATRIX.to_rows(), aes_rows());
    }

    #[test]
    fn identity_applies_as_identity() {
        let id = Matrix8::identity();
        for x in 0..=255u8 {
            assert_eq!(id.apply(x), x);
        }
        assert_eq!(id.rank(), 8);
    }

    #[test]
    fn aes_matrix_has_full_rank() {
        assert_eq!(AES_MATRIX.rank(), 8);
        assert!(AES_MATRIX.is_invertible());
    }

    #[test]
    fn singular_matrix_reports_rank() {
        // Two identical rows drop the rank to at most 7.
        let mut rows = aes_rows();
        rows[1] = rows[0].clone();
        match validate_matrix(&rows) {
            Err(SboxError::NotInvertible { rank }) => assert!(rank < 8),
            other => panic!("expected rank failure, got {other:?}"),
        }
    }

    #[test]
    fn zero_matrix_has_rank_zero() {
        let zero = Matrix8::from_packed_rows([0u8; 8]);
        assert_eq!(zero.rank(), 0);
    }

    #[test]
    fn wrong_row_count_is_reported() {
        let rows = vec![vec![0u8; 8]; 7];
        assert_eq!(
            Matrix8::from_rows(&rows),
            Err(SboxError::RowCount { found: 7 })
        );
    }

    #[test]
    fn wrong_row_length_names_the_row() {
        let mut rows = aes_rows();
        rows[3] = vec![1, 0, 1];
        assert_eq!(
            Matrix8::from_rows(&rows),
            Err(SboxError::RowLength { row: 3, found: 3 })
        );
    }

    #[test]
    fn non_binary_entry_names_the_cell() {
        let mut rows = aes_rows();
        rows[5][2] = 7;
        assert_eq!(
            Matrix8::from_rows(&rows),
            Err(SboxError::NonBinaryEntry {
                row: 5,
                col: 2,
                value: 7
            })
        );
    }

    #[test]
    fn apply_is_linear() {
        let m = AES_MATRIX;
        for (a, b) in [(0x12u8, 0x34u8), (0xAB, 0xCD), (0x01, 0x80)] {
            assert_eq!(m.apply(a ^ b), m.apply(a) ^ m.apply(b));
        }
    }
}
