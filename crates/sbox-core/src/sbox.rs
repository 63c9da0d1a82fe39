//! S-box construction, inversion, and inspection.

use crate::affine::Affine8;
use crate::error::SboxError;
use crate::gf256;
use crate::matrix::Matrix8;

/// A substitution box: a total bijection on the 256 byte values.
///
/// Bijectivity is guaranteed by construction when built from a full-rank
/// affine matrix (the field-inverse step is a permutation, the affine step
/// a bijection). Caller-supplied tables are validated explicitly.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SBox {
    table: [u8; 256],
}

/// The permutation inverse of an [`SBox`], used only by the decrypt path.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct InvSBox {
    table: [u8; 256],
}

impl SBox {
    /// Constructs the S-box `S(x) = M · x⁻¹ ⊕ c` from a full-rank affine
    /// matrix and constant. Deterministic and pure; the caller is expected
    /// to have validated the matrix (see [`crate::validate_matrix`]), since
    /// a singular matrix would silently produce a non-bijective table.
    pub fn from_affine(matrix: &Matrix8, constant: u8) -> Self {
        let affine = Affine8::new(*matrix, constant);
        let inverses = gf256::inverse_table();
        let mut table = [0u8; 256];
        for (x, slot) in table.iter_mut().enumerate() {
            *slot = affine.apply(inverses[x]);
        }
        Self { table }
    }

    /// Wraps an explicit 256-entry table, rejecting non-bijections. The
    /// first duplicated value is reported with both indices mapping to it.
    pub fn from_table(table: [u8; 256]) -> Result<Self, SboxError> {
        let mut seen_at = [usize::MAX; 256];
        for (index, &value) in table.iter().enumerate() {
            let prior = seen_at[value as usize];
            if prior != usize::MAX {
                return Err(SboxError::NotBijective {
                    value,
                    first: prior,
                    second: index,
                });
            }
            seen_at[value as usize] = index;
        }
        Ok(Self { table })
    }

    /// Parses the 16×16 nested-array wire form (row = high nibble, column
    /// = low nibble, row-major) and validates bijectivity.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, SboxError> {
        if rows.len() != 16 {
            return Err(SboxError::TableShape {
                row: 16,
                found: rows.len(),
            });
        }
        let mut table = [0u8; 256];
        for (i, row) in rows.iter().enumerate() {
            if row.len() != 16 {
                return Err(SboxError::TableShape {
                    row: i,
                    found: row.len(),
                });
            }
            table[i * 16..(i + 1) * 16].copy_from_slice(row);
        }
        Self::from_table(table)
    }

    /// Substitutes one byte.
    #[inline]
    pub fn lookup(&self, x: u8) -> u8 {
        self.table[x as usize]
    }

    /// Exposes the flat index→value table.
    pub fn table(&self) -> &[u8; 256] {
        &self.table
    }

    /// Returns the 16×16 row-major grid used at the workspace boundary.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.table.chunks_exact(16).map(<[u8]>::to_vec).collect()
    }

    /// Derives the permutation inverse by scatter: `inv[S(x)] = x`.
    pub fn inverse(&self) -> InvSBox {
        let mut table = [0u8; 256];
        for (x, &value) in self.table.iter().enumerate() {
            table[value as usize] = x as u8;
        }
        InvSBox { table }
    }

    /// Returns all fixed points `S(x) = x` in ascending order.
    pub fn fixed_points(&self) -> Vec<u8> {
        self.table
            .iter()
            .enumerate()
            .filter(|&(x, &value)| value == x as u8)
            .map(|(x, _)| x as u8)
            .collect()
    }
}

impl std::fmt::Debug for SBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SBox({:02x} {:02x} {:02x} ..)", self.table[0], self.table[1], self.table[2])
    }
}

impl InvSBox {
    /// Substitutes one byte through the inverse table.
    #[inline]
    pub fn lookup(&self, y: u8) -> u8 {
        self.table[y as usize]
    }

    /// Exposes the flat index→value table.
    pub fn table(&self) -> &[u8; 256] {
        &self.table
    }
}
