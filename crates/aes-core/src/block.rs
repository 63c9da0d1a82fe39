//! Block representation helpers.

use crate::error::CipherError;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes.
pub const KEY_SIZE: usize = 16;

/// One 16-byte block. The 4×4 state view is column-major: the byte at
/// row `r`, column `c` lives at index `c * 4 + r`.
pub type Block = [u8; BLOCK_SIZE];

/// XORs `rhs` into `dst`.
#[inline]
pub(crate) fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Converts a slice into a block, rejecting any length other than 16.
pub(crate) fn block_from_slice(bytes: &[u8]) -> Result<Block, CipherError> {
    let block: Block = bytes.try_into().map_err(|_| CipherError::BlockLength {
        expected: BLOCK_SIZE,
        found: bytes.len(),
    })?;
    Ok(block)
}
