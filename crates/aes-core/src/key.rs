//! Key types for AES-128.

use crate::block::{Block, KEY_SIZE};
use crate::error::CipherError;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl Aes128Key {
    /// Builds a key from a slice, rejecting any length other than 16.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CipherError> {
        let key: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| CipherError::KeyLength {
            expected: KEY_SIZE,
            found: bytes.len(),
        })?;
        Ok(Self(key))
    }
}

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

/// Expanded round keys: round 0 is the raw key, rounds 1–10 are derived.
/// A schedule is valid only for the S-box used to derive it, because
/// SubWord runs through the injected S-box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 11]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_slice_checks_length() {
        assert!(Aes128Key::from_slice(&[0u8; 16]).is_ok());
        assert_eq!(
            Aes128Key::from_slice(&[0u8; 17]),
            Err(CipherError::KeyLength {
                expected: 16,
                found: 17
            })
        );
    }
}
