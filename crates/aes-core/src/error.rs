//! Cipher-boundary failures.

use thiserror::Error;

/// Errors reported by the cipher core. All are synchronous and
/// non-retryable; nothing is padded, truncated, or passed through
/// silently.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Plaintext or ciphertext for the single-block API is not exactly 16
    /// bytes.
    #[error("block must be exactly {expected} bytes, found {found}")]
    BlockLength {
        /// Required block size.
        expected: usize,
        /// Length supplied.
        found: usize,
    },
    /// Key is not exactly 16 bytes.
    #[error("key must be exactly {expected} bytes, found {found}")]
    KeyLength {
        /// Required key size.
        expected: usize,
        /// Length supplied.
        found: usize,
    },
    /// Bulk ciphertext is empty or not a multiple of the block size.
    #[error("ciphertext length {found} is not a positive multiple of 16")]
    CiphertextNotAligned {
        /// Length supplied.
        found: usize,
    },
    /// Trailing PKCS#7 padding failed validation on unpad. The caller
    /// decides whether this implies a wrong key or a wrong S-box.
    #[error("invalid padding: trailing byte {byte:#04x} does not describe valid padding")]
    InvalidPadding {
        /// The final byte of the decrypted buffer.
        byte: u8,
    },
    /// Unpad was asked to strip padding from an empty buffer.
    #[error("cannot strip padding from an empty buffer")]
    MissingPadding,
    /// Quality comparison was given buffers that are not a non-empty pair
    /// of equal length.
    #[error("buffers of length {left} and {right} are not a comparable non-empty pair")]
    BufferMismatch {
        /// First buffer length.
        left: usize,
        /// Second buffer length.
        right: usize,
    },
}
