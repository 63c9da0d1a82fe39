//! Bulk ECB engine: many independent blocks, block-parallel.
//!
//! Electronic-codebook mode is kept deliberately: each block is encrypted
//! independently with no chaining, which makes the per-block work order
//! free and batchable, and leaves plaintext patterns visible in the
//! ciphertext. That weakness is part of the research methodology being
//! modeled, not hidden from the caller.

use rayon::prelude::*;
use sbox_core::SBox;

use crate::block::{Block, BLOCK_SIZE};
use crate::cipher::AesContext;
use crate::error::CipherError;
use crate::key::Aes128Key;

/// PKCS#7 padding to a block multiple. Block-aligned input still gains one
/// full padding block, so the pad length is always recoverable.
pub fn pkcs7_pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Validates and strips PKCS#7 padding. Every padding byte is checked
/// against the trailing length byte; a mismatch is an integrity failure,
/// never a silent pass-through.
pub fn pkcs7_unpad(data: &[u8]) -> Result<&[u8], CipherError> {
    let Some(&pad_byte) = data.last() else {
        return Err(CipherError::MissingPadding);
    };
    let pad_len = pad_byte as usize;
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > data.len() {
        return Err(CipherError::InvalidPadding { byte: pad_byte });
    }
    let body_len = data.len() - pad_len;
    if data[body_len..].iter().any(|&b| b != pad_byte) {
        return Err(CipherError::InvalidPadding { byte: pad_byte });
    }
    Ok(&data[..body_len])
}

/// Encrypts an arbitrary byte buffer in ECB mode: PKCS#7 pad, then encrypt
/// every block independently and in parallel. Output length is always
/// `len + (16 - len % 16)` bytes, i.e. at least one block longer than the
/// input.
pub fn encrypt_bulk(data: &[u8], key: &[u8], sbox: &SBox) -> Result<Vec<u8>, CipherError> {
    let key = Aes128Key::from_slice(key)?;
    let ctx = AesContext::new(&key, sbox);
    let mut buffer = pkcs7_pad(data);
    process_blocks(&mut buffer, |block| ctx.encrypt_block(block));
    Ok(buffer)
}

/// Decrypts an ECB buffer produced by [`encrypt_bulk`]: blocks decrypt
/// independently and in parallel, then the trailing padding is validated
/// and stripped.
pub fn decrypt_bulk(data: &[u8], key: &[u8], sbox: &SBox) -> Result<Vec<u8>, CipherError> {
    let key = Aes128Key::from_slice(key)?;
    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::CiphertextNotAligned { found: data.len() });
    }
    let ctx = AesContext::new(&key, sbox);
    let mut buffer = data.to_vec();
    process_blocks(&mut buffer, |block| ctx.decrypt_block(block));
    let body_len = pkcs7_unpad(&buffer)?.len();
    buffer.truncate(body_len);
    Ok(buffer)
}

/// Applies a per-block transform across the whole buffer. Blocks carry no
/// cross-block dependency, so each chunk writes only its own output slot
/// and the iteration order is irrelevant.
fn process_blocks<F>(buffer: &mut [u8], transform: F)
where
    F: Fn(&Block) -> Block + Sync,
{
    buffer
        .par_chunks_exact_mut(BLOCK_SIZE)
        .for_each(|chunk| {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            chunk.copy_from_slice(&transform(&block));
        });
}
