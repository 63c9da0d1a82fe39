//! Key schedule and single-block encryption/decryption.

use core::convert::TryInto;

use sbox_core::{InvSBox, SBox};

use crate::block::{block_from_slice, Block};
use crate::error::CipherError;
use crate::key::{Aes128Key, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32, sbox: &SBox) -> u32 {
    let b0 = sbox.lookup((word >> 24) as u8) as u32;
    let b1 = sbox.lookup((word >> 16) as u8) as u32;
    let b2 = sbox.lookup((word >> 8) as u8) as u32;
    let b3 = sbox.lookup(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Expands a 128-bit key into 11 round keys.
///
/// SubWord runs through the injected S-box rather than the fixed Rijndael
/// table, so different S-boxes derive different schedules from the same
/// key. The schedule is only valid together with the S-box that built it.
pub fn expand_key(key: &Aes128Key, sbox: &SBox) -> RoundKeys {
    let mut w = [0u32; 44];
    for (i, chunk) in key.0.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    for i in 4..44 {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp), sbox) ^ (u32::from(RCON[(i / 4) - 1]) << 24);
        }
        w[i] = w[i - 4] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; 11];
    for (round, round_key) in round_keys.iter_mut().enumerate() {
        for word_idx in 0..4 {
            let bytes = w[round * 4 + word_idx].to_be_bytes();
            round_key[word_idx * 4..word_idx * 4 + 4].copy_from_slice(&bytes);
        }
    }

    RoundKeys(round_keys)
}

pub(crate) fn encrypt_block_inner(block: &Block, round_keys: &RoundKeys, sbox: &SBox) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..10 {
        sub_bytes(&mut state, sbox);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state, sbox);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(10));

    state
}

pub(crate) fn decrypt_block_inner(
    block: &Block,
    round_keys: &RoundKeys,
    inv_sbox: &InvSBox,
) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(10));
    for round in (1..10).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state, inv_sbox);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state, inv_sbox);
    add_round_key(&mut state, round_keys.get(0));

    state
}

/// Precomputed state for repeated cipher calls with one (key, S-box) pair:
/// the expanded key schedule and the derived inverse S-box. Pure value
/// derivation; rebuilding it for the same inputs always yields the same
/// context.
#[derive(Clone)]
pub struct AesContext {
    sbox: SBox,
    inv_sbox: InvSBox,
    round_keys: RoundKeys,
}

impl AesContext {
    /// Derives the context for a key and S-box.
    pub fn new(key: &Aes128Key, sbox: &SBox) -> Self {
        Self {
            sbox: *sbox,
            inv_sbox: sbox.inverse(),
            round_keys: expand_key(key, sbox),
        }
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block_inner(block, &self.round_keys, &self.sbox)
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block_inner(block, &self.round_keys, &self.inv_sbox)
    }
}

/// Encrypts a single 16-byte block. Plaintext and key must be exactly 16
/// bytes; anything else is a reported error, never silently padded or
/// truncated (padding belongs to the bulk engine's caller contract).
pub fn encrypt_block(plaintext: &[u8], key: &[u8], sbox: &SBox) -> Result<Block, CipherError> {
    let block = block_from_slice(plaintext)?;
    let key = Aes128Key::from_slice(key)?;
    Ok(AesContext::new(&key, sbox).encrypt_block(&block))
}

/// Decrypts a single 16-byte block; the inverse S-box is derived from the
/// forward S-box supplied.
pub fn decrypt_block(ciphertext: &[u8], key: &[u8], sbox: &SBox) -> Result<Block, CipherError> {
    let block = block_from_slice(ciphertext)?;
    let key = Aes128Key::from_slice(key)?;
    Ok(AesContext::new(&key, sbox).decrypt_block(&block))
}
