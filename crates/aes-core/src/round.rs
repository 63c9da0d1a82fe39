//! AES round transformations, parameterized by the injected S-box.

use sbox_core::{InvSBox, SBox};

use crate::block::{xor_in_place, Block};
use crate::tables::mix_tables;

/// Applies SubBytes in place through the injected S-box.
#[inline]
pub fn sub_bytes(state: &mut Block, sbox: &SBox) {
    for byte in state.iter_mut() {
        *byte = sbox.lookup(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block, inv_sbox: &InvSBox) {
    for byte in state.iter_mut() {
        *byte = inv_sbox.lookup(*byte);
    }
}

/// Rotates row `r` of the column-major state left by `r` positions.
pub fn shift_rows(state: &mut Block) {
    for row in 1..4 {
        let mut bytes = [
            state[row],
            state[4 + row],
            state[8 + row],
            state[12 + row],
        ];
        bytes.rotate_left(row);
        for (col, &byte) in bytes.iter().enumerate() {
            state[col * 4 + row] = byte;
        }
    }
}

/// Rotates row `r` of the state right by `r` positions.
pub fn inv_shift_rows(state: &mut Block) {
    for row in 1..4 {
        let mut bytes = [
            state[row],
            state[4 + row],
            state[8 + row],
            state[12 + row],
        ];
        bytes.rotate_right(row);
        for (col, &byte) in bytes.iter().enumerate() {
            state[col * 4 + row] = byte;
        }
    }
}

/// Multiplies every column by the MDS matrix over GF(2^8).
pub fn mix_columns(state: &mut Block) {
    let t = mix_tables();
    for col in 0..4 {
        let idx = col * 4;
        let [s0, s1, s2, s3] = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        state[idx] = t.mul2[s0 as usize] ^ t.mul3[s1 as usize] ^ s2 ^ s3;
        state[idx + 1] = s0 ^ t.mul2[s1 as usize] ^ t.mul3[s2 as usize] ^ s3;
        state[idx + 2] = s0 ^ s1 ^ t.mul2[s2 as usize] ^ t.mul3[s3 as usize];
        state[idx + 3] = t.mul3[s0 as usize] ^ s1 ^ s2 ^ t.mul2[s3 as usize];
    }
}

/// Multiplies every column by the inverse MDS matrix.
pub fn inv_mix_columns(state: &mut Block) {
    let t = mix_tables();
    for col in 0..4 {
        let idx = col * 4;
        let [s0, s1, s2, s3] = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        state[idx] = t.mul14[s0 as usize]
            ^ t.mul11[s1 as usize]
            ^ t.mul13[s2 as usize]
            ^ t.mul9[s3 as usize];
        state[idx + 1] = t.mul9[s0 as usize]
            ^ t.mul14[s1 as usize]
            ^ t.mul11[s2 as usize]
            ^ t.mul13[s3 as usize];
        state[idx + 2] = t.mul13[s0 as usize]
            ^ t.mul9[s1 as usize]
            ^ t.mul14[s2 as usize]
            ^ t.mul11[s3 as usize];
        state[idx + 3] = t.mul11[s0 as usize]
            ^ t.mul13[s1 as usize]
            ^ t.mul9[s2 as usize]
            ^ t.mul14[s3 as usize];
    }
}

/// XORs a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;
    use sbox_core::{AES_CONSTANT, AES_MATRIX};

    #[test]
    fn shift_rows_round_trips() {
        let mut rng = ChaCha20Rng::from_seed([30u8; 32]);
        for _ in 0..16 {
            let mut state = [0u8; 16];
            rng.fill_bytes(&mut state);
            let original = state;
            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn shift_rows_leaves_row_zero_fixed() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        // Row 0 occupies indices 0, 4, 8, 12.
        assert_eq!([state[0], state[4], state[8], state[12]], [0, 4, 8, 12]);
        // Row 1 rotated left by one: 1,5,9,13 -> 5,9,13,1.
        assert_eq!([state[1], state[5], state[9], state[13]], [5, 9, 13, 1]);
    }

    #[test]
    fn mix_columns_round_trips() {
        let mut rng = ChaCha20Rng::from_seed([31u8; 32]);
        for _ in 0..16 {
            let mut state = [0u8; 16];
            rng.fill_bytes(&mut state);
            let original = state;
            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn sub_bytes_round_trips_through_inverse() {
        let sbox = SBox::from_affine(&AES_MATRIX, AES_CONSTANT);
        let inv = sbox.inverse();
        let mut state: Block = core::array::from_fn(|i| (i * 13) as u8);
        let original = state;
        sub_bytes(&mut state, &sbox);
        inv_sub_bytes(&mut state, &inv);
        assert_eq!(state, original);
    }
}
