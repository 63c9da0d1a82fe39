//! Strict avalanche criterion.

use sbox_core::SBox;

/// Mean over all 64 (input bit, output bit) pairs of the fraction of
/// inputs whose output bit `j` changes when input bit `i` is flipped.
/// Ideal value 0.5: every single-bit flip changes every output bit half
/// the time.
pub fn sac(sbox: &SBox) -> f64 {
    let mut total = 0.0f64;
    for i in 0..8 {
        let mask = 1u8 << i;
        for j in 0..8 {
            let changes = (0..256u32)
                .filter(|&x| {
                    let x = x as u8;
                    let bit = (sbox.lookup(x) >> j) & 1;
                    let bit_flipped = (sbox.lookup(x ^ mask) >> j) & 1;
                    bit != bit_flipped
                })
                .count();
            total += changes as f64 / 256.0;
        }
    }
    total / 64.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbox_core::{AES_CONSTANT, AES_MATRIX};

    #[test]
    fn aes_sbox_is_close_to_half() {
        let sbox = SBox::from_affine(&AES_MATRIX, AES_CONSTANT);
        let value = sac(&sbox);
        assert!((value - 0.5).abs() < 0.01, "sac = {value}");
    }

    #[test]
    fn identity_sbox_scores_exactly_one_eighth() {
        // Flipping input bit i changes exactly output bit i: 8 of the 64
        // pairs have fraction 1, the rest 0.
        let mut table = [0u8; 256];
        for (x, slot) in table.iter_mut().enumerate() {
            *slot = x as u8;
        }
        let sbox = SBox::from_table(table).expect("identity is a bijection");
        assert_eq!(sac(&sbox), 0.125);
    }
}
