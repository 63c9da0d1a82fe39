//! Linear approximation probability.

use rayon::prelude::*;
use sbox_core::SBox;

use crate::boolean::parity;

/// LAP: the bias of the best linear approximation `parity(a & x) =
/// parity(b & S(x))` over all nonzero mask pairs. For each pair the ±1
/// agreement sum over the 256 inputs is taken; the maximum absolute sum
/// divided by 512 is the probability advantage over guessing.
///
/// The canonical AES S-box scores 0.0625 (32/512).
pub fn lap(sbox: &SBox) -> f64 {
    let max_abs = (1u32..256)
        .into_par_iter()
        .map(|a| {
            let a = a as u8;
            let mut best = 0u32;
            for b in 1..256u32 {
                let b = b as u8;
                let mut sum = 0i32;
                for x in 0..256u32 {
                    let x = x as u8;
                    let agree = parity(a & x) == parity(b & sbox.lookup(x));
                    sum += if agree { 1 } else { -1 };
                }
                best = best.max(sum.unsigned_abs());
            }
            best
        })
        .max()
        .expect("mask range is non-empty");
    f64::from(max_abs) / 512.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbox_core::{AES_CONSTANT, AES_MATRIX};

    #[test]
    fn aes_sbox_scores_one_sixteenth() {
        let sbox = SBox::from_affine(&AES_MATRIX, AES_CONSTANT);
        assert_eq!(lap(&sbox), 0.0625);
    }

    #[test]
    fn identity_sbox_scores_one_half() {
        // a == b agrees on every input, giving the maximal |sum| of 256.
        let mut table = [0u8; 256];
        for (x, slot) in table.iter_mut().enumerate() {
            *slot = x as u8;
        }
        let sbox = SBox::from_table(table).expect("identity is a bijection");
        assert_eq!(lap(&sbox), 0.5);
    }
}
