//! Transparency order, a DPA-resistance indicator.

use rayon::prelude::*;
use sbox_core::SBox;

use crate::boolean::parity;

/// Transparency order. For each nonzero output mask `b` the absolute
/// correlation of the directional derivative `S(x) ^ S(x ^ dx)` with `b`
/// is summed over every nonzero `dx` and normalised by `256 * 255`; the
/// reported value is the mean over the 255 masks of
/// `|8 - 2 wt(b)|` minus that normalised sum.
///
/// Lower is better for side-channel resistance. The identity map, whose
/// derivatives are constant, scores `297 / 255`.
pub fn transparency_order(sbox: &SBox) -> f64 {
    let total: f64 = (1u32..256)
        .into_par_iter()
        .map(|b| {
            let b = b as u8;
            let mut corr_sum = 0u64;
            for dx in 1..256u32 {
                let dx = dx as u8;
                let mut corr = 0i32;
                for x in 0..256u32 {
                    let x = x as u8;
                    let derivative = sbox.lookup(x) ^ sbox.lookup(x ^ dx);
                    corr += 1 - 2 * i32::from(parity(b & derivative));
                }
                corr_sum += u64::from(corr.unsigned_abs());
            }
            let weight_term = f64::from((8 - 2 * i32::from(b.count_ones() as u8)).abs());
            weight_term - corr_sum as f64 / (256.0 * 255.0)
        })
        .sum();
    total / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbox_core::{AES_CONSTANT, AES_MATRIX};

    #[test]
    fn identity_sbox_matches_closed_form() {
        // Every derivative is the constant dx, so each |corr| is 256 and
        // the mask term sums to 552 over the nonzero masks.
        let mut table = [0u8; 256];
        for (x, slot) in table.iter_mut().enumerate() {
            *slot = x as u8;
        }
        let sbox = SBox::from_table(table).expect("identity is a bijection");
        let value = transparency_order(&sbox);
        assert!((value - 297.0 / 255.0).abs() < 1e-9, "to = {value}");
    }

    #[test]
    fn aes_sbox_is_within_the_metric_range() {
        let sbox = SBox::from_affine(&AES_MATRIX, AES_CONSTANT);
        let value = transparency_order(&sbox);
        assert!(value > 0.0 && value < 8.0, "to = {value}");
    }
}
