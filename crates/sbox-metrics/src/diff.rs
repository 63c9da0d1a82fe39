//! Differential uniformity and the differential approximation probability.

use rayon::prelude::*;
use sbox_core::SBox;

/// Largest entry of the difference distribution table outside the trivial
/// (0, 0) cell: the count of inputs `x` with `S(x) ^ S(x ^ dx) == dy`,
/// maximised over all nonzero `dx` and all `dy`.
fn max_differential_count(sbox: &SBox) -> u32 {
    (1u32..256)
        .into_par_iter()
        .map(|dx| {
            let dx = dx as u8;
            let mut counts = [0u32; 256];
            for x in 0..256u32 {
                let x = x as u8;
                let dy = sbox.lookup(x) ^ sbox.lookup(x ^ dx);
                counts[usize::from(dy)] += 1;
            }
            counts.into_iter().max().expect("256 difference counts")
        })
        .max()
        .expect("dx range is non-empty")
}

/// Differential uniformity: the raw maximum DDT count. The canonical AES
/// S-box scores 4; the identity map scores 256.
pub fn differential_uniformity(sbox: &SBox) -> u32 {
    max_differential_count(sbox)
}

/// DAP: the maximum DDT count as a probability, `du / 256`.
pub fn dap(sbox: &SBox) -> f64 {
    f64::from(max_differential_count(sbox)) / 256.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbox_core::{AES_CONSTANT, AES_MATRIX};

    #[test]
    fn aes_sbox_is_four_uniform() {
        let sbox = SBox::from_affine(&AES_MATRIX, AES_CONSTANT);
        assert_eq!(differential_uniformity(&sbox), 4);
        assert_eq!(dap(&sbox), 0.015625);
    }

    #[test]
    fn identity_sbox_is_maximally_uniform() {
        // S(x) ^ S(x ^ dx) == dx for every x, so each dx row has one cell
        // holding all 256 inputs.
        let mut table = [0u8; 256];
        for (x, slot) in table.iter_mut().enumerate() {
            *slot = x as u8;
        }
        let sbox = SBox::from_table(table).expect("identity is a bijection");
        assert_eq!(differential_uniformity(&sbox), 256);
        assert_eq!(dap(&sbox), 1.0);
    }
}
