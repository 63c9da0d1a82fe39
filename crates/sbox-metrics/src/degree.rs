//! Algebraic degree via the algebraic normal form.

use sbox_core::SBox;

use crate::boolean::bit_function;
use crate::wht::algebraic_normal_form;

/// Algebraic degree: the largest monomial degree appearing in the ANF of
/// any output-bit function. XOR combinations of output bits cannot raise
/// the degree, so probing the 8 bits covers every component function. For
/// 8-bit bijections the maximum attainable is 7; the canonical AES S-box
/// reaches it.
pub fn algebraic_degree(sbox: &SBox) -> u32 {
    let mut degree = 0;
    for bit in 0..8 {
        let anf = algebraic_normal_form(&bit_function(sbox, bit));
        for (m, &coeff) in anf.iter().enumerate() {
            if coeff != 0 {
                degree = degree.max((m as u32).count_ones());
            }
        }
    }
    degree
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbox_core::{AES_CONSTANT, AES_MATRIX};

    #[test]
    fn aes_sbox_has_degree_seven() {
        let sbox = SBox::from_affine(&AES_MATRIX, AES_CONSTANT);
        assert_eq!(algebraic_degree(&sbox), 7);
    }

    #[test]
    fn identity_sbox_has_degree_one() {
        let mut table = [0u8; 256];
        for (x, slot) in table.iter_mut().enumerate() {
            *slot = x as u8;
        }
        let sbox = SBox::from_table(table).expect("identity is a bijection");
        assert_eq!(algebraic_degree(&sbox), 1);
    }
}
