//! Non-linearity: distance of the worst component function to the
//! nearest affine function.

use rayon::prelude::*;
use sbox_core::SBox;

use crate::boolean::component_function;
use crate::wht::walsh_hadamard;

/// Non-linearity of one Boolean truth table: `(256 - max|W|) / 2`.
pub(crate) fn function_nonlinearity(func: &[u8; 256]) -> u32 {
    let spectrum = walsh_hadamard(func);
    let max_abs = spectrum
        .iter()
        .map(|w| w.unsigned_abs())
        .max()
        .expect("spectrum has 256 entries");
    (256 - max_abs) / 2
}

/// Non-linearity of the S-box: the minimum over all 255 nonzero output
/// masks `b` of the non-linearity of `f_b(x) = parity(b & S(x))`.
///
/// Range 0..=120 for 8-bit S-boxes; the canonical AES S-box scores 112.
pub fn nonlinearity(sbox: &SBox) -> u32 {
    (1u32..256)
        .into_par_iter()
        .map(|mask| function_nonlinearity(&component_function(sbox, mask as u8)))
        .min()
        .expect("mask range is non-empty")
}
